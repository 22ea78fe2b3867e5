pub mod session;
pub mod snippet;
