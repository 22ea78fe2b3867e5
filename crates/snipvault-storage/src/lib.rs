//! snipvault-storage
//!
//! The persistence layer: a device-local JSON store, an HTTP client for
//! the shared remote store, and the facade that picks between them based
//! on whether an authenticated session is present.

pub mod error;
pub mod facade;
pub mod local;
pub mod remote;
pub mod store;
