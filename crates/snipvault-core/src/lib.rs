//! snipvault-core
//!
//! Pure domain types, input validation, and the seed dataset.
//! No I/O — this is the shared vocabulary of the snipvault system.

pub mod error;
pub mod models;
pub mod seed;
