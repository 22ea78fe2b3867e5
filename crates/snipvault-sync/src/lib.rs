//! snipvault-sync
//!
//! The session-transition sync controller: watches authentication-state
//! observations, detects the local-to-remote edge exactly once, and
//! migrates all device-local snippets into the remote store as one
//! atomic batch, clearing the local slot only on confirmed success.

pub mod controller;
pub mod error;
