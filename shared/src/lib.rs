//! Shared types for the intelligence report engine
//!
//! Contains the boundary types exchanged with the form-collection and
//! rendering layers, plus the logging helpers used by every crate.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
