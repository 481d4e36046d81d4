//! Error handling
//!
//! Defines error types for configuration and login attempts.

pub mod types;

pub use types::*;
