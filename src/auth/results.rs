//! Authentication result types
//!
//! Defines the outcome of a login that did not hit a hard error.

use super::identity::Identity;

/// Outcome of a password login
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginResult {
    pub identity: Identity,
    pub valid_password: bool,
}

impl LoginResult {
    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity,
            valid_password: true,
        }
    }

    /// Credentials were presented but not accepted.
    pub fn rejected() -> Self {
        Self::default()
    }
}
