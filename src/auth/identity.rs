//! Identity records returned to the host

/// Claims the host asks for. Accepted and ignored by this connector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scopes {
    pub offline_access: bool,
    pub groups: bool,
}

/// The user identity handed back after a successful login.
///
/// `Identity::default()` is the empty record returned alongside a rejected
/// or failed login.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub username: String,
    pub preferred_username: String,
    pub email: String,
    pub email_verified: bool,
    pub connector_data: Option<Vec<u8>>,
}

impl Identity {
    /// Builds the fixed identity for an authenticated database user. The
    /// database login name doubles as id, username and preferred username.
    pub fn for_username(username: &str) -> Self {
        Self {
            user_id: username.to_string(),
            username: username.to_string(),
            preferred_username: username.to_string(),
            email: String::new(),
            email_verified: false,
            connector_data: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
