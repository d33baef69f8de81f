use serde::{Deserialize, Serialize};

/// The signed-in user. Exists only for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    /// Identity key; products submitted by the user carry it as `vendor_id`.
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    /// Creates a regular (non-admin) user.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Email address, used as the identity key
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            is_admin: false,
        }
    }

    pub fn admin(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            is_admin: true,
            ..Self::new(name, email)
        }
    }
}
