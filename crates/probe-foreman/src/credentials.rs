//! Basic authentication credentials for the Foreman API.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Username and password sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

impl Credentials {
    /// Create credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Credentials from optional CLI values.
    ///
    /// Authentication is only used when both a username and a password are
    /// given and neither is empty.
    #[must_use]
    pub fn from_parts(username: Option<&str>, password: Option<&str>) -> Option<Self> {
        match (username, password) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => {
                Some(Self::new(user, pass))
            }
            _ => None,
        }
    }

    /// Encode as the value of an `Authorization` header.
    #[must_use]
    pub fn to_basic_auth(&self) -> String {
        let pair = format!("{}:{}", self.username, self.password);
        format!("Basic {}", BASE64.encode(pair.as_bytes()))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
