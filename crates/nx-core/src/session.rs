//! Authenticated client identity.
//!
//! 会话三元组（token, username, role），由平台安全存储独占持有。

use serde::{Deserialize, Serialize};

use crate::account::AccountType;

/// Secure storage key for the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Secure storage key for the login name.
pub const USERNAME_KEY: &str = "username";
/// Secure storage key for the account role.
pub const ROLE_KEY: &str = "role";

/// All session keys, in write order.
pub const SESSION_KEYS: [&str; 3] = [ACCESS_TOKEN_KEY, USERNAME_KEY, ROLE_KEY];

/// Persisted `(access_token, username, role)` triple.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub username: String,
    pub role: AccountType,
}

impl Session {
    pub fn new(
        access_token: impl Into<String>,
        username: impl Into<String>,
        role: AccountType,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            username: username.into(),
            role,
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("username", &self.username)
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_token() {
        let session = Session::new("tok-123", "bob", AccountType::Business);
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("tok-123"));
        assert!(rendered.contains("bob"));
    }
}
