//! Session persistence on top of the secure storage port.
//!
//! 会话持久化：三个 key 依次独立写入，不是事务，写到一半失败会留下部分状态。

use std::sync::Arc;

use nx_core::ports::{SecureStorageError, SecureStoragePort};
use nx_core::session::{ACCESS_TOKEN_KEY, ROLE_KEY, SESSION_KEYS, USERNAME_KEY};
use nx_core::{AccountType, Session};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("failed to write `{key}` after {written} of 3 session keys were written: {source}")]
    Write {
        key: &'static str,
        written: usize,
        #[source]
        source: SecureStorageError,
    },

    #[error("failed to read `{key}`: {source}")]
    Read {
        key: &'static str,
        #[source]
        source: SecureStorageError,
    },

    #[error("failed to delete `{key}`: {source}")]
    Delete {
        key: &'static str,
        #[source]
        source: SecureStorageError,
    },

    #[error("stored `{key}` is invalid: {reason}")]
    Corrupt { key: &'static str, reason: String },
}

/// Reads and writes the `(access_token, username, role)` triple.
pub struct SessionStore {
    storage: Arc<dyn SecureStoragePort>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SecureStoragePort>) -> Self {
        Self { storage }
    }

    /// Overwrite all three keys, token first.
    pub fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let values: [(&'static str, &str); 3] = [
            (ACCESS_TOKEN_KEY, session.access_token.as_str()),
            (USERNAME_KEY, session.username.as_str()),
            (ROLE_KEY, session.role.as_str()),
        ];

        for (written, (key, value)) in values.into_iter().enumerate() {
            if let Err(source) = self.storage.set(key, value.as_bytes()) {
                if written > 0 {
                    warn!(key, written, "session partially persisted");
                }
                return Err(SessionStoreError::Write {
                    key,
                    written,
                    source,
                });
            }
        }

        debug!(username = %session.username, role = %session.role, "session persisted");
        Ok(())
    }

    /// Full session, or `None` when any of the three keys is missing.
    pub fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let (Some(access_token), Some(username), Some(role)) =
            (self.access_token()?, self.username()?, self.role()?)
        else {
            return Ok(None);
        };

        let role = role
            .parse::<AccountType>()
            .map_err(|e| SessionStoreError::Corrupt {
                key: ROLE_KEY,
                reason: e.to_string(),
            })?;

        Ok(Some(Session {
            access_token,
            username,
            role,
        }))
    }

    pub fn access_token(&self) -> Result<Option<String>, SessionStoreError> {
        self.read_string(ACCESS_TOKEN_KEY)
    }

    pub fn username(&self) -> Result<Option<String>, SessionStoreError> {
        self.read_string(USERNAME_KEY)
    }

    /// Raw stored role; not checked against [`AccountType`].
    pub fn role(&self) -> Result<Option<String>, SessionStoreError> {
        self.read_string(ROLE_KEY)
    }

    /// Delete all three keys. Every key is attempted; the first failure is returned.
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        let mut first_error = None;
        for key in SESSION_KEYS {
            if let Err(source) = self.storage.delete(key) {
                warn!(key, error = %source, "failed to delete session key");
                first_error.get_or_insert(SessionStoreError::Delete { key, source });
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn read_string(&self, key: &'static str) -> Result<Option<String>, SessionStoreError> {
        let bytes = self
            .storage
            .get(key)
            .map_err(|source| SessionStoreError::Read { key, source })?;

        match bytes {
            None => Ok(None),
            Some(bytes) if bytes.is_empty() => Ok(None),
            Some(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|e| SessionStoreError::Corrupt {
                    key,
                    reason: e.to_string(),
                }),
        }
    }
}
