use keyring::Entry;
use nx_core::ports::{SecureStorageError, SecureStoragePort};

/// Keyring service under which the session entries are stored.
pub const SERVICE_NAME: &str = "Nexus";

/// System keychain-backed secure storage.
///
/// 基于系统钥匙串的安全存储实现。
#[derive(Debug, Clone, Default)]
pub struct SystemSecureStorage;

impl SystemSecureStorage {
    pub fn new() -> Self {
        Self
    }

    fn entry_for_key(&self, key: &str) -> Result<Entry, SecureStorageError> {
        Entry::new(SERVICE_NAME, key).map_err(|e| {
            SecureStorageError::Unavailable(format!("cannot open keyring entry {key}: {e}"))
        })
    }
}

fn map_keyring_error(action: &str, err: keyring::Error) -> SecureStorageError {
    match err {
        keyring::Error::PlatformFailure(msg) | keyring::Error::NoStorageAccess(msg) => {
            SecureStorageError::PermissionDenied(msg.to_string())
        }
        keyring::Error::BadEncoding(_) => {
            SecureStorageError::Corrupt(format!("keyring value is not valid for {action}"))
        }
        other => SecureStorageError::Other(format!("failed to {action} keyring entry: {other}")),
    }
}

impl SecureStoragePort for SystemSecureStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SecureStorageError> {
        let entry = self.entry_for_key(key)?;
        match entry.get_secret() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(map_keyring_error("read", err)),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), SecureStorageError> {
        let entry = self.entry_for_key(key)?;
        entry
            .set_secret(value)
            .map_err(|err| map_keyring_error("write", err))
    }

    fn delete(&self, key: &str) -> Result<(), SecureStorageError> {
        let entry = self.entry_for_key(key)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(map_keyring_error("delete", err)),
        }
    }
}
