use std::collections::HashMap;
use std::sync::Mutex;

use nx_core::ports::{SecureStorageError, SecureStoragePort};

/// Process-local secure storage. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemorySecureStorage {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemorySecureStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>, SecureStorageError> {
        self.entries
            .lock()
            .map_err(|_| SecureStorageError::Other("in-memory storage lock poisoned".into()))
    }
}

impl SecureStoragePort for InMemorySecureStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SecureStorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), SecureStorageError> {
        self.lock()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SecureStorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_delete() {
        let storage = InMemorySecureStorage::new();
        storage.set("username", b"bob").unwrap();
        assert_eq!(storage.get("username").unwrap(), Some(b"bob".to_vec()));

        storage.delete("username").unwrap();
        assert_eq!(storage.get("username").unwrap(), None);
        storage.delete("username").unwrap();
    }
}
