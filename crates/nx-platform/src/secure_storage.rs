//! Secure storage selection.

use std::path::PathBuf;
use std::sync::Arc;

use nx_core::ports::SecureStoragePort;
use nx_core::StorageBackend;

use crate::capability::{detect_storage_capability, SecureStorageCapability};
use crate::file_secure_storage::FileSecureStorage;
use crate::memory_secure_storage::InMemorySecureStorage;
use crate::system_secure_storage::SystemSecureStorage;

#[derive(Debug, thiserror::Error)]
pub enum SecureStorageFactoryError {
    #[error("secure storage unsupported: {capability:?}")]
    Unsupported { capability: SecureStorageCapability },

    #[error("failed to initialize file-based secure storage in {dir}: {source}")]
    FileBasedInit {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Build the storage for `backend`. `keyring_dir` is only used by the file backend.
pub fn create_secure_storage(
    backend: StorageBackend,
    keyring_dir: PathBuf,
) -> Result<Arc<dyn SecureStoragePort>, SecureStorageFactoryError> {
    match backend {
        StorageBackend::Auto => {
            let capability = detect_storage_capability();
            log::debug!("Detected secure storage capability: {:?}", capability);
            storage_from_capability(capability, keyring_dir)
        }
        StorageBackend::System => {
            storage_from_capability(SecureStorageCapability::SystemKeyring, keyring_dir)
        }
        StorageBackend::File => {
            storage_from_capability(SecureStorageCapability::FileBasedKeystore, keyring_dir)
        }
        StorageBackend::Memory => {
            log::warn!("Using in-memory secure storage; the session ends with the process");
            Ok(Arc::new(InMemorySecureStorage::new()))
        }
    }
}

fn storage_from_capability(
    capability: SecureStorageCapability,
    keyring_dir: PathBuf,
) -> Result<Arc<dyn SecureStoragePort>, SecureStorageFactoryError> {
    match capability {
        SecureStorageCapability::SystemKeyring => {
            log::info!("Using system keyring for secure storage");
            Ok(Arc::new(SystemSecureStorage::new()))
        }
        SecureStorageCapability::FileBasedKeystore => {
            log::warn!(
                "Using file-based secure storage in {}",
                keyring_dir.display()
            );
            match FileSecureStorage::open(keyring_dir.clone()) {
                Ok(storage) => Ok(Arc::new(storage)),
                Err(source) => Err(SecureStorageFactoryError::FileBasedInit {
                    dir: keyring_dir,
                    source,
                }),
            }
        }
        SecureStorageCapability::Unsupported => {
            log::error!("Secure storage unsupported: {:?}", capability);
            Err(SecureStorageFactoryError::Unsupported { capability })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_capability_is_an_error() {
        let result = storage_from_capability(
            SecureStorageCapability::Unsupported,
            PathBuf::from("/nonexistent"),
        );
        assert!(matches!(
            result,
            Err(SecureStorageFactoryError::Unsupported { .. })
        ));
    }

    #[test]
    fn system_backend_builds_without_touching_keyring() {
        let result = create_secure_storage(StorageBackend::System, PathBuf::from("/nonexistent"));
        assert!(result.is_ok());
    }

    #[test]
    fn file_backend_creates_keyring_dir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let dir = temp_dir.path().join("keyring");

        let storage = create_secure_storage(StorageBackend::File, dir.clone()).unwrap();
        storage.set("role", b"BUSINESS").unwrap();

        assert!(dir.is_dir());
        assert_eq!(storage.get("role").unwrap(), Some(b"BUSINESS".to_vec()));
    }

    #[test]
    fn memory_backend_ignores_directory() {
        let storage =
            create_secure_storage(StorageBackend::Memory, PathBuf::from("/nonexistent")).unwrap();
        storage.set("username", b"bob").unwrap();
        assert_eq!(storage.get("username").unwrap(), Some(b"bob".to_vec()));
    }
}
