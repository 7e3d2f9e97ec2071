use std::fs;
use std::io;
use std::path::PathBuf;

use nx_core::ports::{SecureStorageError, SecureStoragePort};

/// File-based secure storage for headless or WSL environments.
///
/// 基于文件的安全存储（无桌面环境回退）。每个 key 一个文件，权限 0600。
#[derive(Debug, Clone)]
pub struct FileSecureStorage {
    base_dir: PathBuf,
}

impl FileSecureStorage {
    /// Create the storage in `dir`, creating it if needed.
    ///
    /// 在指定目录下创建文件安全存储。
    pub fn open(dir: PathBuf) -> Result<Self, io::Error> {
        fs::create_dir_all(&dir)?;
        Ok(Self { base_dir: dir })
    }

    /// Construct without touching the file system.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.bin"))
    }

    fn map_io_error(context: &str, err: io::Error) -> SecureStorageError {
        match err.kind() {
            io::ErrorKind::PermissionDenied => {
                SecureStorageError::PermissionDenied(format!("{context}: {err}"))
            }
            _ => SecureStorageError::Other(format!("{context}: {err}")),
        }
    }
}

impl SecureStoragePort for FileSecureStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SecureStorageError> {
        match fs::read(self.file_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::map_io_error("failed to read session file", err)),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), SecureStorageError> {
        let path = self.file_path(key);
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)
            .map_err(|err| Self::map_io_error("failed to write session temp file", err))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&temp_path, fs::Permissions::from_mode(0o600))
                .map_err(|err| Self::map_io_error("failed to restrict session file", err))?;
        }

        fs::rename(&temp_path, &path)
            .map_err(|err| Self::map_io_error("failed to replace session file", err))
    }

    fn delete(&self, key: &str) -> Result<(), SecureStorageError> {
        match fs::remove_file(self.file_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::map_io_error("failed to delete session file", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_overwrites_and_loads() {
        let temp_dir = tempfile::TempDir::new().expect("temp dir");
        let storage = FileSecureStorage::with_base_dir(temp_dir.path().to_path_buf());

        storage.set("access_token", b"first").expect("set");
        storage.set("access_token", b"second").expect("overwrite");

        assert_eq!(
            storage.get("access_token").expect("get"),
            Some(b"second".to_vec())
        );
    }

    #[test]
    fn missing_key_returns_none() {
        let temp_dir = tempfile::TempDir::new().expect("temp dir");
        let storage = FileSecureStorage::with_base_dir(temp_dir.path().to_path_buf());
        assert!(storage.get("role").expect("get").is_none());
    }

    #[test]
    fn delete_is_idempotent() {
        let temp_dir = tempfile::TempDir::new().expect("temp dir");
        let storage = FileSecureStorage::with_base_dir(temp_dir.path().to_path_buf());

        storage.set("username", b"bob").expect("set");
        storage.delete("username").expect("delete");
        storage.delete("username").expect("delete missing");

        assert!(storage.get("username").expect("get").is_none());
    }

    #[test]
    fn open_creates_directory() {
        let temp_dir = tempfile::TempDir::new().expect("temp dir");
        let dir = temp_dir.path().join("keyring");

        let storage = FileSecureStorage::open(dir.clone()).expect("open");
        storage.set("role", b"BUSINESS").expect("set");

        assert!(dir.join("role.bin").exists());
        assert!(!dir.join("role.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn files_are_private_to_owner() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::TempDir::new().expect("temp dir");
        let storage = FileSecureStorage::with_base_dir(temp_dir.path().to_path_buf());
        storage.set("access_token", b"tok").expect("set");

        let mode = fs::metadata(temp_dir.path().join("access_token.bin"))
            .expect("metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
