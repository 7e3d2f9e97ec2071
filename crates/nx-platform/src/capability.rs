//! Platform capability detection for secure storage.
//!
//! Decides whether the session can live in the OS keyring or has to fall back
//! to files under the app data root.

/// Secure storage capability of the current platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecureStorageCapability {
    /// macOS Keychain, Windows Credential Manager, Linux Secret Service
    SystemKeyring,
    /// WSL or headless Linux
    FileBasedKeystore,
    Unsupported,
}

/// Detect the secure storage capability of the current platform.
///
/// - **macOS / Windows**: `SystemKeyring`
/// - **Linux**: `FileBasedKeystore` under WSL or without a desktop session,
///   otherwise `SystemKeyring`
/// - **Other**: `Unsupported`
pub fn detect_storage_capability() -> SecureStorageCapability {
    #[cfg(any(target_os = "macos", target_os = "windows"))]
    {
        return SecureStorageCapability::SystemKeyring;
    }

    #[cfg(target_os = "linux")]
    {
        if is_wsl() {
            log::warn!("WSL environment detected; session will be stored in files");
            return SecureStorageCapability::FileBasedKeystore;
        }

        if has_desktop_environment() {
            log::info!("Linux desktop environment detected; using system keyring");
            return SecureStorageCapability::SystemKeyring;
        }

        log::warn!("No desktop environment detected; session will be stored in files");
        SecureStorageCapability::FileBasedKeystore
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        log::error!("Unsupported platform for secure storage");
        SecureStorageCapability::Unsupported
    }
}

/// `/proc/version` mentions Microsoft/WSL, or a WSL variable is set.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn is_wsl() -> bool {
    if let Ok(version) = std::fs::read_to_string("/proc/version") {
        if version.contains("Microsoft") || version.contains("WSL") {
            return true;
        }
    }

    std::env::var("WSL_DISTRO_NAME").is_ok() || std::env::var("WSL_INTEROP").is_ok()
}

/// Keyring daemons need both a display and a D-Bus session bus.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn has_desktop_environment() -> bool {
    std::env::var("DISPLAY").is_ok() && std::env::var("DBUS_SESSION_BUS_ADDRESS").is_ok()
}
