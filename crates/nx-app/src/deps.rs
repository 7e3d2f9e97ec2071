//! # Application Dependencies / 应用依赖
//!
//! This module defines the dependency grouping for App construction.
//! 此模块定义 App 构造的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern. No defaults, no hidden logic,
//! just parameter grouping.

use std::sync::Arc;
use nx_core::ports::{AuthApiPort, SecureStoragePort, UiPort};

/// Application dependency grouping
/// 应用依赖分组
///
/// All dependencies are required.
pub struct AppDeps {
    // Remote API / 远程接口
    pub auth_api: Arc<dyn AuthApiPort>,

    // Storage / 安全存储
    pub secure_storage: Arc<dyn SecureStoragePort>,

    // UI / 界面
    pub ui: Arc<dyn UiPort>,
}
