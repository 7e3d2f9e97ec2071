//! Screen routes and user-facing notifications.

use serde::{Deserialize, Serialize};

/// Screens the client can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Registration,
    Home,
    Profile,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Registration => "/registration",
            Route::Home => "/home",
            Route::Profile => "/profile",
        }
    }
}

/// One-shot notification shown to the user.
///
/// 弹窗通知（标题 + 正文）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}
