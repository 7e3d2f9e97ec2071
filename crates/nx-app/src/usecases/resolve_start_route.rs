//! Use case for picking the first screen on app start
//! 启动时决定初始页面

use std::sync::Arc;

use nx_core::ports::UiPort;
use nx_core::Route;
use tracing::{debug, warn};

use crate::session_store::SessionStore;

/// A stored token means the user is considered signed in. The token is not
/// verified locally.
pub struct ResolveStartRoute {
    sessions: Arc<SessionStore>,
    ui: Arc<dyn UiPort>,
}

impl ResolveStartRoute {
    pub fn new(sessions: Arc<SessionStore>, ui: Arc<dyn UiPort>) -> Self {
        Self { sessions, ui }
    }

    pub async fn execute(&self) -> Route {
        let route = match self.sessions.access_token() {
            Ok(Some(_)) => Route::Home,
            Ok(None) => Route::Login,
            Err(err) => {
                warn!(error = %err, "Could not read stored token; starting at login");
                Route::Login
            }
        };

        debug!(route = route.path(), "Resolved start route");
        self.ui.navigate(route).await;
        route
    }
}
