//! Use case for signing out
//! 退出登录用例

use std::sync::Arc;

use nx_core::ports::UiPort;
use nx_core::{Alert, Route};
use tracing::{info, info_span, warn, Instrument};

use crate::session_store::{SessionStore, SessionStoreError};

pub const LOGGED_OUT_MESSAGE: &str = "You have been successfully logged out.";

/// Deletes the stored session and returns to the login screen.
pub struct Logout {
    sessions: Arc<SessionStore>,
    ui: Arc<dyn UiPort>,
}

impl Logout {
    pub fn new(sessions: Arc<SessionStore>, ui: Arc<dyn UiPort>) -> Self {
        Self { sessions, ui }
    }

    /// On failure the user is asked to retry and stays where they are.
    pub async fn execute(&self) -> Result<(), SessionStoreError> {
        let span = info_span!("usecase.logout.execute");

        async {
            match self.sessions.clear() {
                Ok(()) => {
                    info!("Session cleared");
                    self.ui.alert(Alert::new("Logged out", LOGGED_OUT_MESSAGE)).await;
                    self.ui.navigate(Route::Login).await;
                    Ok(())
                }
                Err(err) => {
                    warn!(error = %err, "Logout failed");
                    self.ui
                        .alert(Alert::new("Logout Failed", "Please try again."))
                        .await;
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }
}
