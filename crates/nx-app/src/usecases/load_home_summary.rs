use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::session_store::SessionStore;

/// Greeting data for the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeSummary {
    pub username: String,
    pub role: String,
}

/// Reads the stored username and role, falling back to placeholders.
pub struct LoadHomeSummary {
    sessions: Arc<SessionStore>,
}

impl LoadHomeSummary {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub fn execute(&self) -> HomeSummary {
        let username = self.sessions.username().unwrap_or_else(|err| {
            warn!(error = %err, "Could not read stored username");
            None
        });
        let role = self.sessions.role().unwrap_or_else(|err| {
            warn!(error = %err, "Could not read stored role");
            None
        });

        HomeSummary {
            username: username.unwrap_or_else(|| "User".to_string()),
            role: role.unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}
