//! Use case for loading the signed-in user's profile
//! 获取用户资料用例

use std::sync::Arc;

use nx_core::ports::{ApiError, AuthApiPort, UiPort};
use nx_core::submission::NETWORK_ERROR_MESSAGE;
use nx_core::{Alert, Route, UserProfile};
use tracing::{info, info_span, warn, Instrument};

use crate::session_store::{SessionStore, SessionStoreError};

pub const PROFILE_FETCH_FAILED: &str = "Profile fetch failed.";
pub const SESSION_READ_FAILED: &str = "Could not read the stored session.";

#[derive(Debug, thiserror::Error)]
pub enum FetchProfileError {
    #[error("no stored access token")]
    NotAuthenticated,

    #[error(transparent)]
    Storage(#[from] SessionStoreError),

    #[error("profile request failed: {0}")]
    Api(#[from] ApiError),
}

/// Use case for the profile screen.
///
/// Without a stored token the user is sent to the login screen and no request
/// is made.
pub struct FetchProfile {
    api: Arc<dyn AuthApiPort>,
    sessions: Arc<SessionStore>,
    ui: Arc<dyn UiPort>,
}

impl FetchProfile {
    pub fn new(
        api: Arc<dyn AuthApiPort>,
        sessions: Arc<SessionStore>,
        ui: Arc<dyn UiPort>,
    ) -> Self {
        Self { api, sessions, ui }
    }

    pub async fn execute(&self) -> Result<UserProfile, FetchProfileError> {
        let span = info_span!("usecase.fetch_profile.execute");

        async {
            let stored = match self.sessions.access_token() {
                Ok(stored) => stored,
                Err(err) => {
                    warn!(error = %err, "Failed to read stored access token");
                    self.ui
                        .alert(Alert::new(PROFILE_FETCH_FAILED, SESSION_READ_FAILED))
                        .await;
                    return Err(err.into());
                }
            };
            let token = match stored {
                Some(token) => token,
                None => {
                    info!("No access token stored; redirecting to login");
                    self.ui.navigate(Route::Login).await;
                    return Err(FetchProfileError::NotAuthenticated);
                }
            };

            match self.api.fetch_profile(&token).await {
                Ok(profile) => {
                    info!(account_type = %profile.account_type(), "Profile loaded");
                    Ok(profile)
                }
                Err(err) => {
                    warn!(error = %err, "Profile fetch failed");
                    self.ui.alert(profile_alert(&err)).await;
                    Err(err.into())
                }
            }
        }
        .instrument(span)
        .await
    }
}

fn profile_alert(err: &ApiError) -> Alert {
    match err {
        ApiError::Transport(_) | ApiError::NotConfigured => {
            Alert::new("Network error", NETWORK_ERROR_MESSAGE)
        }
        ApiError::Status {
            detail: Some(detail),
            ..
        } => Alert::new(PROFILE_FETCH_FAILED, detail.clone()),
        ApiError::Status { detail: None, .. } => {
            Alert::new(PROFILE_FETCH_FAILED, "Failed to fetch profile")
        }
        ApiError::Decode(_) => Alert::new(PROFILE_FETCH_FAILED, "Unrecognised profile data."),
    }
}
