//! Use case for logging in
//! 登录用例

use std::sync::Arc;

use nx_core::ports::{AuthApiPort, LoginResponse, UiPort};
use nx_core::{validate_login, AccountType, Alert, LoginForm, Route, Session, SubmissionError};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::session_store::SessionStore;
use crate::submission::SubmissionController;

const LOGIN_FAILED: &str = "Login failed";
const LOGIN_ERROR: &str = "Login error";

/// Use case for submitting the login form.
///
/// ## Behavior / 行为
/// - Refuses to start while another login attempt is in flight
/// - Validates locally; a failing form never reaches the network
/// - Requires both `access_token` and `role` in a successful reply
/// - Persists the session, then navigates to the home screen
/// - Any failure produces exactly one alert and leaves the screen unchanged
pub struct SubmitLogin {
    api: Arc<dyn AuthApiPort>,
    sessions: Arc<SessionStore>,
    ui: Arc<dyn UiPort>,
    controller: Arc<SubmissionController>,
}

impl SubmitLogin {
    pub fn new(
        api: Arc<dyn AuthApiPort>,
        sessions: Arc<SessionStore>,
        ui: Arc<dyn UiPort>,
        controller: Arc<SubmissionController>,
    ) -> Self {
        Self {
            api,
            sessions,
            ui,
            controller,
        }
    }

    /// Execute the use case.
    ///
    /// # Returns / 返回值
    /// - `Ok(session)` once the session is stored and the home screen shown
    /// - `Err(e)` for validation, remote, storage or busy failures
    pub async fn execute(&self, form: LoginForm) -> Result<Session, SubmissionError> {
        let attempt_id = Uuid::new_v4();
        let span = info_span!(
            "usecase.submit_login.execute",
            %attempt_id,
            username = %form.username()
        );

        async {
            let result = self.controller.run(|| self.attempt(&form)).await;

            match &result {
                Ok(session) => {
                    info!(role = %session.role, "Login succeeded");
                    self.ui.navigate(Route::Home).await;
                }
                Err(SubmissionError::Busy) => {
                    warn!("Login already in progress; submit ignored");
                }
                Err(SubmissionError::Validation(errors)) => {
                    info!(error_count = errors.len(), "Login form rejected locally");
                }
                Err(err) => {
                    warn!(error = %err, "Login failed");
                    self.ui
                        .alert(Alert::new(alert_title(err), err.user_message()))
                        .await;
                }
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn attempt(&self, form: &LoginForm) -> Result<Session, SubmissionError> {
        let errors = validate_login(form);
        if !errors.is_empty() {
            return Err(SubmissionError::Validation(errors));
        }

        let response = self
            .api
            .login(form.username(), form.password())
            .await
            .map_err(|e| SubmissionError::from_api(e, LOGIN_FAILED))?;

        let session = session_from_response(form.username(), response)?;

        self.sessions
            .save(&session)
            .map_err(|e| SubmissionError::Storage(e.to_string()))?;

        Ok(session)
    }
}

/// Build the session from a 2xx login reply, rejecting incomplete replies.
fn session_from_response(
    username: &str,
    response: LoginResponse,
) -> Result<Session, SubmissionError> {
    let access_token = response
        .access_token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| SubmissionError::MalformedResponse("missing access_token".into()))?;

    let role = response
        .role
        .filter(|role| !role.is_empty())
        .ok_or_else(|| SubmissionError::MalformedResponse("missing role".into()))?
        .parse::<AccountType>()
        .map_err(|e| SubmissionError::MalformedResponse(e.to_string()))?;

    Ok(Session::new(access_token, username, role))
}

fn alert_title(err: &SubmissionError) -> &'static str {
    match err {
        SubmissionError::Request { .. } => LOGIN_FAILED,
        SubmissionError::Transport(_) => "Error",
        _ => LOGIN_ERROR,
    }
}
