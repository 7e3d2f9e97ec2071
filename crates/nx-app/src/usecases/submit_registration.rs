//! Use case for registering an account
//! 注册用例

use std::sync::Arc;

use nx_core::ports::{AuthApiPort, UiPort};
use nx_core::{AccountType, Alert, RegistrationForm, RegistrationRequest, Route, SubmissionError};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::submission::SubmissionController;

const REGISTRATION_FAILED: &str = "Registration failed";
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful! Please login.";

/// What a successful registration returns.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationReceipt {
    pub username: String,
    pub account_type: AccountType,
    /// Success body as sent by the server; its shape is not part of the contract.
    pub response: serde_json::Value,
}

/// Use case for submitting the registration form.
///
/// ## Behavior / 行为
/// - Validates the whole form eagerly; errors stay local
/// - Builds a typed payload for the selected account type only
/// - On success, tells the user to log in and navigates to the login screen.
///   No session is created here.
pub struct SubmitRegistration {
    api: Arc<dyn AuthApiPort>,
    ui: Arc<dyn UiPort>,
    controller: Arc<SubmissionController>,
}

impl SubmitRegistration {
    pub fn new(
        api: Arc<dyn AuthApiPort>,
        ui: Arc<dyn UiPort>,
        controller: Arc<SubmissionController>,
    ) -> Self {
        Self {
            api,
            ui,
            controller,
        }
    }

    pub async fn execute(
        &self,
        form: RegistrationForm,
    ) -> Result<RegistrationReceipt, SubmissionError> {
        let attempt_id = Uuid::new_v4();
        let span = info_span!(
            "usecase.submit_registration.execute",
            %attempt_id,
            username = %form.username(),
            account_type = %form.account_type()
        );

        async {
            let result = self.controller.run(|| self.attempt(&form)).await;

            match &result {
                Ok(receipt) => {
                    info!(account_type = %receipt.account_type, "Registration succeeded");
                    self.ui
                        .alert(Alert::new("Success", REGISTRATION_SUCCESS_MESSAGE))
                        .await;
                    self.ui.navigate(Route::Login).await;
                }
                Err(SubmissionError::Busy) => {
                    warn!("Registration already in progress; submit ignored");
                }
                Err(SubmissionError::Validation(errors)) => {
                    info!(errors = %errors, "Registration form rejected locally");
                }
                Err(err) => {
                    warn!(error = %err, "Registration failed");
                    let title = match err {
                        SubmissionError::Transport(_) => "Error",
                        _ => REGISTRATION_FAILED,
                    };
                    self.ui.alert(Alert::new(title, err.user_message())).await;
                }
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn attempt(
        &self,
        form: &RegistrationForm,
    ) -> Result<RegistrationReceipt, SubmissionError> {
        let request =
            RegistrationRequest::try_from(form).map_err(SubmissionError::Validation)?;

        let response = self
            .api
            .register(&request)
            .await
            .map_err(|e| SubmissionError::from_api(e, REGISTRATION_FAILED))?;

        Ok(RegistrationReceipt {
            username: request.common.username.clone(),
            account_type: request.account_type(),
            response,
        })
    }
}
