use crate::ports::ApiError;
use crate::validation::ErrorMap;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error or server is down";
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Invalid server response. Please try again.";

/// Failure of a login or registration attempt.
///
/// 提交失败的分类；在提交控制器边界统一转换为一条用户可见提示。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// Local, per-field; never reaches the network.
    #[error("validation failed: {0}")]
    Validation(ErrorMap),

    /// HTTP success but required fields missing.
    #[error("malformed server response: {0}")]
    MalformedResponse(String),

    /// Non-2xx status.
    #[error("request rejected with status {status}: {message}")]
    Request { status: u16, message: String },

    /// Network unreachable or similar. The cause is for logs only.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Session could not be written to secure storage.
    #[error("secure storage failure: {0}")]
    Storage(String),

    /// Another attempt is still in flight.
    #[error("a submission is already in progress")]
    Busy,
}

impl SubmissionError {
    /// Convert a port error, using `fallback` when the server gave no `detail`.
    pub fn from_api(err: ApiError, fallback: &str) -> Self {
        match err {
            ApiError::Status { status, detail } => SubmissionError::Request {
                status,
                message: detail.unwrap_or_else(|| fallback.to_string()),
            },
            ApiError::Decode(reason) => SubmissionError::MalformedResponse(reason),
            ApiError::Transport(reason) => SubmissionError::Transport(reason),
            ApiError::NotConfigured => {
                SubmissionError::Transport("API base URL is not configured".to_string())
            }
        }
    }

    /// The single text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Validation(errors) => errors
                .first_message()
                .unwrap_or("Please check the form and try again.")
                .to_string(),
            SubmissionError::MalformedResponse(_) => MALFORMED_RESPONSE_MESSAGE.to_string(),
            SubmissionError::Request { message, .. } => message.clone(),
            SubmissionError::Transport(_) => NETWORK_ERROR_MESSAGE.to_string(),
            SubmissionError::Storage(_) => {
                "Could not save your session. Please try again.".to_string()
            }
            SubmissionError::Busy => "A request is already in progress.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_server_detail() {
        let err = SubmissionError::from_api(
            ApiError::Status {
                status: 401,
                detail: Some("Incorrect username or password".into()),
            },
            "Login failed",
        );
        assert_eq!(err.user_message(), "Incorrect username or password");
    }

    #[test]
    fn status_error_without_detail_uses_fallback() {
        let err = SubmissionError::from_api(
            ApiError::Status {
                status: 500,
                detail: None,
            },
            "Registration failed",
        );
        assert_eq!(
            err,
            SubmissionError::Request {
                status: 500,
                message: "Registration failed".into()
            }
        );
    }

    #[test]
    fn transport_cause_is_not_shown_to_user() {
        let err = SubmissionError::from_api(
            ApiError::Transport("connection refused (os error 111)".into()),
            "Login failed",
        );
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
        assert!(err.to_string().contains("connection refused"));
    }
}
