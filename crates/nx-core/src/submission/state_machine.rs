//! Submission state machine.
//!
//! Defines a pure state transition function for one login/registration form.

use serde::{Deserialize, Serialize};

use crate::submission::SubmissionError;
use crate::validation::ErrorMap;

/// Attempt state.
///
/// 提交状态。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    /// Nothing in flight.
    ///
    /// 空闲。
    #[default]
    Idle,
    /// Request running.
    ///
    /// 提交中。
    Submitting,
    /// Last attempt succeeded.
    ///
    /// 提交成功。
    Succeeded,
    /// Last attempt was stopped by local validation.
    ///
    /// 本地校验失败。
    ValidationFailed(ErrorMap),
    /// Last attempt failed remotely or on storage; carries the user message.
    ///
    /// 请求失败。
    RequestFailed(String),
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Succeeded
                | SubmissionState::ValidationFailed(_)
                | SubmissionState::RequestFailed(_)
        )
    }
}

/// Events that drive an attempt.
///
/// 驱动提交流程的事件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionEvent {
    /// User pressed submit.
    Submit,
    /// Local validation produced errors.
    ValidationRejected(ErrorMap),
    /// Request (and any follow-up persistence) completed.
    RequestSucceeded,
    /// Request or persistence failed with this user message.
    RequestRejected(String),
    /// The attempt was dropped before it produced an outcome.
    Abandoned,
}

/// Pure submission state machine.
///
/// 纯状态机：不包含副作用。
pub struct SubmissionStateMachine;

impl SubmissionStateMachine {
    /// Apply `event` to `state`.
    ///
    /// A `Submit` while already `Submitting` is refused with
    /// [`SubmissionError::Busy`]. Terminal states accept `Submit` directly,
    /// which is the "return to idle on next user action" edge. `Abandoned`
    /// returns an unfinished attempt to `Idle`. Outcome events outside
    /// `Submitting` are ignored.
    pub fn transition(
        state: SubmissionState,
        event: SubmissionEvent,
    ) -> Result<SubmissionState, SubmissionError> {
        match (state, event) {
            (SubmissionState::Submitting, SubmissionEvent::Submit) => Err(SubmissionError::Busy),
            (_, SubmissionEvent::Submit) => Ok(SubmissionState::Submitting),
            (SubmissionState::Submitting, SubmissionEvent::ValidationRejected(errors)) => {
                Ok(SubmissionState::ValidationFailed(errors))
            }
            (SubmissionState::Submitting, SubmissionEvent::RequestSucceeded) => {
                Ok(SubmissionState::Succeeded)
            }
            (SubmissionState::Submitting, SubmissionEvent::RequestRejected(message)) => {
                Ok(SubmissionState::RequestFailed(message))
            }
            (SubmissionState::Submitting, SubmissionEvent::Abandoned) => Ok(SubmissionState::Idle),
            (state, _event) => Ok(state),
        }
    }
}
