//! Submission controller.
//!
//! Owns the attempt state for one form and enforces at most one submission
//! in flight.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use nx_core::submission::{SubmissionEvent, SubmissionStateMachine};
use nx_core::{SubmissionError, SubmissionState};

/// Holds the state machine for one login or registration form.
#[derive(Default)]
pub struct SubmissionController {
    state: Mutex<SubmissionState>,
    submitted: AtomicBool,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current attempt state.
    pub fn state(&self) -> SubmissionState {
        self.lock_state().clone()
    }

    /// Whether submit was pressed at least once; the UI shows field errors only after that.
    pub fn is_submitted(&self) -> bool {
        self.submitted.load(Ordering::SeqCst)
    }

    /// Enter `Submitting`, or fail with [`SubmissionError::Busy`].
    ///
    /// The returned [`SubmissionAttempt`] must be finished with the outcome.
    /// Dropping it unfinished (cancelled future, timeout, panic) puts the
    /// form back to `Idle` so the next submit is accepted.
    pub fn begin(&self) -> Result<SubmissionAttempt<'_>, SubmissionError> {
        self.apply(SubmissionEvent::Submit)?;
        self.submitted.store(true, Ordering::SeqCst);
        Ok(SubmissionAttempt {
            controller: self,
            finished: false,
        })
    }

    /// Run `attempt` between [`begin`](Self::begin) and
    /// [`SubmissionAttempt::finish`].
    ///
    /// The state lock is never held while `attempt` runs, so a concurrent
    /// call observes `Submitting` and is refused.
    pub async fn run<T, F, Fut>(&self, attempt: F) -> Result<T, SubmissionError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, SubmissionError>>,
    {
        let guard = self.begin()?;
        let result = attempt().await;
        guard.finish(&result);
        result
    }

    fn apply(&self, event: SubmissionEvent) -> Result<(), SubmissionError> {
        let mut state = self.lock_state();
        *state = SubmissionStateMachine::transition(state.clone(), event)?;
        Ok(())
    }

    fn lock_state(&self) -> MutexGuard<'_, SubmissionState> {
        // State is replaced whole, so a poisoned value is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// An attempt in `Submitting`.
///
/// 进行中的提交；未调用 `finish` 即被丢弃时回到 `Idle`。
pub struct SubmissionAttempt<'a> {
    controller: &'a SubmissionController,
    finished: bool,
}

impl SubmissionAttempt<'_> {
    /// Record the terminal state for this attempt.
    pub fn finish<T>(mut self, result: &Result<T, SubmissionError>) {
        let event = match result {
            Ok(_) => SubmissionEvent::RequestSucceeded,
            Err(SubmissionError::Validation(errors)) => {
                SubmissionEvent::ValidationRejected(errors.clone())
            }
            Err(err) => SubmissionEvent::RequestRejected(err.user_message()),
        };
        self.finished = true;
        // Outcome events never produce Busy.
        let _ = self.controller.apply(event);
    }
}

impl Drop for SubmissionAttempt<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!("Submission dropped before completion; returning to idle");
            let _ = self.controller.apply(SubmissionEvent::Abandoned);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nx_core::{ErrorMap, FormField};

    #[tokio::test]
    async fn successful_run_ends_in_succeeded() {
        let controller = SubmissionController::new();
        assert!(!controller.is_submitted());

        let result = controller.run(|| async { Ok::<_, SubmissionError>(42) }).await;

        assert_eq!(result, Ok(42));
        assert!(controller.is_submitted());
        assert_eq!(controller.state(), SubmissionState::Succeeded);
    }

    #[tokio::test]
    async fn validation_failure_is_recorded_with_errors() {
        let controller = SubmissionController::new();
        let mut errors = ErrorMap::new();
        errors.insert(FormField::Username, "Username is required");

        let failing = errors.clone();
        let result = controller
            .run(|| async move { Err::<(), _>(SubmissionError::Validation(failing)) })
            .await;

        assert!(result.is_err());
        assert_eq!(controller.state(), SubmissionState::ValidationFailed(errors));
    }

    #[tokio::test]
    async fn begin_twice_is_busy() {
        let controller = SubmissionController::new();
        let _attempt = controller.begin().unwrap();
        assert!(matches!(controller.begin(), Err(SubmissionError::Busy)));
        assert_eq!(controller.state(), SubmissionState::Submitting);
    }

    #[tokio::test]
    async fn request_failure_keeps_user_message() {
        let controller = SubmissionController::new();
        let _ = controller
            .run(|| async {
                Err::<(), _>(SubmissionError::Request {
                    status: 401,
                    message: "Incorrect username or password".into(),
                })
            })
            .await;

        assert_eq!(
            controller.state(),
            SubmissionState::RequestFailed("Incorrect username or password".into())
        );
    }

    #[tokio::test]
    async fn cancelled_attempt_does_not_lock_the_form() {
        let controller = SubmissionController::new();

        let timed_out = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            controller.run(|| async {
                tokio::time::sleep(std::time::Duration::from_secs(60)).await;
                Ok::<_, SubmissionError>(())
            }),
        )
        .await;

        assert!(timed_out.is_err());
        assert_eq!(controller.state(), SubmissionState::Idle);

        let next = controller.run(|| async { Ok::<_, SubmissionError>(()) }).await;
        assert_eq!(next, Ok(()));
        assert_eq!(controller.state(), SubmissionState::Succeeded);
    }

    #[test]
    fn dropped_attempt_returns_to_idle() {
        let controller = SubmissionController::new();
        drop(controller.begin().unwrap());
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(controller.is_submitted());
    }
}
