//! Submission domain module.
//!
//! This module defines the login/registration attempt state machine and its
//! error taxonomy.

mod error;
pub mod state_machine;

pub use error::{SubmissionError, MALFORMED_RESPONSE_MESSAGE, NETWORK_ERROR_MESSAGE};
pub use state_machine::{SubmissionEvent, SubmissionState, SubmissionStateMachine};
