//! Nexus Application Orchestration Layer
//!
//! This crate contains the use cases a client screen triggers and the runtime
//! object that wires them to their ports.

pub mod app_paths;
pub mod deps;
pub mod session_store;
pub mod submission;
pub mod usecases;

use std::sync::Arc;

pub use deps::AppDeps;
pub use session_store::{SessionStore, SessionStoreError};
pub use submission::{SubmissionAttempt, SubmissionController};

use usecases::{
    FetchProfile, LoadHomeSummary, Logout, ResolveStartRoute, SubmitLogin, SubmitRegistration,
};

/// The application runtime.
///
/// Keeps one submission controller per form so that concurrent submits of the
/// same form are refused across use-case instances.
pub struct App {
    deps: AppDeps,
    sessions: Arc<SessionStore>,
    login_controller: Arc<SubmissionController>,
    registration_controller: Arc<SubmissionController>,
}

impl App {
    pub fn new(deps: AppDeps) -> Self {
        let sessions = Arc::new(SessionStore::new(deps.secure_storage.clone()));
        Self {
            deps,
            sessions,
            login_controller: Arc::new(SubmissionController::new()),
            registration_controller: Arc::new(SubmissionController::new()),
        }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { app: self }
    }

    pub fn sessions(&self) -> Arc<SessionStore> {
        self.sessions.clone()
    }

    pub fn login_controller(&self) -> Arc<SubmissionController> {
        self.login_controller.clone()
    }

    pub fn registration_controller(&self) -> Arc<SubmissionController> {
        self.registration_controller.clone()
    }
}

/// Use case accessor.
/// 用例访问器。
pub struct UseCases<'a> {
    app: &'a App,
}

impl UseCases<'_> {
    pub fn submit_login(&self) -> SubmitLogin {
        SubmitLogin::new(
            self.app.deps.auth_api.clone(),
            self.app.sessions.clone(),
            self.app.deps.ui.clone(),
            self.app.login_controller.clone(),
        )
    }

    pub fn submit_registration(&self) -> SubmitRegistration {
        SubmitRegistration::new(
            self.app.deps.auth_api.clone(),
            self.app.deps.ui.clone(),
            self.app.registration_controller.clone(),
        )
    }

    pub fn fetch_profile(&self) -> FetchProfile {
        FetchProfile::new(
            self.app.deps.auth_api.clone(),
            self.app.sessions.clone(),
            self.app.deps.ui.clone(),
        )
    }

    pub fn logout(&self) -> Logout {
        Logout::new(self.app.sessions.clone(), self.app.deps.ui.clone())
    }

    pub fn resolve_start_route(&self) -> ResolveStartRoute {
        ResolveStartRoute::new(self.app.sessions.clone(), self.app.deps.ui.clone())
    }

    pub fn load_home_summary(&self) -> LoadHomeSummary {
        LoadHomeSummary::new(self.app.sessions.clone())
    }
}
