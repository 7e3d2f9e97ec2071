//! Business logic use cases
//!
//! [app start]  -> ResolveStartRoute -> Login | Home
//! [login]      -> SubmitLogin        -> Home
//! [register]   -> SubmitRegistration -> Login
//! [home]       -> LoadHomeSummary
//! [profile]    -> FetchProfile
//! [logout]     -> Logout             -> Login

pub mod fetch_profile;
pub mod load_home_summary;
pub mod logout;
pub mod resolve_start_route;
pub mod submit_login;
pub mod submit_registration;

pub use fetch_profile::{
    FetchProfile, FetchProfileError, PROFILE_FETCH_FAILED, SESSION_READ_FAILED,
};
pub use load_home_summary::{HomeSummary, LoadHomeSummary};
pub use logout::Logout;
pub use resolve_start_route::ResolveStartRoute;
pub use submit_login::SubmitLogin;
pub use submit_registration::{RegistrationReceipt, SubmitRegistration};
