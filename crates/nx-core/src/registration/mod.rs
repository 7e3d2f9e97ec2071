//! Registration and login domain records.
//!
//! `form` holds raw user input, `request` holds the typed wire payload built
//! from a form that already passed validation.

mod form;
mod request;

pub use form::{LoginForm, RegistrationForm};
pub use request::{RegistrationCommon, RegistrationProfile, RegistrationRequest};
