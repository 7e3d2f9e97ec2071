use crate::registration::{LoginForm, RegistrationForm};
use crate::validation::rules::{self, RuleResult};
use crate::validation::schema::ConditionalSchema;
use crate::validation::{ErrorMap, FormField};

/// Validate a registration form in one eager pass.
///
/// Unconditional fields are checked first, then the conditional schema picked
/// by the account type. Checks are independent of each other so every
/// violation is reported at once. The form is valid iff the result is empty.
pub fn validate(form: &RegistrationForm) -> ErrorMap {
    let mut errors = ErrorMap::new();

    record(
        &mut errors,
        FormField::Username,
        rules::required(form.username(), rules::USERNAME_REQUIRED),
    );
    record(&mut errors, FormField::Email, check_email(form.email()));
    record(&mut errors, FormField::Password, check_password(form.password()));
    record(&mut errors, FormField::PhoneNumber, check_phone(form.phone_number()));

    let account_type = match check_account_type(form.account_type()) {
        Ok(account_type) => Some(account_type),
        Err(message) => {
            errors.insert(FormField::AccountType, message);
            None
        }
    };

    ConditionalSchema::for_account_type(account_type).check(form, &mut errors);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        error_count = errors.len(),
        account_type = ?account_type,
        "registration form validated"
    );

    errors
}

/// Validate a login form: both fields must be present.
pub fn validate_login(form: &LoginForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    record(
        &mut errors,
        FormField::Username,
        rules::required(form.username(), rules::USERNAME_REQUIRED),
    );
    record(
        &mut errors,
        FormField::Password,
        rules::required(form.password(), rules::PASSWORD_REQUIRED),
    );
    errors
}

fn record(errors: &mut ErrorMap, field: FormField, result: RuleResult) {
    if let Err(message) = result {
        errors.insert(field, message);
    }
}

fn check_email(value: &str) -> RuleResult {
    rules::required(value, rules::EMAIL_REQUIRED)?;
    rules::email_format(value)
}

fn check_password(value: &str) -> RuleResult {
    rules::required(value, rules::PASSWORD_REQUIRED)?;
    rules::password_strength(value)
}

fn check_phone(value: &str) -> RuleResult {
    rules::required(value, rules::PHONE_REQUIRED)?;
    rules::phone_number(value)
}

fn check_account_type(value: &str) -> RuleResult<crate::account::AccountType> {
    rules::required(value, rules::ACCOUNT_TYPE_REQUIRED)?;
    rules::account_type_membership(value)
}
