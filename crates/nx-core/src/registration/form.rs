use serde::{Deserialize, Serialize};

/// Raw registration input as typed by the user.
///
/// 注册表单的原始输入（不可变记录，通过 setter 返回新记录）。
///
/// Every field is a plain string; an empty string means "not entered". The
/// record is never mutated in place: each `with_*` setter consumes the record
/// and returns an updated copy, so validation and submission always see one
/// consistent snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    username: String,
    email: String,
    password: String,
    phone_number: String,
    account_type: String,
    abn: String,
    address: String,
    first_name: String,
    last_name: String,
    trade: String,
}

macro_rules! form_field {
    ($field:ident, $setter:ident) => {
        pub fn $field(&self) -> &str {
            &self.$field
        }

        #[must_use]
        pub fn $setter(self, value: impl Into<String>) -> Self {
            Self {
                $field: value.into(),
                ..self
            }
        }
    };
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    form_field!(username, with_username);
    form_field!(email, with_email);
    form_field!(password, with_password);
    form_field!(phone_number, with_phone_number);
    form_field!(account_type, with_account_type);
    form_field!(abn, with_abn);
    form_field!(address, with_address);
    form_field!(first_name, with_first_name);
    form_field!(last_name, with_last_name);
    form_field!(trade, with_trade);
}

/// Raw login input.
///
/// 登录表单。
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    form_field!(username, with_username);
    form_field!(password, with_password);
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_return_updated_copy_and_leave_original_untouched() {
        let blank = RegistrationForm::new();
        let filled = blank.clone().with_username("bob").with_abn("12345678901");

        assert_eq!(blank.username(), "");
        assert_eq!(filled.username(), "bob");
        assert_eq!(filled.abn(), "12345678901");
        assert_eq!(filled.trade(), "");
    }

    #[test]
    fn login_form_debug_hides_password() {
        let form = LoginForm::new().with_username("bob").with_password("Secret123");
        let rendered = format!("{form:?}");
        assert!(rendered.contains("bob"));
        assert!(!rendered.contains("Secret123"));
    }
}
