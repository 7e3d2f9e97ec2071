use serde::{Deserialize, Serialize};

use crate::account::{AccountType, TradeType};
use crate::registration::RegistrationForm;
use crate::validation::{rules, validate, ErrorMap, FormField};

/// Fields every registration carries regardless of account type.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationCommon {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
}

impl std::fmt::Debug for RegistrationCommon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationCommon")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

/// Account-type specific attribute set.
///
/// 按账户类型区分的字段集合；类型本身保证只存在其中一套。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "account_type")]
pub enum RegistrationProfile {
    #[serde(rename = "BUSINESS")]
    Business { abn: String, address: String },
    #[serde(rename = "SERVICEPROVIDER")]
    ServiceProvider {
        first_name: String,
        last_name: String,
        address: String,
        trade: TradeType,
    },
}

impl RegistrationProfile {
    pub fn account_type(&self) -> AccountType {
        match self {
            RegistrationProfile::Business { .. } => AccountType::Business,
            RegistrationProfile::ServiceProvider { .. } => AccountType::ServiceProvider,
        }
    }
}

/// Typed registration payload sent to `POST /register`.
///
/// Serializes to the flat JSON object the backend expects: the common fields,
/// `account_type`, and only the attribute set of the selected account type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    #[serde(flatten)]
    pub common: RegistrationCommon,
    #[serde(flatten)]
    pub profile: RegistrationProfile,
}

impl RegistrationRequest {
    pub fn business(
        common: RegistrationCommon,
        abn: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            common,
            profile: RegistrationProfile::Business {
                abn: abn.into(),
                address: address.into(),
            },
        }
    }

    pub fn service_provider(
        common: RegistrationCommon,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        trade: TradeType,
    ) -> Self {
        Self {
            common,
            profile: RegistrationProfile::ServiceProvider {
                first_name: first_name.into(),
                last_name: last_name.into(),
                address: address.into(),
                trade,
            },
        }
    }

    /// Build the payload from a form that already passed validation.
    ///
    /// Returns `None` when the form's account type or trade cannot be parsed,
    /// which only happens if the caller skipped validation.
    pub fn from_valid_form(form: &RegistrationForm) -> Option<Self> {
        let common = RegistrationCommon {
            username: form.username().to_string(),
            email: form.email().to_string(),
            password: form.password().to_string(),
            phone_number: form.phone_number().to_string(),
        };

        match form.account_type().parse::<AccountType>().ok()? {
            AccountType::Business => Some(Self::business(common, form.abn(), form.address())),
            AccountType::ServiceProvider => {
                let trade = form.trade().parse::<TradeType>().ok()?;
                Some(Self::service_provider(
                    common,
                    form.first_name(),
                    form.last_name(),
                    form.address(),
                    trade,
                ))
            }
        }
    }

    pub fn account_type(&self) -> AccountType {
        self.profile.account_type()
    }
}

impl TryFrom<&RegistrationForm> for RegistrationRequest {
    type Error = ErrorMap;

    /// Validate `form` and build the payload in one step.
    fn try_from(form: &RegistrationForm) -> Result<Self, Self::Error> {
        let mut errors = validate(form);
        if !errors.is_empty() {
            return Err(errors);
        }
        Self::from_valid_form(form).ok_or_else(|| {
            errors.insert(FormField::AccountType, rules::ACCOUNT_TYPE_INVALID);
            errors
        })
    }
}
