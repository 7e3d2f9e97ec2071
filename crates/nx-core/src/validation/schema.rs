//! Account-type conditional schema.
//!
//! 按账户类型决定哪些附加字段为必填。

use crate::account::AccountType;
use crate::registration::RegistrationForm;
use crate::validation::rules::{self, RuleResult};
use crate::validation::{ErrorMap, FormField};

/// Which conditional field set applies to a form.
///
/// Selected from the parsed `accountType` before validation. `Unselected`
/// covers both an empty and an unknown account type: the membership check
/// reports those, and no conditional field is examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionalSchema {
    Business,
    ServiceProvider,
    Unselected,
}

impl ConditionalSchema {
    pub fn for_account_type(account_type: Option<AccountType>) -> Self {
        match account_type {
            Some(AccountType::Business) => ConditionalSchema::Business,
            Some(AccountType::ServiceProvider) => ConditionalSchema::ServiceProvider,
            None => ConditionalSchema::Unselected,
        }
    }

    pub fn required_fields(&self) -> &'static [FormField] {
        match self {
            ConditionalSchema::Business => &[FormField::Abn, FormField::Address],
            ConditionalSchema::ServiceProvider => &[
                FormField::FirstName,
                FormField::LastName,
                FormField::Address,
                FormField::Trade,
            ],
            ConditionalSchema::Unselected => &[],
        }
    }

    /// Apply this mode's rules, adding one entry per failing field.
    pub fn check(&self, form: &RegistrationForm, errors: &mut ErrorMap) {
        for field in self.required_fields() {
            if let Err(message) = self.check_field(*field, form) {
                errors.insert(*field, message);
            }
        }
    }

    fn check_field(&self, field: FormField, form: &RegistrationForm) -> RuleResult {
        match (self, field) {
            (ConditionalSchema::Business, FormField::Abn) => {
                rules::required(form.abn(), rules::ABN_REQUIRED)?;
                rules::abn(form.abn())
            }
            (ConditionalSchema::Business, FormField::Address) => {
                rules::required(form.address(), rules::BUSINESS_ADDRESS_REQUIRED)
            }
            (ConditionalSchema::ServiceProvider, FormField::FirstName) => {
                rules::required(form.first_name(), rules::FIRST_NAME_REQUIRED)
            }
            (ConditionalSchema::ServiceProvider, FormField::LastName) => {
                rules::required(form.last_name(), rules::LAST_NAME_REQUIRED)
            }
            (ConditionalSchema::ServiceProvider, FormField::Address) => {
                rules::required(form.address(), rules::ADDRESS_REQUIRED)
            }
            (ConditionalSchema::ServiceProvider, FormField::Trade) => {
                rules::required(form.trade(), rules::TRADE_REQUIRED)?;
                rules::trade_membership(form.trade()).map(|_| ())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_mode_requires_abn_and_address() {
        let schema = ConditionalSchema::for_account_type(Some(AccountType::Business));
        assert_eq!(schema.required_fields(), &[FormField::Abn, FormField::Address]);

        let mut errors = ErrorMap::new();
        schema.check(&RegistrationForm::new(), &mut errors);
        assert_eq!(errors.get(FormField::Abn), Some(rules::ABN_REQUIRED));
        assert_eq!(errors.get(FormField::Address), Some(rules::BUSINESS_ADDRESS_REQUIRED));
        assert!(!errors.contains(FormField::Trade));
    }

    #[test]
    fn service_provider_mode_uses_personal_address_message() {
        let schema = ConditionalSchema::for_account_type(Some(AccountType::ServiceProvider));
        let mut errors = ErrorMap::new();
        schema.check(&RegistrationForm::new(), &mut errors);

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(FormField::Address), Some(rules::ADDRESS_REQUIRED));
        assert!(!errors.contains(FormField::Abn));
    }

    #[test]
    fn unselected_mode_checks_nothing() {
        let schema = ConditionalSchema::for_account_type(None);
        let mut errors = ErrorMap::new();
        schema.check(&RegistrationForm::new(), &mut errors);
        assert!(errors.is_empty());
    }
}
