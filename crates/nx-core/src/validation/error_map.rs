use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Every field the registration and login forms can report on.
///
/// The serialized name is the key the UI binds error text to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Username,
    Email,
    Password,
    PhoneNumber,
    AccountType,
    Abn,
    FirstName,
    LastName,
    Address,
    Trade,
}

impl FormField {
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Username => "username",
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::PhoneNumber => "phoneNumber",
            FormField::AccountType => "accountType",
            FormField::Abn => "abn",
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Address => "address",
            FormField::Trade => "trade",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field name -> human readable message.
///
/// 字段错误映射：缺少某个 key 表示该字段有效，空映射表示整张表单有效。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FormField, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Message of the first failing field in form order.
    pub fn first_message(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl FromIterator<(FormField, String)> for ErrorMap {
    fn from_iter<T: IntoIterator<Item = (FormField, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_ui_keys() {
        let mut errors = ErrorMap::new();
        errors.insert(FormField::PhoneNumber, "Phone number is required.");
        errors.insert(FormField::Abn, "Please enter your registered ABN.");

        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value["phoneNumber"], "Phone number is required.");
        assert_eq!(value["abn"], "Please enter your registered ABN.");
    }

    #[test]
    fn first_message_follows_form_order() {
        let mut errors = ErrorMap::new();
        errors.insert(FormField::Trade, "Please select a trade.");
        errors.insert(FormField::Email, "Email is invalid.");

        assert_eq!(errors.first_message(), Some("Email is invalid."));
        assert_eq!(errors.len(), 2);
    }
}
