//! Field validators.
//!
//! Pure, stateless predicates over a single string value. Each returns
//! `Ok(())` on pass or `Err` carrying the fixed message for the failure.
//! ASCII checks only; no locale handling.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::account::{AccountType, TradeType};

pub type RuleResult<T = ()> = Result<T, &'static str>;

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const PASSWORD_WEAK: &str =
    "Password must be at least 8 chars, with uppercase, lowercase, and a number.";
pub const PHONE_REQUIRED: &str = "Phone number is required.";
pub const PHONE_INVALID: &str = "Phone number must be 10 digits long.";
pub const ACCOUNT_TYPE_REQUIRED: &str = "Please choose an account type.";
pub const ACCOUNT_TYPE_INVALID: &str = "Invalid account type.";
pub const ABN_REQUIRED: &str = "Please enter your registered ABN.";
pub const ABN_INVALID: &str = "Invalid ABN. It must be exactly 11 digits.";
pub const BUSINESS_ADDRESS_REQUIRED: &str = "Please enter your business address.";
pub const ADDRESS_REQUIRED: &str = "Please enter your address.";
pub const FIRST_NAME_REQUIRED: &str = "Please enter your first name.";
pub const LAST_NAME_REQUIRED: &str = "Please enter your last name.";
pub const TRADE_REQUIRED: &str = "Please select a trade.";
pub const TRADE_INVALID: &str = "Invalid trade.";

pub const MIN_PASSWORD_LEN: usize = 8;
pub const PHONE_NUMBER_LEN: usize = 10;
pub const ABN_LEN: usize = 11;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

static PASSWORD_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\d]+$").expect("password pattern is valid"));

/// Fails with `message` when `value` is empty.
pub fn required(value: &str, message: &'static str) -> RuleResult {
    if value.is_empty() {
        Err(message)
    } else {
        Ok(())
    }
}

/// Loose `text@text.text` shape check.
pub fn email_format(value: &str) -> RuleResult {
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(EMAIL_INVALID)
    }
}

/// At least 8 ASCII letters/digits with one lowercase, one uppercase and one digit.
pub fn password_strength(value: &str) -> RuleResult {
    let strong = value.len() >= MIN_PASSWORD_LEN
        && PASSWORD_CHARSET.is_match(value)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit());

    if strong {
        Ok(())
    } else {
        Err(PASSWORD_WEAK)
    }
}

/// Exactly ten characters. Content is not checked.
pub fn phone_number(value: &str) -> RuleResult {
    if value.chars().count() == PHONE_NUMBER_LEN {
        Ok(())
    } else {
        Err(PHONE_INVALID)
    }
}

/// Exactly eleven characters. No checksum.
pub fn abn(value: &str) -> RuleResult {
    if value.chars().count() == ABN_LEN {
        Ok(())
    } else {
        Err(ABN_INVALID)
    }
}

pub fn account_type_membership(value: &str) -> RuleResult<AccountType> {
    value.parse().map_err(|_| ACCOUNT_TYPE_INVALID)
}

pub fn trade_membership(value: &str) -> RuleResult<TradeType> {
    value.parse().map_err(|_| TRADE_INVALID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_simple_shape_only() {
        assert!(email_format("bob@x.com").is_ok());
        assert_eq!(email_format("bob@x"), Err(EMAIL_INVALID));
        assert_eq!(email_format("bob.x.com"), Err(EMAIL_INVALID));
    }

    #[test]
    fn password_needs_all_character_classes() {
        assert!(password_strength("Abcdef12").is_ok());
        assert_eq!(password_strength("abcdef12"), Err(PASSWORD_WEAK));
        assert_eq!(password_strength("ABCDEF12"), Err(PASSWORD_WEAK));
        assert_eq!(password_strength("Abcdefgh"), Err(PASSWORD_WEAK));
        assert_eq!(password_strength("Abc12"), Err(PASSWORD_WEAK));
    }

    #[test]
    fn password_rejects_symbols() {
        assert_eq!(password_strength("Abcdef12!"), Err(PASSWORD_WEAK));
    }

    #[test]
    fn fixed_length_rules() {
        assert!(phone_number("0412345678").is_ok());
        assert!(phone_number("041234567").is_err());
        assert!(abn("12345678901").is_ok());
        assert_eq!(abn("123"), Err(ABN_INVALID));
    }

    #[test]
    fn membership_rules_parse_variants() {
        assert_eq!(account_type_membership("BUSINESS"), Ok(AccountType::Business));
        assert_eq!(account_type_membership("ADMIN"), Err(ACCOUNT_TYPE_INVALID));
        assert_eq!(trade_membership("CHEF"), Ok(TradeType::Chef));
        assert_eq!(trade_membership("chef"), Err(TRADE_INVALID));
    }
}
