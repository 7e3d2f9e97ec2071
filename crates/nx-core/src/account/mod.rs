//! Account and trade catalogues.
//!
//! 账户类型与行业类型目录。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a raw string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Discriminant selecting which profile schema applies.
///
/// 账户类型，决定使用哪一套资料字段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    #[serde(rename = "BUSINESS")]
    Business,
    #[serde(rename = "SERVICEPROVIDER")]
    ServiceProvider,
}

impl AccountType {
    pub const ALL: [AccountType; 2] = [AccountType::Business, AccountType::ServiceProvider];

    /// Wire / storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Business => "BUSINESS",
            AccountType::ServiceProvider => "SERVICEPROVIDER",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "account type",
                value: s.to_string(),
            })
    }
}

/// Service-provider trade categories.
///
/// 服务提供者的行业类别（固定枚举）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeType {
    Barista,
    Bartender,
    Chef,
    Concierge,
    Foh,
    Mechanic,
    Plumber,
    Electrician,
    Hvactech,
}

impl TradeType {
    /// Picker order.
    pub const ALL: [TradeType; 9] = [
        TradeType::Barista,
        TradeType::Bartender,
        TradeType::Chef,
        TradeType::Concierge,
        TradeType::Foh,
        TradeType::Mechanic,
        TradeType::Plumber,
        TradeType::Electrician,
        TradeType::Hvactech,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Barista => "BARISTA",
            TradeType::Bartender => "BARTENDER",
            TradeType::Chef => "CHEF",
            TradeType::Concierge => "CONCIERGE",
            TradeType::Foh => "FOH",
            TradeType::Mechanic => "MECHANIC",
            TradeType::Plumber => "PLUMBER",
            TradeType::Electrician => "ELECTRICIAN",
            TradeType::Hvactech => "HVACTECH",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "trade",
                value: s.to_string(),
            })
    }
}
