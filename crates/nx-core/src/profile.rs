//! Server-side user profile.
//!
//! The profile shape is selected by an explicit `account_type` discriminant in
//! the response. A response without it is malformed; shapes are never guessed
//! from which optional fields happen to be present.

use serde::{Deserialize, Serialize};

use crate::account::{AccountType, TradeType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub username: String,
    pub email: String,
    pub abn: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceProviderProfile {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub trade: TradeType,
}

/// Profile returned by `GET /profile`.
///
/// 用户资料（显式标签联合体）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "account_type")]
pub enum UserProfile {
    #[serde(rename = "BUSINESS")]
    Business(BusinessProfile),
    #[serde(rename = "SERVICEPROVIDER")]
    ServiceProvider(ServiceProviderProfile),
}

#[derive(Debug, thiserror::Error)]
#[error("malformed profile response: {0}")]
pub struct ProfileDecodeError(#[from] serde_json::Error);

impl UserProfile {
    pub fn from_json(value: serde_json::Value) -> Result<Self, ProfileDecodeError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn account_type(&self) -> AccountType {
        match self {
            UserProfile::Business(_) => AccountType::Business,
            UserProfile::ServiceProvider(_) => AccountType::ServiceProvider,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            UserProfile::Business(p) => &p.username,
            UserProfile::ServiceProvider(p) => &p.username,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            UserProfile::Business(p) => &p.email,
            UserProfile::ServiceProvider(p) => &p.email,
        }
    }

    pub fn address(&self) -> &str {
        match self {
            UserProfile::Business(p) => &p.address,
            UserProfile::ServiceProvider(p) => &p.address,
        }
    }
}
