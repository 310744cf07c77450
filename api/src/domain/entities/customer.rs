//! Customer domain entity
//!
//! The aggregate root of the service. A customer is persisted as one document
//! together with its embedded addresses.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::Address;

/// Caller-assigned customer identifier, unique across the store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub String);

impl CustomerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id is empty or only whitespace
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for CustomerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored customer profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: CustomerId,
    pub customer_name: Option<String>,
    #[serde(rename = "customerDOB")]
    pub customer_dob: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    /// Stored as given. Not hashed.
    pub password: Option<String>,
    /// Insertion order is preserved; duplicate address ids are kept as-is
    #[serde(default, deserialize_with = "addresses_or_empty")]
    pub addresses: Vec<Address>,
}

/// Reads an address list where both an omitted key and `null` mean empty
pub fn addresses_or_empty<'de, D>(deserializer: D) -> Result<Vec<Address>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Address>>::deserialize(deserializer)?.unwrap_or_default())
}
