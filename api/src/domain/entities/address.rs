//! Address value embedded in a customer document

use serde::{Deserialize, Serialize};

/// A postal address belonging to one customer.
///
/// Addresses have no lifecycle of their own; they are always read and
/// written as part of the owning [`Customer`](super::Customer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_id: Option<String>,
    /// Free-form tag such as "home" or "work"
    pub address_type: Option<String>,
    /// Back-reference to the owning customer, not checked against it
    pub customer_id: Option<String>,
    pub flat_number: Option<String>,
    pub plot_number: Option<String>,
    pub building_name: Option<String>,
    pub road_number: Option<i32>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub pin_code: Option<i64>,
}
