//! Request/response mapping
//!
//! Converts between the external customer shapes and the stored entity.
//! Both directions copy every field as-is, password included.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{addresses_or_empty, Address, Customer, CustomerId};

/// Inbound customer payload for create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub customer_id: CustomerId,
    pub customer_name: Option<String>,
    #[serde(rename = "customerDOB")]
    pub customer_dob: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default, deserialize_with = "addresses_or_empty")]
    pub addresses: Vec<Address>,
}

/// Outbound customer representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub customer_id: CustomerId,
    pub customer_name: Option<String>,
    #[serde(rename = "customerDOB")]
    pub customer_dob: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub addresses: Vec<Address>,
}

pub fn build_customer_entity(request: CustomerRequest) -> Customer {
    Customer {
        customer_id: request.customer_id,
        customer_name: request.customer_name,
        customer_dob: request.customer_dob,
        phone_number: request.phone_number,
        email: request.email,
        password: request.password,
        addresses: request.addresses,
    }
}

pub fn build_customer_response(customer: Customer) -> CustomerResponse {
    CustomerResponse {
        customer_id: customer.customer_id,
        customer_name: customer.customer_name,
        customer_dob: customer.customer_dob,
        phone_number: customer.phone_number,
        email: customer.email,
        password: customer.password,
        addresses: customer.addresses,
    }
}

impl From<CustomerRequest> for Customer {
    fn from(request: CustomerRequest) -> Self {
        build_customer_entity(request)
    }
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        build_customer_response(customer)
    }
}
