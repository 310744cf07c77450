//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod customers;

pub use customers::{add_customer, delete_customer, get_customer, list_customers, update_customer};
