//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod customer_service;
pub mod mapper;

pub use customer_service::CustomerService;
pub use mapper::{CustomerRequest, CustomerResponse};
