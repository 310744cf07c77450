//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repository stands in for PostgreSQL in service and HTTP
//! tests; live database coverage lives in `adapters::postgres`.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
