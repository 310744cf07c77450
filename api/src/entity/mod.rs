//! SeaORM table models
//!
//! Storage-shaped models; domain code uses `domain::entities` instead.

pub mod customers;
