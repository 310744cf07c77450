//! Domain entities
//!
//! Pure domain models representing the stored customer aggregate.
//! These are separate from the SeaORM table model in the `entity` module.

pub mod address;
pub mod customer;

pub use address::Address;
pub use customer::{addresses_or_empty, Customer, CustomerId};
