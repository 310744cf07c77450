//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Customer, CustomerId};
use crate::error::DomainError;

/// Repository for Customer documents, keyed by `customer_id`
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by ID. Absence is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError>;

    /// Return every stored customer in the store's natural order
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError>;

    /// Insert a customer only if its ID is not yet taken.
    ///
    /// Returns `DomainError::AlreadyExists` when the key is present at write
    /// time, and `Ok(None)` when the store accepted the write but returned no
    /// document.
    async fn insert(&self, customer: &Customer) -> Result<Option<Customer>, DomainError>;

    /// Upsert a customer by ID, replacing the whole document.
    ///
    /// `Ok(None)` means the store accepted the write but returned no document.
    async fn save(&self, customer: &Customer) -> Result<Option<Customer>, DomainError>;

    /// Delete a customer by ID. Deleting a missing ID is a no-op.
    async fn delete_by_id(&self, id: &CustomerId) -> Result<(), DomainError>;
}
