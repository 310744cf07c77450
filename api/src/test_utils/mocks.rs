//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Customer, CustomerId};
use crate::domain::ports::CustomerRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Customer Repository
// ============================================================================

/// Customers are kept in insertion order, like a document collection's
/// natural order.
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<Vec<Customer>>>,
    should_fail: bool,
    drop_writes: bool,
    stale_lookups: bool,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a database error
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Writes are acknowledged but return no document and store nothing
    pub fn dropping_writes(mut self) -> Self {
        self.drop_writes = true;
        self
    }

    /// Lookups always miss, as if another writer created the record right
    /// after the read. Writes still see the real contents.
    pub fn racing_insert(mut self) -> Self {
        self.stale_lookups = true;
        self
    }

    /// Pre-populate with a customer for testing
    pub fn with_customer(self, customer: Customer) -> Self {
        self.customers.write().unwrap().push(customer);
        self
    }

    /// Current contents, in stored order
    pub fn snapshot(&self) -> Vec<Customer> {
        self.customers.read().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.should_fail {
            Err(DomainError::Database("Mock store unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        self.check_failure()?;
        if self.stale_lookups {
            return Ok(None);
        }
        let customers = self.customers.read().unwrap();
        Ok(customers.iter().find(|c| &c.customer_id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        self.check_failure()?;
        Ok(self.customers.read().unwrap().clone())
    }

    async fn insert(&self, customer: &Customer) -> Result<Option<Customer>, DomainError> {
        self.check_failure()?;
        if self.drop_writes {
            return Ok(None);
        }

        let mut customers = self.customers.write().unwrap();
        if customers
            .iter()
            .any(|c| c.customer_id == customer.customer_id)
        {
            return Err(DomainError::AlreadyExists(format!(
                "Customer {} already exists",
                customer.customer_id
            )));
        }
        customers.push(customer.clone());
        Ok(Some(customer.clone()))
    }

    async fn save(&self, customer: &Customer) -> Result<Option<Customer>, DomainError> {
        self.check_failure()?;
        if self.drop_writes {
            return Ok(None);
        }

        let mut customers = self.customers.write().unwrap();
        match customers
            .iter()
            .position(|c| c.customer_id == customer.customer_id)
        {
            Some(index) => customers[index] = customer.clone(),
            None => customers.push(customer.clone()),
        }
        Ok(Some(customer.clone()))
    }

    async fn delete_by_id(&self, id: &CustomerId) -> Result<(), DomainError> {
        self.check_failure()?;
        self.customers
            .write()
            .unwrap()
            .retain(|c| &c.customer_id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_customer;

    #[tokio::test]
    async fn save_upserts_in_place() {
        let repo = InMemoryCustomerRepository::new()
            .with_customer(test_customer("C1"))
            .with_customer(test_customer("C2"));
        let mut replacement = test_customer("C1");
        replacement.customer_name = Some("Changed".to_string());

        repo.save(&replacement).await.unwrap();
        repo.save(&test_customer("C3")).await.unwrap();

        let ids: Vec<String> = repo
            .snapshot()
            .into_iter()
            .map(|c| c.customer_id.0)
            .collect();
        assert_eq!(ids, vec!["C1", "C2", "C3"]);
        assert_eq!(repo.snapshot()[0].customer_name.as_deref(), Some("Changed"));
    }

    #[tokio::test]
    async fn insert_rejects_existing_id() {
        let repo = InMemoryCustomerRepository::new().with_customer(test_customer("C1"));

        let result = repo.insert(&test_customer("C1")).await;

        assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn racing_insert_misses_on_lookup_only() {
        let repo = InMemoryCustomerRepository::new()
            .with_customer(test_customer("C1"))
            .racing_insert();

        let found = repo.find_by_id(&CustomerId::from("C1")).await.unwrap();
        let inserted = repo.insert(&test_customer("C1")).await;

        assert!(found.is_none());
        assert!(matches!(inserted, Err(DomainError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn dropping_writes_stores_nothing() {
        let repo = InMemoryCustomerRepository::new().dropping_writes();

        assert!(repo.insert(&test_customer("C1")).await.unwrap().is_none());
        assert!(repo.save(&test_customer("C1")).await.unwrap().is_none());
        assert!(repo.snapshot().is_empty());
    }
}
