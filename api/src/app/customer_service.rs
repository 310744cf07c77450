//! Customer service
//!
//! CRUD over customer documents. Each operation performs at most one lookup
//! and one write; repository failures come back as `CustomerDataError`.

use std::sync::Arc;

use crate::app::mapper::{
    build_customer_entity, build_customer_response, CustomerRequest, CustomerResponse,
};
use crate::domain::entities::{Customer, CustomerId};
use crate::domain::ports::CustomerRepository;
use crate::error::CustomerDataError;

/// Value returned by a successful delete
pub const DELETE_SUCCESS: &str = "success";

/// Service for managing customers
pub struct CustomerService<CR>
where
    CR: CustomerRepository,
{
    customers: Arc<CR>,
}

impl<CR> CustomerService<CR>
where
    CR: CustomerRepository,
{
    pub fn new(customers: Arc<CR>) -> Self {
        Self { customers }
    }

    /// Get a single customer by ID
    pub async fn get_customer(
        &self,
        id: &CustomerId,
    ) -> Result<CustomerResponse, CustomerDataError> {
        let result = self.find_existing(id).await.map(build_customer_response);
        log_outcome("getCustomer", id, &result);
        result
    }

    /// Get every stored customer, in the store's order
    pub async fn get_all_customers(&self) -> Result<Vec<CustomerResponse>, CustomerDataError> {
        let customers = self
            .customers
            .find_all()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "getAllCustomers failed"))?;

        tracing::info!(count = customers.len(), "getAllCustomers succeeded");
        Ok(customers.into_iter().map(build_customer_response).collect())
    }

    /// Create a customer. Fails if the ID is already taken.
    pub async fn add_customer(
        &self,
        request: CustomerRequest,
    ) -> Result<CustomerResponse, CustomerDataError> {
        let id = request.customer_id.clone();
        let result = self.create(request).await;
        log_outcome("addCustomer", &id, &result);
        result
    }

    /// Replace an existing customer document in full.
    ///
    /// The existence check and the upsert are separate calls: concurrent
    /// updates are last-writer-wins, and an update racing a delete can
    /// recreate the record.
    pub async fn update_customer(
        &self,
        request: CustomerRequest,
    ) -> Result<CustomerResponse, CustomerDataError> {
        let id = request.customer_id.clone();
        let result = self.replace(request).await;
        log_outcome("updateCustomer", &id, &result);
        result
    }

    /// Delete a customer by ID. Missing IDs succeed as well.
    pub async fn delete_customer(&self, id: &CustomerId) -> Result<String, CustomerDataError> {
        let result = self
            .customers
            .delete_by_id(id)
            .await
            .map(|()| DELETE_SUCCESS.to_string())
            .map_err(CustomerDataError::from);
        log_outcome("deleteCustomer", id, &result);
        result
    }

    async fn find_existing(&self, id: &CustomerId) -> Result<Customer, CustomerDataError> {
        self.customers
            .find_by_id(id)
            .await?
            .ok_or(CustomerDataError::NotFound)
    }

    async fn create(
        &self,
        request: CustomerRequest,
    ) -> Result<CustomerResponse, CustomerDataError> {
        if self.customers.find_by_id(&request.customer_id).await?.is_some() {
            return Err(CustomerDataError::AlreadyExists);
        }

        // insert is conditional, so a create racing this one still
        // surfaces as AlreadyExists
        let saved = self
            .customers
            .insert(&build_customer_entity(request))
            .await?
            .ok_or(CustomerDataError::InsertFailed)?;
        Ok(build_customer_response(saved))
    }

    async fn replace(
        &self,
        request: CustomerRequest,
    ) -> Result<CustomerResponse, CustomerDataError> {
        self.find_existing(&request.customer_id).await?;

        let saved = self
            .customers
            .save(&build_customer_entity(request))
            .await?
            .ok_or(CustomerDataError::InsertFailed)?;
        Ok(build_customer_response(saved))
    }
}

fn log_outcome<T>(op: &str, id: &CustomerId, result: &Result<T, CustomerDataError>) {
    match result {
        Ok(_) => tracing::info!(customer_id = %id, "{} succeeded", op),
        Err(e) => tracing::error!(customer_id = %id, error = %e, "{} failed", op),
    }
}
