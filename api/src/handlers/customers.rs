//! Customer handlers
//!
//! CRUD endpoints over the customer collection.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::{CustomerRequest, CustomerResponse};
use crate::domain::entities::CustomerId;
use crate::domain::ports::CustomerRepository;
use crate::error::AppError;
use crate::AppState;

/// GET /customers
///
/// List every stored customer.
pub async fn list_customers<CR: CustomerRepository + 'static>(
    State(state): State<AppState<CR>>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let customers = state.customer_service.get_all_customers().await?;
    Ok(Json(customers))
}

/// GET /customers/:id
pub async fn get_customer<CR: CustomerRepository + 'static>(
    State(state): State<AppState<CR>>,
    Path(id): Path<String>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state
        .customer_service
        .get_customer(&CustomerId::from(id))
        .await?;
    Ok(Json(customer))
}

/// POST /customers
///
/// Create a customer. The caller assigns `customerId`.
pub async fn add_customer<CR: CustomerRepository + 'static>(
    State(state): State<AppState<CR>>,
    Json(request): Json<CustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    validate_request(&request)?;
    let customer = state.customer_service.add_customer(request).await?;
    Ok(Json(customer))
}

/// PUT /customers
///
/// Replace an existing customer with the request body.
pub async fn update_customer<CR: CustomerRepository + 'static>(
    State(state): State<AppState<CR>>,
    Json(request): Json<CustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    validate_request(&request)?;
    let customer = state.customer_service.update_customer(request).await?;
    Ok(Json(customer))
}

/// DELETE /customers/:id
///
/// Responds with the plain-text body `success`.
pub async fn delete_customer<CR: CustomerRepository + 'static>(
    State(state): State<AppState<CR>>,
    Path(id): Path<String>,
) -> Result<String, AppError> {
    let status = state
        .customer_service
        .delete_customer(&CustomerId::from(id))
        .await?;
    Ok(status)
}

fn validate_request(request: &CustomerRequest) -> Result<(), AppError> {
    if request.customer_id.is_blank() {
        return Err(AppError::BadRequest("customerId must not be empty".to_string()));
    }
    Ok(())
}
