//! Customer Records API Server
//!
//! Stores customer profiles with their embedded addresses and exposes CRUD
//! over HTTP. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresCustomerRepository;
use app::CustomerService;
use config::Config;
use domain::ports::CustomerRepository;

/// Application state shared across all handlers
pub struct AppState<CR: CustomerRepository> {
    pub customer_service: Arc<CustomerService<CR>>,
}

impl<CR: CustomerRepository> Clone for AppState<CR> {
    fn clone(&self) -> Self {
        Self {
            customer_service: self.customer_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router over any repository implementation
pub fn build_router<CR: CustomerRepository + 'static>(state: AppState<CR>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Customer CRUD
        .route(
            "/customers",
            get(handlers::list_customers::<CR>)
                .post(handlers::add_customer::<CR>)
                .put(handlers::update_customer::<CR>),
        )
        .route(
            "/customers/:id",
            get(handlers::get_customer::<CR>).delete(handlers::delete_customer::<CR>),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,customer_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting customer API...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let customer_repo = Arc::new(PostgresCustomerRepository::new(db));
    if config.auto_create_schema {
        customer_repo
            .ensure_schema()
            .await
            .context("Failed to create customers table")?;
        tracing::info!("Customers table ready");
    }

    // Create application services
    let customer_service = Arc::new(CustomerService::new(customer_repo));

    let app = build_router(AppState { customer_service });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
