//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared inventory store handed to every handler
//! - `routes/`: HTTP routes + handlers (one file per surface)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Each call owns a fresh, empty store.
pub fn build_app(config: &ApiConfig) -> Router {
    let services = Arc::new(services::build_services(config));
    build_app_with_services(services)
}

/// Build the router around an existing service container (tests, embedding).
pub fn build_app_with_services(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(Extension(services)),
        )
}
