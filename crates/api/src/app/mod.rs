//! HTTP application wiring (Axum router + catalog wiring).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error-response envelopes

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use products_catalog::CatalogService;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router around a fresh catalog (public entrypoint
/// used by `main.rs`).
pub fn build_app() -> Router {
    build_app_with(Arc::new(CatalogService::new()))
}

/// Build the router around an existing catalog instance. The catalog is
/// constructed by the caller and injected here, so tests can hold a handle
/// to the same store the handlers see.
pub fn build_app_with(catalog: Arc<CatalogService>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(catalog))
}
