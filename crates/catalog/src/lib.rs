//! `products-catalog` — product data model, validation, and the in-memory
//! catalog service.
//!
//! This crate contains **pure domain** code (no HTTP concerns): the HTTP
//! layer validates raw request bodies through [`validate`] and calls
//! [`CatalogService`] with the already-validated result.

pub mod error;
pub mod product;
pub mod service;
pub mod validate;

pub use error::{CatalogError, CatalogResult, FieldViolation, ValidationErrors};
pub use product::{Product, ProductDetails, ProductId, ProductPatch, ProductType};
pub use service::CatalogService;
