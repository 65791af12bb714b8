//! Catalog Backend Module - Products and Orders
//!
//! Clean Architecture structure:
//! - `domain/` - Product/Order entities, read models, repository traits
//! - `application/` - Use cases and catalog configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, hyperlink hints, routers
//!
//! ## Features
//! - Product CRUD; mutations require a bearer token
//! - Orders referencing products; the product-exists check runs at order
//!   creation only and is not enforced by the store
//! - Responses carry `request` hint blocks pointing at related resources

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::{orders_router, products_router};
