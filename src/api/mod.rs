//! HTTP API layer for the factory service.
//!
//! Provides the list/create endpoints for each resource collection and the
//! generated OpenAPI documentation.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
