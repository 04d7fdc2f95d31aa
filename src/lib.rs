//! # Axum Scaffold
//!
//! Starter scaffold for a CRUD web API: Axum wired to PostgreSQL via sqlx,
//! with migration tooling and container packaging.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `db`: Connection pool and migration runner
//! - `doc`: Generated OpenAPI documentation
//! - `error`: Error handling and HTTP response mapping
//! - `models`: Database models
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod db;
pub mod doc;
pub mod error;
pub mod models;
pub mod routes;

/// Current version of the scaffold
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
