//! API route handlers
//!
//! This module contains all route handlers organized by resource:
//!
//! - `health`: Health check endpoint
//! - `users`: User CRUD endpoints

pub mod health;
pub mod users;
