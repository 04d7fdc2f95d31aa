//! Database models
//!
//! This module contains the database models and their CRUD operations:
//!
//! - `user`: User accounts (the scaffold's placeholder resource)

pub mod user;

pub use user::{CreateUser, UpdateUser, User};
