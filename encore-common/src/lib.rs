//! # Encore Common Library
//!
//! Shared code for the encore booking board:
//! - Error types
//! - Configuration loading and database location resolution
//! - Database initialization and schema migrations
//! - Date display formatting

pub mod config;
pub mod date_display;
pub mod db;
pub mod error;

pub use error::{Error, Result};
