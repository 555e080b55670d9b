//! Prompt Enhancer Server Library
//!
//! This library exports the core modules used by the server binary
//! and its integration with the completion provider.

pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;
pub mod views;

// Re-export commonly used types for convenience
pub use config::AppSettings;
pub use error::AppError;
