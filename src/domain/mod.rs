//! Domain layer for the environment configuration record.
//!
//! This module contains the configuration model, its error taxonomy, and the
//! URL construction consumers perform against the record.

pub mod endpoints;
pub mod errors;
pub mod models;

// Re-export error types for convenient access
pub use errors::{ConfigError, ConfigResult};
