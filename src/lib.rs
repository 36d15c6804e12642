//! barista-env - Environment configuration for the coffee-shop storefront
//!
//! This crate owns the environment record the storefront client consumes to
//! know which backend API server to talk to and which Auth0 tenant drives the
//! redirect-based login flow. The record is selected per build profile,
//! validated at load time, and immutable for the lifetime of the process.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the `EnvironmentConfig` record, its
//!   validation error taxonomy, and the URL construction its consumers need
//! - **Infrastructure Layer** (`infrastructure`): figment-based layering of
//!   baked profile defaults, YAML overrides, and environment variables
//! - **Provider** (`provider`): the process-wide read-only configuration value
//! - **CLI Layer** (`cli`): operator commands to inspect and validate
//!
//! # Example
//!
//! ```
//! use barista_env::{EnvironmentConfig, Profile};
//!
//! let config = EnvironmentConfig::for_profile(Profile::Development);
//! let menu = config.api_url("/coffees").unwrap();
//! assert_eq!(menu.as_str(), "http://127.0.0.1:5000/coffees");
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod provider;

// Re-export commonly used types for convenience
pub use domain::errors::{ConfigError, ConfigResult};
pub use domain::models::{Auth0Config, EnvironmentConfig, Profile};
pub use infrastructure::config::ConfigLoader;
pub use provider::active_config;
