//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - Baked per-profile defaults
//! - YAML file overrides
//! - Environment variable overrides
//! - Load-time validation

pub mod loader;

pub use loader::ConfigLoader;
