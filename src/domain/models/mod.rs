//! Domain models.

pub mod environment;

pub use environment::{Auth0Config, EnvironmentConfig, Profile};
