//! Infrastructure layer: configuration loading and layering.

pub mod config;
