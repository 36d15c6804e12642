//! Process-wide access to the active environment configuration.
//!
//! The active record is built once from the compiled-in profile's baked
//! literals and never changes afterwards, so retrieval cannot fail and
//! unsynchronized concurrent reads are safe from any thread. Consumers that
//! prefer injection can take an [`EnvironmentConfig`] by parameter instead;
//! this module only hands out shared references.

use std::sync::OnceLock;

use crate::domain::models::{EnvironmentConfig, Profile};

static ACTIVE: OnceLock<EnvironmentConfig> = OnceLock::new();

/// The environment configuration compiled into this artifact.
///
/// Returns the same record on every call within a build; the value is the
/// baked literals of [`Profile::active`], with no I/O involved.
pub fn active_config() -> &'static EnvironmentConfig {
    ACTIVE.get_or_init(|| EnvironmentConfig::for_profile(Profile::active()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referential_stability() {
        let first = active_config();
        let second = active_config();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_matches_active_profile() {
        let config = active_config();
        assert_eq!(
            *config,
            EnvironmentConfig::for_profile(Profile::active())
        );
    }
}
