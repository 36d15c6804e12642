//! CLI command implementations.

pub mod api_url;
pub mod login_url;
pub mod show;
pub mod validate;

use anyhow::Result;

use crate::domain::models::{EnvironmentConfig, Profile};
use crate::infrastructure::config::ConfigLoader;

/// Resolve the configuration a command operates on.
///
/// Without `--merged` the baked literals of the requested (or compiled-in)
/// profile are used as-is; with it, the full loader layering applies.
pub(crate) fn resolve_config(
    profile: Option<Profile>,
    merged: bool,
) -> Result<EnvironmentConfig> {
    let profile = profile.unwrap_or_else(Profile::active);
    if merged {
        ConfigLoader::load(profile)
    } else {
        Ok(EnvironmentConfig::for_profile(profile))
    }
}
