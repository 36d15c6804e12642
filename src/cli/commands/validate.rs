//! Implementation of the `barista-env validate` command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Profile;
use crate::infrastructure::config::ConfigLoader;

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Validate this file layered over the profile's baked literals
    /// (default: the standard .barista/ files and environment variables)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Profile supplying the baked literals
    #[arg(short, long, env = "BARISTA_PROFILE")]
    pub profile: Option<Profile>,
}

#[derive(Debug, serde::Serialize)]
struct ValidateOutput {
    valid: bool,
    profile: String,
    source: String,
    error: Option<String>,
}

impl CommandOutput for ValidateOutput {
    fn to_human(&self) -> String {
        if self.valid {
            format!("{} is valid for profile {}", self.source, self.profile)
        } else {
            format!(
                "{} is invalid for profile {}:\n  {}",
                self.source,
                self.profile,
                self.error.as_deref().unwrap_or("unknown error")
            )
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Load a configuration and report whether it satisfies the record invariants.
pub fn execute(args: ValidateArgs, json_mode: bool) -> Result<()> {
    let profile = args.profile.unwrap_or_else(Profile::active);
    let (source, result) = match &args.file {
        Some(path) => (
            path.display().to_string(),
            ConfigLoader::load_from_file(profile, path),
        ),
        None => ("layered configuration".to_string(), ConfigLoader::load(profile)),
    };

    let out = ValidateOutput {
        valid: result.is_ok(),
        profile: profile.to_string(),
        source,
        error: result.as_ref().err().map(|err| format!("{err:#}")),
    };
    output(&out, json_mode);

    if result.is_err() {
        anyhow::bail!("configuration invalid");
    }
    Ok(())
}
