//! Implementation of the `barista-env show` command.

use anyhow::Result;
use clap::Args;

use crate::cli::commands::resolve_config;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{EnvironmentConfig, Profile};

/// Arguments for `show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Profile to show instead of the compiled-in one
    #[arg(short, long, env = "BARISTA_PROFILE")]
    pub profile: Option<Profile>,

    /// Apply YAML and environment overrides on top of the baked literals
    #[arg(long)]
    pub merged: bool,
}

#[derive(Debug, serde::Serialize)]
struct ShowOutput {
    profile: String,
    merged: bool,
    config: EnvironmentConfig,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let config = &self.config;
        let mut lines = vec![
            format!("profile: {}", self.profile),
            format!("production: {}", config.production),
            format!("api_server_url: {}", config.api_server_url),
            "auth0:".to_string(),
            format!("  url: {}", config.auth0.url),
            format!("  audience: {}", config.auth0.audience),
            format!("  client_id: {}", config.auth0.client_id),
            format!("  callback_url: {}", config.auth0.callback_url),
        ];
        if self.merged {
            lines.push("(with file and environment overrides applied)".to_string());
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print the resolved environment configuration.
pub fn execute(args: ShowArgs, json_mode: bool) -> Result<()> {
    let profile = args.profile.unwrap_or_else(Profile::active);
    let config = resolve_config(args.profile, args.merged)?;

    let out = ShowOutput {
        profile: profile.to_string(),
        merged: args.merged,
        config,
    };
    output(&out, json_mode);
    Ok(())
}
