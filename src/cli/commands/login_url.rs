//! Implementation of the `barista-env login-url` command.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::commands::resolve_config;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Profile;

/// Arguments for `login-url`.
#[derive(Args, Debug)]
pub struct LoginUrlArgs {
    /// Profile supplying the identity-provider settings
    #[arg(short, long, env = "BARISTA_PROFILE")]
    pub profile: Option<Profile>,

    /// Apply YAML and environment overrides on top of the baked literals
    #[arg(long)]
    pub merged: bool,
}

#[derive(Debug, serde::Serialize)]
struct LoginUrlOutput {
    domain: String,
    url: String,
}

impl CommandOutput for LoginUrlOutput {
    fn to_human(&self) -> String {
        self.url.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print the authorize redirect that starts the login flow.
pub fn execute(args: LoginUrlArgs, json_mode: bool) -> Result<()> {
    let config = resolve_config(args.profile, args.merged)?;
    let url = config
        .auth0
        .authorize_url()
        .context("Failed to build authorize URL")?;

    let out = LoginUrlOutput {
        domain: config.auth0.domain(),
        url: url.to_string(),
    };
    output(&out, json_mode);
    Ok(())
}
