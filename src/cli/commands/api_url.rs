//! Implementation of the `barista-env api-url` command.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::commands::resolve_config;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Profile;

/// Arguments for `api-url`.
#[derive(Args, Debug)]
pub struct ApiUrlArgs {
    /// Request path relative to the API server base (e.g. /coffees)
    pub path: String,

    /// Profile supplying the API server base
    #[arg(short, long, env = "BARISTA_PROFILE")]
    pub profile: Option<Profile>,

    /// Apply YAML and environment overrides on top of the baked literals
    #[arg(long)]
    pub merged: bool,
}

#[derive(Debug, serde::Serialize)]
struct ApiUrlOutput {
    path: String,
    url: String,
}

impl CommandOutput for ApiUrlOutput {
    fn to_human(&self) -> String {
        self.url.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print the request URL the storefront would use for a path.
pub fn execute(args: ApiUrlArgs, json_mode: bool) -> Result<()> {
    let config = resolve_config(args.profile, args.merged)?;
    let url = config
        .api_url(&args.path)
        .context("Failed to build API request URL")?;

    let out = ApiUrlOutput {
        path: args.path,
        url: url.to_string(),
    };
    output(&out, json_mode);
    Ok(())
}
