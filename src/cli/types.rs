//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use crate::cli::commands::api_url::ApiUrlArgs;
use crate::cli::commands::login_url::LoginUrlArgs;
use crate::cli::commands::show::ShowArgs;
use crate::cli::commands::validate::ValidateArgs;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "barista-env")]
#[command(about = "Environment configuration for the coffee-shop storefront", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the environment configuration
    Show(ShowArgs),

    /// Load a configuration and report validation results
    Validate(ValidateArgs),

    /// Print the API request URL for a path
    ApiUrl(ApiUrlArgs),

    /// Print the identity provider's authorize redirect URL
    LoginUrl(LoginUrlArgs),
}
