//! barista-env CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use barista_env::cli::{Cli, Commands};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show(args) => barista_env::cli::commands::show::execute(args, cli.json),
        Commands::Validate(args) => barista_env::cli::commands::validate::execute(args, cli.json),
        Commands::ApiUrl(args) => barista_env::cli::commands::api_url::execute(args, cli.json),
        Commands::LoginUrl(args) => barista_env::cli::commands::login_url::execute(args, cli.json),
    };

    if let Err(err) = result {
        barista_env::cli::handle_error(err, cli.json);
    }
}
