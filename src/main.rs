//! User Store API - Application entry point
//!
//! Parses the command line, sets up logging and runs `serve`.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_store_api::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Environment first; serve flags override it
    let config = Config::from_env();
    tracing::debug!(?config, "Environment configuration");

    let Commands::Serve(args) = cli.command;
    if let Err(e) = commands::serve::execute(args, config).await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}

/// `--verbose` forces debug, otherwise `RUST_LOG` or info
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}
