use anyhow::{Context, Result};
use clap::Parser;
use mock_suites_core::AppConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments first to get verbosity level
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        2.. => "trace",
    };

    // stdout carries generated data, so logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Generate(args) => {
            info!("Generate command: {:?}", args);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::commands::generate::execute(args, config))?;
        }
        Commands::Summary(args) => {
            info!("Summary command: {:?}", args);
            cli::commands::summary::execute(args, config)?;
        }
        Commands::Check(args) => {
            info!("Check command: {:?}", args);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::commands::check::execute(args))?;
        }
    }

    Ok(())
}
