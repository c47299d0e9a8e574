use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ep_server::commands::{schedule, serve, suggest};
use ep_server::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    // Logs go to stderr so command output on stdout stays parseable JSON
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Some(Commands::Schedule { input }) => {
            schedule::run(&mut io::stdout().lock(), &input)?;
        }
        Some(Commands::Suggest { input, by_user }) => {
            suggest::run(
                &mut io::stdout().lock(),
                &input,
                by_user,
                &config.suggestion_limits(),
            )?;
        }
        Some(Commands::Serve { bind }) => serve_blocking(&config, bind)?,
        None => serve_blocking(&config, None)?,
    }

    Ok(())
}

fn serve_blocking(config: &Config, bind: Option<std::net::SocketAddr>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(serve::run(config, bind))
}
