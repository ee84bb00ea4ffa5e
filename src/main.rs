//! Command-line entry point for the grant digest.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use grant_digest::api::{AppState, create_router};
use grant_digest::config::ConfigLoader;
use grant_digest::source::{FileSource, RecordSource, RegistryClient};

#[derive(Parser, Debug)]
#[command(name = "grant-digest")]
#[command(version, about = "Digest of the most recent public subsidy grants")]
struct Args {
    /// Configuration file (defaults are used when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the digest over HTTP
    Serve,
    /// Print the digest to stdout
    Print {
        /// Read records from a saved JSON file instead of the registry
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConfigLoader::default(),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.config().logging.level)),
        )
        .init();

    match args.command {
        Command::Serve => serve(config).await,
        Command::Print { input, json } => print(config, input, json).await,
    }
}

async fn serve(config: ConfigLoader) -> Result<()> {
    let source = RegistryClient::new(config.registry()).context("Failed to create registry client")?;
    let bind_address = config.config().server.bind_address.clone();
    let state = AppState::new(config, Arc::new(source));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, create_router(state))
        .await
        .context("Server error")
}

async fn print(config: ConfigLoader, input: Option<PathBuf>, json: bool) -> Result<()> {
    let source: Box<dyn RecordSource> = match input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(
            RegistryClient::new(config.registry()).context("Failed to create registry client")?,
        ),
    };

    let records = source
        .fetch()
        .await
        .with_context(|| format!("Failed to fetch from {}", source.describe()))?;
    let entries = config
        .pipeline()
        .render(records)
        .context("Failed to render digest")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{}", entry);
        }
    }
    Ok(())
}
