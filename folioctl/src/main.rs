//! folioctl: headless host for the Folio carousel engine.
//!
//! `simulate` drives an engine on a deterministic frame clock and reports
//! where the track ends up. `fetch` lists carousel content from the backend
//! with image URLs resolved the way the site renders them.
#![allow(missing_docs)]

mod fetch;
mod simulate;

use anyhow::Context;
use clap::{Parser, Subcommand};
use folio_config::{ConfigLoad, ConfigLoader};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "folioctl")]
#[command(about = "Simulate Folio carousels and inspect their content")]
struct Cli {
    /// Backend base URL (overrides configuration and FOLIO_API_URL)
    #[arg(long, global = true)]
    api_url: Option<Url>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a carousel for a number of frames and report its motion
    Simulate(simulate::SimulateArgs),
    /// Fetch a content collection from the backend
    Fetch(fetch::FetchArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ConfigLoad {
        mut config,
        source,
        env_file_loaded,
    } = ConfigLoader::new()
        .load()
        .context("failed to load configuration")?;
    if env_file_loaded {
        info!("loaded .env file");
    }
    debug!(?source, base_url = %config.api.base_url, "configuration loaded");

    if let Some(url) = cli.api_url {
        config.api.base_url = url;
        config
            .validate()
            .context("invalid --api-url override")?;
    }

    match cli.command {
        Command::Simulate(args) => simulate::run(&args, &config),
        Command::Fetch(args) => fetch::run(&args, &config).await,
    }
}
