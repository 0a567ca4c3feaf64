use anyhow::Context;
use clap::{Parser, Subcommand};
use roster_mapper::config::{Config, Secrets};
use roster_mapper::infra::{ConfluenceDirectory, SlackClient};
use roster_mapper::orchestrator::Orchestrator;
use roster_mapper::{logging, observability, server};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "roster_mapper")]
#[command(about = "Maps leads, reports and team channel owners from the wiki directory and Slack")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the roster as JSON over HTTP
    Serve {
        /// Port to listen on (overrides config.toml)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run a single pass and print the roster to stdout
    Run,
}

fn build_orchestrator(config: &Config, secrets: &Secrets) -> anyhow::Result<Orchestrator> {
    let directory = ConfluenceDirectory::new(
        &config.confluence.base_url,
        &config.confluence.page_id,
        &config.confluence.username,
        &secrets.confluence_api_token,
    )?;
    let slack = Arc::new(SlackClient::new(&config.slack.base_url, &secrets.slack_token)?);

    Ok(Orchestrator::new(Arc::new(directory), slack.clone(), slack))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _log_guard = logging::init_logging();

    let cli = Cli::parse();

    let config = Config::load().context("loading configuration")?;
    let secrets = Secrets::from_env().context("reading credentials")?;
    let orchestrator = build_orchestrator(&config, &secrets)?;

    match cli.command {
        Commands::Serve { port } => {
            observability::init_metrics();
            let port = port.unwrap_or(config.server.port);
            info!("Starting roster server on port {}", port);
            server::start_server(orchestrator, port).await?;
        }
        Commands::Run => {
            let result = orchestrator.run().await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}
