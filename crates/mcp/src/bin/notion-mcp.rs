// Standalone MCP server binary

use anyhow::Result;
use clap::Parser;
use notion_mcp::tools::notion_registry;
use notion_mcp::{McpServer, ServerConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "notion-mcp", version)]
#[command(about = "MCP server exposing the Notion API as tools over stdio", long_about = None)]
struct Args {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "NOTION_MCP_CONFIG")]
    config: Option<PathBuf>,

    /// Notion integration token
    #[arg(long, env = "NOTION_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() {
    // Loaded before parsing so `.env` can feed the env-backed flags.
    dotenv::dotenv().ok();
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = ServerConfig::load(args.config.as_deref())?;
    init_tracing(&config, args.verbose);

    tracing::info!("Notion MCP server starting...");

    let client = config.notion_client(args.api_key.as_deref())?;
    tracing::info!(
        base_url = %client.config().base_url,
        notion_version = %client.config().notion_version,
        "Notion client ready"
    );

    let registry = notion_registry(client);
    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server.start().await
}

/// Logs go to stderr; stdout carries protocol messages only.
fn init_tracing(config: &ServerConfig, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter(verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
