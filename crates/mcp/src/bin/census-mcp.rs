// Standalone MCP server binary

use anyhow::Result;
use census_mcp::server::McpServer;
use census_mcp::tools::census_registry;
use census_mcp::ServerConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "census-mcp")]
#[command(about = "MCP server for the US Census Bureau Data API", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "census-mcp.toml")]
    config: PathBuf,

    /// Override the Census API base URL
    #[arg(long, env = "CENSUS_API_BASE_URL")]
    base_url: Option<String>,

    /// Census API key (required for data queries)
    #[arg(long, env = "CENSUS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "census_mcp=info,census_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    tracing::info!("Census MCP server starting...");

    let mut config = ServerConfig::load(&args.config)?;
    if let Some(base_url) = args.base_url {
        config.census.base_url = base_url;
    }

    if args.api_key.as_deref().map_or(true, str::is_empty) {
        tracing::warn!("CENSUS_API_KEY is not set; query_data and get_population will fail");
    }

    let client = config.census.build_client(args.api_key)?;
    let registry = census_registry(client);

    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}
