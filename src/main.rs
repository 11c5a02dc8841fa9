//! Nutrition Calculator (nutricalc)
//!
//! An MCP server for recipe nutrition, daily totals, and lunar phases.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use nutricalc::backend::BackendClient;
use nutricalc::build_info;
use nutricalc::config::{BackendConfig, ENV_BACKEND_URL};
use nutricalc::mcp::NutricalcService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutricalc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let backend = match BackendConfig::from_env()? {
        Some(config) => {
            eprintln!("Backend URL: {}", config.url);
            Some(BackendClient::new(&config)?)
        }
        None => {
            eprintln!("{} not set; nutrition tools are disabled", ENV_BACKEND_URL);
            None
        }
    };

    let service = NutricalcService::new(backend);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
