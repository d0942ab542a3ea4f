use doppio_coffee_mcp::config::ServerConfig;
use doppio_coffee_mcp::server::McpServer;
use doppio_coffee_mcp::services::Services;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // stdout carries protocol traffic only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let services = match Services::from_config(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("cannot create backend client: {e}");
            std::process::exit(1);
        }
    };

    let probe = services.backend.clone();
    tokio::spawn(async move {
        if !probe.health_check().await {
            tracing::warn!(api_url = %probe.base_url(), "backend health check failed");
        }
    });

    tracing::info!("Doppio Coffee MCP server running on stdio");

    let mut server = McpServer::new(services);
    if let Err(e) = server.run().await {
        tracing::error!("fatal error: {e}");
        std::process::exit(1);
    }
}
