use tracker_core::Config;
use tracker_mcp::{TrackerMcpHandler, log_filter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Configure logging from `TRACKER_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let (log_env, env_filter) = log_filter(&config, std::env::var("RUST_LOG").ok());
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!("tracker_mcp: log filter: {}", log_env);

    match config.profile {
        Some(p) => tracing::info!(
            "tracker_mcp: default profile weight={} kg height={} m",
            p.weight,
            p.height
        ),
        None => tracing::info!("tracker_mcp: no default profile, requests must carry measurements"),
    }

    let handler = TrackerMcpHandler::new(config.profile);
    tracing::info!("tracker_mcp: registered {} tools", handler.tool_count());

    tracing::info!("tracker_mcp: starting stdio MCP server...");

    use rmcp::serve_server;
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let server = serve_server(handler, transport).await?;

    tracing::info!("tracker_mcp: service initialized as server");

    server.waiting().await?;

    Ok(())
}
