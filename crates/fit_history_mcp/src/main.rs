use std::sync::Arc;

use fit_history_client::config::Config;
use fit_history_client::http_client::ReqwestHistoryClient;
use fit_history_mcp::FitHistoryMcpHandler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configure logging from env var `FIT_HISTORY_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("FIT_HISTORY_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());

    // Append per-target overrides to keep rmcp internals quiet by default
    let combined_filter = format!("{},rmcp=warn,serve_inner=warn", log_env);
    let env_filter = tracing_subscriber::EnvFilter::try_new(combined_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,rmcp=warn,serve_inner=warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!("fit_history_mcp: log filter: {}", log_env);

    let cfg = Config::from_env()?;
    let client = ReqwestHistoryClient::new(&cfg.base_url, cfg.access_token);
    let handler = FitHistoryMcpHandler::new(Arc::new(client));

    tracing::info!(
        "fit_history_mcp: registered {} tools against {}",
        handler.tool_count(),
        cfg.base_url
    );

    use rmcp::serve_server;
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let server = serve_server(handler, transport).await?;

    tracing::info!("fit_history_mcp: serving over stdio");

    server.waiting().await?;

    Ok(())
}
