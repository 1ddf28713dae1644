use std::sync::Arc;

use fit_history_client::{ActivityHistory, config::Config, http_client::ReqwestHistoryClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: expects FIT_HISTORY_ACCESS_TOKEN in env
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(());
        }
    };
    let client = ReqwestHistoryClient::new(&cfg.base_url, cfg.access_token);
    let history = ActivityHistory::new(Arc::new(client));

    let end = chrono::Utc::now().timestamp_millis();
    let start = end - 7 * 24 * 60 * 60 * 1000;
    let samples = history.get_activity_samples(start, end).await?;
    println!("{}", serde_json::to_string_pretty(&samples)?);
    Ok(())
}
