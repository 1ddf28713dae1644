use std::sync::Arc;

use rmcp::Json;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use fit_history_client::{ActivityHistory, ActivitySample, HistoryApi, SessionSample};

pub mod error;
#[cfg(test)]
mod test_utils;

use error::McpResult;

#[derive(Clone)]
pub struct FitHistoryMcpHandler {
    history: ActivityHistory,
    tool_router: rmcp::handler::server::tool::ToolRouter<FitHistoryMcpHandler>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct TimeRangeParams {
    /// Window start, epoch milliseconds (inclusive)
    pub start_time: i64,
    /// Window end, epoch milliseconds (exclusive)
    pub end_time: i64,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ActivitySamplesResult {
    pub samples: Vec<ActivitySample>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct SessionSamplesResult {
    pub samples: Vec<SessionSample>,
}

#[tool_router]
impl FitHistoryMcpHandler {
    pub fn new(api: Arc<dyn HistoryApi>) -> Self {
        Self {
            history: ActivityHistory::new(api),
            tool_router: Self::tool_router(),
        }
    }

    pub fn tool_count(&self) -> usize {
        self.tool_router.list_all().len()
    }

    #[tool(
        name = "get_activity_samples",
        description = "Steps, distance and calories per activity segment between two epoch-millisecond timestamps"
    )]
    async fn get_activity_samples(
        &self,
        params: Parameters<TimeRangeParams>,
    ) -> Result<Json<ActivitySamplesResult>, String> {
        let p = params.0;
        Ok(Json(self.activity_samples(p.start_time, p.end_time).await?))
    }

    #[tool(
        name = "get_session_samples",
        description = "Per-session steps, distance, calories and speed between two epoch-millisecond timestamps"
    )]
    async fn get_session_samples(
        &self,
        params: Parameters<TimeRangeParams>,
    ) -> Result<Json<SessionSamplesResult>, String> {
        let p = params.0;
        Ok(Json(self.session_samples(p.start_time, p.end_time).await?))
    }
}

impl FitHistoryMcpHandler {
    async fn activity_samples(&self, start: i64, end: i64) -> McpResult<ActivitySamplesResult> {
        let samples = self.history.get_activity_samples(start, end).await?;
        tracing::info!("get_activity_samples: {} samples", samples.len());
        Ok(ActivitySamplesResult { samples })
    }

    async fn session_samples(&self, start: i64, end: i64) -> McpResult<SessionSamplesResult> {
        let samples = self.history.get_session_samples(start, end).await?;
        tracing::info!("get_session_samples: {} samples", samples.len());
        Ok(SessionSamplesResult { samples })
    }
}

#[tool_handler]
impl rmcp::ServerHandler for FitHistoryMcpHandler {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo::new(
            rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
        )
        .with_instructions(
            "Fitness history MCP server - reads activity segments and sessions \
             for a time range and returns them as flat sample records.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FailingApi, FixtureApi};
    use fit_history_client::http_client::ReqwestHistoryClient;
    use secrecy::SecretString;
    use serde_json::json;

    #[tokio::test]
    async fn handler_creation() {
        let client = ReqwestHistoryClient::new("http://localhost", SecretString::new("tok".into()));
        let handler = FitHistoryMcpHandler::new(Arc::new(client));
        let _clone = handler.clone();
        let tools = handler.tool_router.list_all();
        assert!(tools.iter().any(|t| t.name == "get_activity_samples"));
        assert!(tools.iter().any(|t| t.name == "get_session_samples"));
        assert_eq!(handler.tool_count(), 2);
    }

    #[tokio::test]
    async fn activity_tool_returns_flattened_samples() {
        let handler = FitHistoryMcpHandler::new(Arc::new(FixtureApi::walking_and_empty()));
        let Json(result) = handler
            .get_activity_samples(Parameters(TimeRangeParams {
                start_time: 1_000_000,
                end_time: 1_065_000,
            }))
            .await
            .expect("tool result");
        assert_eq!(result.samples.len(), 1);
        let v = serde_json::to_value(&result).unwrap();
        assert_eq!(v["samples"][0]["quantity"], json!(500));
        assert_eq!(v["samples"][0]["device"], json!("Android"));
        assert_eq!(v["samples"][0]["tracked"], json!(false));
    }

    #[tokio::test]
    async fn session_tool_reports_null_moving_time() {
        let handler = FitHistoryMcpHandler::new(Arc::new(FixtureApi::walking_and_empty()));
        let Json(result) = handler
            .get_session_samples(Parameters(TimeRangeParams {
                start_time: 0,
                end_time: 2_000_000,
            }))
            .await
            .expect("tool result");
        let v = serde_json::to_value(&result).unwrap();
        assert!(v["samples"][0]["movingTime"].is_null());
        assert_eq!(v["samples"][0]["sourceName"], json!("phone"));
    }

    #[tokio::test]
    async fn tool_errors_are_strings() {
        let handler = FitHistoryMcpHandler::new(Arc::new(FailingApi));
        let Err(err) = handler
            .get_activity_samples(Parameters(TimeRangeParams {
                start_time: 0,
                end_time: 1,
            }))
            .await
        else {
            panic!("expected upstream failure");
        };
        assert!(err.contains("not connected"));

        let Err(err) = handler
            .get_session_samples(Parameters(TimeRangeParams {
                start_time: 5,
                end_time: 1,
            }))
            .await
        else {
            panic!("expected range rejection");
        };
        assert!(err.contains("invalid time range"));
    }
}
