//! Error types for the MCP server.

use thiserror::Error;

/// MCP server errors.
#[derive(Debug, Error)]
pub enum McpError {
    #[error("History error: {0}")]
    History(#[from] fit_history_client::HistoryError),
}

impl From<McpError> for String {
    fn from(err: McpError) -> Self {
        err.to_string()
    }
}

/// Result type alias for MCP operations.
pub type McpResult<T> = Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::*;
    use fit_history_client::HistoryError;

    #[test]
    fn history_errors_convert_to_tool_messages() {
        let err: McpError = HistoryError::DataUnavailable("offline".into()).into();
        let msg: String = err.into();
        assert_eq!(msg, "History error: history data unavailable: offline");
    }
}
