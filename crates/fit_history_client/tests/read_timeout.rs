use async_trait::async_trait;
use fit_history_client::{
    ActivityHistory, DataReadResult, HistoryApi, HistoryError, READ_TIMEOUT, ReadRequest,
};
use std::sync::Arc;
use std::time::Duration;

/// Upstream that answers after a fixed delay.
struct SlowApi(Duration);

#[async_trait]
impl HistoryApi for SlowApi {
    async fn read_data(&self, _request: &ReadRequest) -> Result<DataReadResult, HistoryError> {
        tokio::time::sleep(self.0).await;
        Ok(DataReadResult::default())
    }
}

#[tokio::test(start_paused = true)]
async fn read_slower_than_one_minute_times_out() {
    let h = ActivityHistory::new(Arc::new(SlowApi(Duration::from_secs(120))));
    let err = h.get_activity_samples(0, 1_000).await.unwrap_err();
    match err {
        HistoryError::Timeout(d) => assert_eq!(d, Duration::from_secs(60)),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn read_just_under_the_limit_succeeds() {
    let h = ActivityHistory::new(Arc::new(SlowApi(READ_TIMEOUT - Duration::from_millis(1))));
    let samples = h.get_session_samples(0, 1_000).await.expect("samples");
    assert!(samples.is_empty());
}
