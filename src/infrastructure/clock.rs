use crate::domain::ports::Scheduler;
use async_trait::async_trait;
use std::time::Duration;

/// Scheduler backed by the tokio timer.
#[derive(Default, Clone, Copy)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn delay(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
