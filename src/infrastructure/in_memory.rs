use crate::domain::ports::{OptionMark, Presenter, QuestionView, Scheduler, Screen};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, RwLock};

/// One call the engine made on a [`Presenter`], in order.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterEvent {
    ScreenShown(Screen),
    QuestionRendered(QuestionView),
    OptionMarked {
        option_index: usize,
        mark: OptionMark,
    },
    ScoreUpdated(usize),
    ResultRendered {
        score: usize,
        total: usize,
        message: String,
    },
}

/// Presenter that records every call into an in-memory event log.
///
/// Uses `Arc<RwLock<Vec<_>>>` for shared concurrent access, so clones see
/// the same log. The primary presenter used by the test suites.
#[derive(Default, Clone)]
pub struct RecordingPresenter {
    events: Arc<RwLock<Vec<PresenterEvent>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<PresenterEvent> {
        self.events.read().await.clone()
    }

    /// The last rendered result, if the run reached the result screen.
    pub async fn last_result(&self) -> Option<(usize, usize, String)> {
        self.events.read().await.iter().rev().find_map(|e| match e {
            PresenterEvent::ResultRendered {
                score,
                total,
                message,
            } => Some((*score, *total, message.clone())),
            _ => None,
        })
    }

    async fn record(&self, event: PresenterEvent) {
        self.events.write().await.push(event);
    }
}

#[async_trait]
impl Presenter for RecordingPresenter {
    async fn show_screen(&self, screen: Screen) {
        self.record(PresenterEvent::ScreenShown(screen)).await;
    }

    async fn render_question(&self, view: QuestionView) {
        self.record(PresenterEvent::QuestionRendered(view)).await;
    }

    async fn mark_option(&self, option_index: usize, mark: OptionMark) {
        self.record(PresenterEvent::OptionMarked { option_index, mark })
            .await;
    }

    async fn update_score(&self, score: usize) {
        self.record(PresenterEvent::ScoreUpdated(score)).await;
    }

    async fn render_result(&self, score: usize, total: usize, message: &str) {
        self.record(PresenterEvent::ResultRendered {
            score,
            total,
            message: message.to_string(),
        })
        .await;
    }
}

/// Scheduler that returns immediately but records the requested durations.
#[derive(Default, Clone)]
pub struct InstantScheduler {
    requests: Arc<RwLock<Vec<Duration>>>,
}

impl InstantScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn requested(&self) -> Vec<Duration> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl Scheduler for InstantScheduler {
    async fn delay(&self, duration: Duration) {
        self.requests.write().await.push(duration);
    }
}

/// Scheduler whose delays complete only when [`fire`](Self::fire) is called.
/// Lets tests hold the engine inside the feedback window deterministically.
#[derive(Default, Clone)]
pub struct ManualScheduler {
    notify: Arc<Notify>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completes one pending (or the next) delay.
    pub fn fire(&self) {
        self.notify.notify_one();
    }
}

#[async_trait]
impl Scheduler for ManualScheduler {
    async fn delay(&self, _duration: Duration) {
        self.notify.notified().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recording_presenter_keeps_call_order() {
        let presenter = RecordingPresenter::new();
        presenter.show_screen(Screen::Quiz).await;
        presenter.update_score(1).await;
        presenter.render_result(1, 2, "msg").await;

        let events = presenter.events().await;
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], PresenterEvent::ScreenShown(Screen::Quiz));
        assert_eq!(events[1], PresenterEvent::ScoreUpdated(1));
        assert_eq!(
            presenter.last_result().await,
            Some((1, 2, "msg".to_string()))
        );
    }

    #[tokio::test]
    async fn test_instant_scheduler_records_requests() {
        let scheduler = InstantScheduler::new();
        scheduler.delay(Duration::from_millis(250)).await;
        scheduler.delay(Duration::from_millis(1000)).await;
        assert_eq!(
            scheduler.requested().await,
            vec![Duration::from_millis(250), Duration::from_millis(1000)]
        );
    }

    #[tokio::test]
    async fn test_manual_scheduler_blocks_until_fired() {
        let scheduler = ManualScheduler::new();
        let waiting = tokio::spawn({
            let scheduler = scheduler.clone();
            async move { scheduler.delay(Duration::from_millis(1)).await }
        });
        tokio::task::yield_now().await;
        assert!(!waiting.is_finished());

        scheduler.fire();
        waiting.await.unwrap();
    }
}
