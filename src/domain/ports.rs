use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// The three screens of the quiz UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Quiz,
    Result,
}

/// Feedback mark applied to a single option after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    Incorrect,
}

/// Everything a presenter needs to display one question.
///
/// Options keep their order from the quiz set; the position within `options`
/// is the stable reference used by `submit_answer` and `mark_option`.
/// `progress` is in `0..1` and reflects questions entered, not completed.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub prompt: String,
    pub options: Vec<String>,
    pub progress: f64,
    pub number: usize,
    pub total: usize,
}

/// UI-rendering collaborator driven by the engine. Assumed infallible.
#[async_trait]
pub trait Presenter: Send + Sync {
    async fn show_screen(&self, screen: Screen);
    async fn render_question(&self, view: QuestionView);
    async fn mark_option(&self, option_index: usize, mark: OptionMark);
    async fn update_score(&self, score: usize);
    async fn render_result(&self, score: usize, total: usize, message: &str);
}

/// Delayed-execution collaborator. `delay` returns after at least `duration`.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn delay(&self, duration: Duration);
}

pub type PresenterRef = Arc<dyn Presenter>;
pub type SchedulerRef = Arc<dyn Scheduler>;
