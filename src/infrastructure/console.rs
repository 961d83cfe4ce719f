use crate::domain::ports::{OptionMark, Presenter, QuestionView, Screen};
use async_trait::async_trait;
use tokio::sync::RwLock;

const PROGRESS_WIDTH: usize = 20;

/// Presenter that renders the quiz to stdout.
///
/// Keeps the labels of the last rendered question so feedback marks can show
/// the option text rather than a bare index.
#[derive(Default)]
pub struct ConsolePresenter {
    options: RwLock<Vec<String>>,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

fn progress_bar(progress: f64) -> String {
    let filled = (progress * PROGRESS_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_WIDTH);
    format!(
        "[{}{}] {:3.0}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled),
        progress * 100.0
    )
}

#[async_trait]
impl Presenter for ConsolePresenter {
    async fn show_screen(&self, screen: Screen) {
        match screen {
            Screen::Start => {}
            Screen::Quiz => println!("\n=== Quiz time! ==="),
            Screen::Result => println!("\n=== Results ==="),
        }
    }

    async fn render_question(&self, view: QuestionView) {
        println!();
        println!("Question {}/{}  {}", view.number, view.total, progress_bar(view.progress));
        println!("{}", view.prompt);
        for (index, text) in view.options.iter().enumerate() {
            println!("  {}) {}", index + 1, text);
        }
        *self.options.write().await = view.options;
    }

    async fn mark_option(&self, option_index: usize, mark: OptionMark) {
        let options = self.options.read().await;
        let label = options
            .get(option_index)
            .map(String::as_str)
            .unwrap_or("<unknown>");
        match mark {
            OptionMark::Correct => println!("  ✔ {label}"),
            OptionMark::Incorrect => println!("  ✘ {label}"),
        }
    }

    async fn update_score(&self, score: usize) {
        println!("Score: {score}");
    }

    async fn render_result(&self, score: usize, total: usize, message: &str) {
        println!("You scored {score} out of {total}.");
        println!("{message}");
    }
}
