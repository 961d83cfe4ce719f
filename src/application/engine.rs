use crate::domain::ports::{OptionMark, PresenterRef, QuestionView, SchedulerRef, Screen};
use crate::domain::question::QuizSet;
use crate::domain::session::{SessionSnapshot, SessionState, result_message};
use crate::error::{QuizError, Result};
use std::time::Duration;
use tokio::sync::RwLock;

/// How long answer feedback stays on screen before the next question.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1000);

/// The quiz state machine.
///
/// `QuizEngine` owns the session state and walks it through
/// `start -> submit_answer -> advance -> ... -> show_result`, telling the
/// `Presenter` what to display at each step and pacing the reveal of answer
/// feedback through the `Scheduler`. Methods take `&self`, so an
/// `Arc<QuizEngine>` can be shared between the input loop and spawned tasks.
pub struct QuizEngine {
    quiz: QuizSet,
    session: RwLock<SessionState>,
    presenter: PresenterRef,
    scheduler: SchedulerRef,
    feedback_delay: Duration,
}

impl QuizEngine {
    /// Creates an engine over a validated quiz set.
    ///
    /// # Arguments
    ///
    /// * `quiz` - The questions for this engine, in play order.
    /// * `presenter` - The UI collaborator.
    /// * `scheduler` - The delayed-callback collaborator.
    pub fn new(quiz: QuizSet, presenter: PresenterRef, scheduler: SchedulerRef) -> Self {
        Self {
            quiz,
            session: RwLock::new(SessionState::new()),
            presenter,
            scheduler,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
        }
    }

    /// Overrides the feedback pause between an answer and the next question.
    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    /// Begins a fresh run: resets the session, switches to the quiz screen
    /// and presents the first question. Any delayed advance still pending
    /// from an earlier run is invalidated by the generation bump.
    pub async fn start(&self) -> Result<()> {
        let mut session = self.session.write().await;
        session.reset();
        self.presenter.show_screen(Screen::Quiz).await;
        self.present_question(&mut session).await;
        Ok(())
    }

    /// Plays again after a finished run. Switching back to the quiz screen
    /// leaves the result screen; everything else is the same reset as
    /// [`start`](Self::start).
    pub async fn restart(&self) -> Result<()> {
        self.start().await
    }

    /// Submits the answer at `option_index` for the current question.
    ///
    /// While the session is locked (feedback from a previous submission is
    /// still on screen, or the run is over) the call is silently ignored.
    /// An out-of-range index fails with `InvalidArgument` without locking,
    /// so the caller can retry the same question.
    ///
    /// On an accepted answer the engine marks the correct option, marks the
    /// picked option when it was wrong, updates the score, waits out the
    /// feedback delay and advances.
    pub async fn submit_answer(&self, option_index: usize) -> Result<()> {
        let generation = {
            let mut session = self.session.write().await;
            if session.locked {
                return Ok(());
            }
            let question = &self.quiz.questions()[session.current_index];
            if option_index >= question.options.len() {
                return Err(QuizError::InvalidArgument(format!(
                    "option {} does not exist, question has {} options",
                    option_index + 1,
                    question.options.len()
                )));
            }
            session.locked = true;

            let correct = question.options[option_index].correct;
            for (index, option) in question.options.iter().enumerate() {
                if option.correct {
                    self.presenter.mark_option(index, OptionMark::Correct).await;
                } else if index == option_index {
                    self.presenter
                        .mark_option(index, OptionMark::Incorrect)
                        .await;
                }
            }
            if correct {
                session.score += 1;
                self.presenter.update_score(session.score).await;
            }
            session.generation
        };

        // The lock is released before waiting so submissions arriving during
        // the feedback window still reach the locked check above.
        self.scheduler.delay(self.feedback_delay).await;
        self.advance(generation).await;
        Ok(())
    }

    /// Moves to the next question or to the result screen. Runs after the
    /// feedback delay; a stale generation means the session was reset while
    /// the delay was pending, and the transition is dropped.
    async fn advance(&self, generation: u64) {
        let mut session = self.session.write().await;
        if session.generation != generation {
            return;
        }
        session.current_index += 1;
        if session.current_index < self.quiz.len() {
            self.present_question(&mut session).await;
        } else {
            self.show_result(&session).await;
        }
    }

    /// Unlocks answering and renders the question at the current index.
    ///
    /// The progress fraction divides the current index by the total, so it
    /// reads 0 on the first question and never reaches 1 before the result
    /// screen.
    async fn present_question(&self, session: &mut SessionState) {
        session.locked = false;
        let question = &self.quiz.questions()[session.current_index];
        let view = QuestionView {
            prompt: question.prompt.clone(),
            options: question.options.iter().map(|o| o.text.clone()).collect(),
            progress: session.current_index as f64 / self.quiz.len() as f64,
            number: session.current_index + 1,
            total: self.quiz.len(),
        };
        self.presenter.render_question(view).await;
    }

    async fn show_result(&self, session: &SessionState) {
        self.presenter.show_screen(Screen::Result).await;
        let message = result_message(session.score, self.quiz.len());
        self.presenter
            .render_result(session.score, self.quiz.len(), message)
            .await;
    }

    pub fn total_questions(&self) -> usize {
        self.quiz.len()
    }

    /// True once the run has moved past the last question.
    pub async fn is_complete(&self) -> bool {
        self.session.read().await.current_index >= self.quiz.len()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let session = self.session.read().await;
        SessionSnapshot {
            current_index: session.current_index,
            score: session.score,
            locked: session.locked,
            complete: session.current_index >= self.quiz.len(),
        }
    }
}
