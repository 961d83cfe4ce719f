use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};

/// One selectable answer for a question.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct AnswerOption {
    pub text: String,
    pub correct: bool,
}

impl AnswerOption {
    pub fn new(text: &str, correct: bool) -> Self {
        Self {
            text: text.to_string(),
            correct,
        }
    }
}

/// A multiple-choice question.
///
/// Invariants (checked by [`QuizSet::new`]): at least two options, exactly
/// one of them marked correct.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    fn validate(&self) -> Result<()> {
        if self.options.len() < 2 {
            return Err(QuizError::Configuration(format!(
                "question '{}' needs at least two options",
                self.prompt
            )));
        }
        let correct = self.options.iter().filter(|o| o.correct).count();
        if correct != 1 {
            return Err(QuizError::Configuration(format!(
                "question '{}' must have exactly one correct option, found {}",
                self.prompt, correct
            )));
        }
        Ok(())
    }
}

/// An ordered, validated, immutable set of questions for one quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSet(Vec<Question>);

impl QuizSet {
    /// Validates the question list and wraps it.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::Configuration(
                "quiz set must contain at least one question".to_string(),
            ));
        }
        for question in &questions {
            question.validate()?;
        }
        Ok(Self(questions))
    }

    pub fn questions(&self) -> &[Question] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The bundled general-knowledge set, used when no question file is given.
    pub fn builtin() -> Self {
        let question = |prompt: &str, options: Vec<AnswerOption>| Question {
            prompt: prompt.to_string(),
            options,
        };
        Self(vec![
            question(
                "What is the capital of France?",
                vec![
                    AnswerOption::new("London", false),
                    AnswerOption::new("Berlin", false),
                    AnswerOption::new("Paris", true),
                    AnswerOption::new("Madrid", false),
                ],
            ),
            question(
                "Which planet is known as the Red Planet?",
                vec![
                    AnswerOption::new("Venus", false),
                    AnswerOption::new("Mars", true),
                    AnswerOption::new("Jupiter", false),
                    AnswerOption::new("Saturn", false),
                ],
            ),
            question(
                "What is the largest ocean on Earth?",
                vec![
                    AnswerOption::new("Atlantic Ocean", false),
                    AnswerOption::new("Indian Ocean", false),
                    AnswerOption::new("Arctic Ocean", false),
                    AnswerOption::new("Pacific Ocean", true),
                ],
            ),
            question(
                "Which of these is NOT a programming language?",
                vec![
                    AnswerOption::new("Java", false),
                    AnswerOption::new("Python", false),
                    AnswerOption::new("Banana", true),
                    AnswerOption::new("JavaScript", false),
                ],
            ),
            question(
                "What is the chemical symbol for gold?",
                vec![
                    AnswerOption::new("Go", false),
                    AnswerOption::new("Gd", false),
                    AnswerOption::new("Au", true),
                    AnswerOption::new("Ag", false),
                ],
            ),
        ])
    }
}
