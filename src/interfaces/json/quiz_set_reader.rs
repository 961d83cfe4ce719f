use crate::domain::question::{Question, QuizSet};
use crate::error::Result;
use std::io::Read;

/// Reads a quiz set from a JSON source.
///
/// The expected shape is an array of questions, each with a `prompt` and an
/// `options` array of `{ "text": ..., "correct": ... }` records. The parsed
/// set goes through [`QuizSet::new`], so structural problems (no correct
/// option, single-option questions, empty file) surface as configuration
/// errors rather than panics later in the run.
pub struct QuizSetReader<R: Read> {
    source: R,
}

impl<R: Read> QuizSetReader<R> {
    /// Creates a new `QuizSetReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Parses and validates the quiz set.
    pub fn read(self) -> Result<QuizSet> {
        let questions: Vec<Question> = serde_json::from_reader(self.source)?;
        QuizSet::new(questions)
    }
}
