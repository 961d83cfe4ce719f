use pubquiz::domain::question::{AnswerOption, Question, QuizSet};
use std::io::Write;
use tempfile::NamedTempFile;

/// The built-in five questions as a JSON fixture. Correct answers, 1-based:
/// 3, 2, 4, 3, 3.
#[allow(dead_code)]
pub const SAMPLE_QUESTIONS: &str = r#"[
    {
        "prompt": "What is the capital of France?",
        "options": [
            { "text": "London", "correct": false },
            { "text": "Berlin", "correct": false },
            { "text": "Paris", "correct": true },
            { "text": "Madrid", "correct": false }
        ]
    },
    {
        "prompt": "Which planet is known as the Red Planet?",
        "options": [
            { "text": "Venus", "correct": false },
            { "text": "Mars", "correct": true },
            { "text": "Jupiter", "correct": false },
            { "text": "Saturn", "correct": false }
        ]
    },
    {
        "prompt": "What is the largest ocean on Earth?",
        "options": [
            { "text": "Atlantic Ocean", "correct": false },
            { "text": "Indian Ocean", "correct": false },
            { "text": "Arctic Ocean", "correct": false },
            { "text": "Pacific Ocean", "correct": true }
        ]
    },
    {
        "prompt": "Which of these is NOT a programming language?",
        "options": [
            { "text": "Java", "correct": false },
            { "text": "Python", "correct": false },
            { "text": "Banana", "correct": true },
            { "text": "JavaScript", "correct": false }
        ]
    },
    {
        "prompt": "What is the chemical symbol for gold?",
        "options": [
            { "text": "Go", "correct": false },
            { "text": "Gd", "correct": false },
            { "text": "Au", "correct": true },
            { "text": "Ag", "correct": false }
        ]
    }
]"#;

/// Writes a questions JSON fixture to a temp file.
#[allow(dead_code)]
pub fn write_questions_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// A quiz set of `n` two-option questions where option 0 is always correct.
#[allow(dead_code)]
pub fn uniform_set(n: usize) -> QuizSet {
    let questions = (0..n)
        .map(|i| Question {
            prompt: format!("question {}", i + 1),
            options: vec![
                AnswerOption::new("right", true),
                AnswerOption::new("wrong", false),
            ],
        })
        .collect();
    QuizSet::new(questions).unwrap()
}
