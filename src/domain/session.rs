/// Mutable state of a single quiz run.
///
/// `locked` guards against re-entrant submissions: it is set when an answer
/// comes in and cleared when the next question is presented. A fresh session
/// starts locked so nothing can be submitted before `start`. `generation` is
/// bumped on every reset; a delayed advance carrying a stale generation is
/// discarded.
#[derive(Debug)]
pub struct SessionState {
    pub current_index: usize,
    pub score: usize,
    pub locked: bool,
    pub generation: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_index: 0,
            score: 0,
            locked: true,
            generation: 0,
        }
    }

    /// Resets for a fresh run and invalidates pending delayed callbacks.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.locked = true;
        self.generation += 1;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only copy of the session, for callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub current_index: usize,
    pub score: usize,
    pub locked: bool,
    pub complete: bool,
}

/// Picks the result message for a finished run, first matching tier wins.
pub fn result_message(score: usize, total: usize) -> &'static str {
    let percentage = score as f64 / total as f64 * 100.0;
    if score == total {
        "Perfect! You're a genius!"
    } else if percentage >= 80.0 {
        "Great job! You know your stuff!"
    } else if percentage >= 60.0 {
        "Good effort! Keep learning!"
    } else if percentage >= 40.0 {
        "Not bad! Try again to improve!"
    } else {
        "Keep studying! You'll get better!"
    }
}
