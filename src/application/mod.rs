//! Application layer containing the core quiz logic orchestration.
//!
//! This module defines the `QuizEngine` which owns the session state and
//! drives the Presenter and Scheduler ports through a run.

pub mod engine;
