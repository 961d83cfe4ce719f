use clap::Parser;
use miette::{IntoDiagnostic, Result};
use pubquiz::application::engine::QuizEngine;
use pubquiz::domain::ports::{PresenterRef, SchedulerRef};
use pubquiz::domain::question::QuizSet;
use pubquiz::infrastructure::clock::TokioScheduler;
use pubquiz::infrastructure::console::ConsolePresenter;
use pubquiz::interfaces::json::quiz_set_reader::QuizSetReader;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Questions JSON file (optional). Uses the built-in set when omitted.
    questions: Option<PathBuf>,

    /// Milliseconds to keep answer feedback on screen before moving on.
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let quiz = match cli.questions {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            QuizSetReader::new(file).read().into_diagnostic()?
        }
        None => QuizSet::builtin(),
    };

    let presenter: PresenterRef = Arc::new(ConsolePresenter::new());
    let scheduler: SchedulerRef = Arc::new(TokioScheduler);
    let engine = QuizEngine::new(quiz, presenter, scheduler)
        .with_feedback_delay(Duration::from_millis(cli.delay_ms));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    engine.start().await.into_diagnostic()?;
    loop {
        while !engine.is_complete().await {
            print!("> ");
            io::stdout().flush().into_diagnostic()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line.into_diagnostic()?;
            match line.trim().parse::<usize>() {
                Ok(n) if n >= 1 => {
                    if let Err(e) = engine.submit_answer(n - 1).await {
                        eprintln!("{e}");
                    }
                }
                _ => eprintln!("Enter the number of an option."),
            }
        }

        print!("Play again? [y/N] ");
        io::stdout().flush().into_diagnostic()?;
        let Some(line) = lines.next() else {
            break;
        };
        if line.into_diagnostic()?.trim().eq_ignore_ascii_case("y") {
            engine.restart().await.into_diagnostic()?;
        } else {
            break;
        }
    }

    Ok(())
}
