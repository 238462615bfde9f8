//! Gate, load, shuffle and play one quiz.

use std::io;
use std::sync::Arc;

use anyhow::Result;

use quizshow_core::config::Config;
use quizshow_core::input::StdinAnswers;
use quizshow_core::loader::load_problems;
use quizshow_core::model::Problem;
use quizshow_core::session::{QuizSession, SessionReporter};
use quizshow_core::shuffle::{seeded_rng, shuffle_problems};

use crate::greeting;

/// Console reporter.
struct ConsoleReporter;

impl SessionReporter for ConsoleReporter {
    fn on_problem(&self, index: usize, problem: &Problem) {
        println!("Problem {index}: {}", problem.prompt);
    }

    fn on_answer(&self, _: usize, _: &Problem, _: &str, correct: bool) {
        if correct {
            println!("Correct!");
        } else {
            println!("Incorrect!");
        }
    }

    fn on_timeout(&self, _: usize) {
        println!("Times up! Thanks for playing!");
    }
}

pub async fn execute(config: Config) -> Result<()> {
    tracing::debug!("starting with {config:?}");

    let accepted = greeting::confirm(&config, &mut io::stdin().lock(), &mut io::stdout())?;
    if !accepted {
        return Ok(());
    }

    let mut problems = load_problems(&config.source_path)?;
    if config.shuffle {
        let seed = clock_seed();
        tracing::debug!("shuffle seed {seed}");
        shuffle_problems(&mut problems, &mut seeded_rng(seed));
    }

    let session = QuizSession::new(Arc::new(StdinAnswers), config.time_limit());
    let result = session.run(problems, &ConsoleReporter).await?;

    println!("{result}");
    Ok(())
}

/// Seed for the shuffle RNG, taken from the wall clock once per run.
fn clock_seed() -> u64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros())
        .unsigned_abs()
}
