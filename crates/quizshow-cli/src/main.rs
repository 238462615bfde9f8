//! quizshow CLI: a timed command-line quiz game.

use std::process;

use tracing_subscriber::EnvFilter;

use quizshow_core::error::QuizError;

mod args;
mod greeting;
mod play;

use args::Cli;

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries the quiz itself.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizshow=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::from_env().into_config();

    let code = match play::execute(config).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if e.downcast_ref::<QuizError>().is_some_and(QuizError::is_load_error) {
                eprintln!("Problems are read from -f/--file: one `problem,answer` row per line.");
            }
            1
        }
    };

    // A read abandoned at timeout is still parked on stdin, and runtime
    // shutdown would wait for it.
    process::exit(code);
}
