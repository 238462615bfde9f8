//! Player input.
//!
//! Answers are read with blocking I/O so the session runner can push each
//! read onto the blocking pool and walk away from it when the timer wins.

use std::io::BufRead;

use crate::error::QuizError;

/// A blocking source of player answers.
pub trait AnswerSource: Send + Sync + 'static {
    /// Block until the player submits one answer.
    fn read_answer(&self) -> Result<String, QuizError>;
}

/// Answers typed on the process's standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinAnswers;

impl AnswerSource for StdinAnswers {
    fn read_answer(&self) -> Result<String, QuizError> {
        read_token(&mut std::io::stdin().lock())
    }
}

/// Read one line and return its first whitespace-delimited token.
///
/// A blank line gives an empty token. End of input is an error.
pub fn read_token<R: BufRead + ?Sized>(reader: &mut R) -> Result<String, QuizError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(QuizError::InputClosed);
    }
    Ok(line
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string())
}
