//! Quiz error types.
//!
//! Every failure that can stop a quiz run before a score is reported. The
//! binary treats all of them as fatal; they are typed so callers and tests
//! can tell a bad problem file from a closed terminal.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading problems or reading answers.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The problem file could not be opened.
    #[error("failed to open problem file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The problem file is not well-formed CSV.
    #[error("malformed problem data: {0}")]
    Csv(#[from] csv::Error),

    /// A record has fewer than the two required fields.
    #[error("record {record} has {found} field(s), expected a prompt and an answer")]
    MissingField { record: usize, found: usize },

    /// Reading from the input stream failed.
    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),

    /// The input stream ended while an answer was expected.
    #[error("input closed before an answer was given")]
    InputClosed,

    /// The background answer read panicked or was cancelled.
    #[error("answer reader stopped unexpectedly: {0}")]
    ReadTask(String),
}

impl QuizError {
    /// Returns `true` if this error came from the problem source rather than
    /// the interactive input stream.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            QuizError::Open { .. } | QuizError::Csv(_) | QuizError::MissingField { .. }
        )
    }
}
