//! Core data model types for quizshow.

use std::fmt;

/// A single question and the answer expected for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Problem {
    /// Text shown to the player, verbatim from the source.
    pub prompt: String,
    /// Expected answer, trimmed of surrounding whitespace.
    pub answer: String,
}

impl Problem {
    pub fn new(prompt: impl Into<String>, answer: impl AsRef<str>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.as_ref().trim().to_string(),
        }
    }

    /// Exact, case-sensitive comparison against a supplied answer.
    pub fn is_correct(&self, given: &str) -> bool {
        given == self.answer
    }
}

/// Outcome of one quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionResult {
    /// Problems loaded for the session, shown or not.
    pub total: usize,
    /// Problems presented, including one still unanswered at timeout.
    pub shown: usize,
    /// Answers that matched exactly.
    pub correct: usize,
    /// Whether the session timer expired before every problem was answered.
    pub timed_out: bool,
}

impl fmt::Display for SessionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Problems: {}, Number correct: {}",
            self.total, self.correct
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_is_trimmed_prompt_is_not() {
        let p = Problem::new(" 5+5 ", "  10\t");
        assert_eq!(p.prompt, " 5+5 ");
        assert_eq!(p.answer, "10");
    }

    #[test]
    fn comparison_is_exact() {
        let p = Problem::new("capital of France", "Paris");
        assert!(p.is_correct("Paris"));
        assert!(!p.is_correct("paris"));
        assert!(!p.is_correct(" Paris"));
    }

    #[test]
    fn summary_line() {
        let result = SessionResult {
            total: 2,
            shown: 2,
            correct: 1,
            timed_out: false,
        };
        assert_eq!(result.to_string(), "Total Problems: 2, Number correct: 1");
    }
}
