//! Timed quiz session runner.
//!
//! Presents problems in order and races each answer read against one
//! session-wide deadline. The deadline is armed once before the first
//! problem and is never extended.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::QuizError;
use crate::input::AnswerSource;
use crate::model::{Problem, SessionResult};

/// Progress reporting trait.
pub trait SessionReporter: Send + Sync {
    /// A problem is about to wait for its answer.
    fn on_problem(&self, index: usize, problem: &Problem);
    /// An answer arrived before the deadline.
    fn on_answer(&self, index: usize, problem: &Problem, given: &str, correct: bool);
    /// The deadline fired while `index` was waiting.
    fn on_timeout(&self, index: usize);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl SessionReporter for NoopReporter {
    fn on_problem(&self, _: usize, _: &Problem) {}
    fn on_answer(&self, _: usize, _: &Problem, _: &str, _: bool) {}
    fn on_timeout(&self, _: usize) {}
}

/// One quiz session.
pub struct QuizSession {
    answers: Arc<dyn AnswerSource>,
    time_limit: Duration,
}

impl QuizSession {
    pub fn new(answers: Arc<dyn AnswerSource>, time_limit: Duration) -> Self {
        Self {
            answers,
            time_limit,
        }
    }

    /// Play through `problems` until all are answered or time runs out.
    ///
    /// A read that is still blocked when the deadline fires is abandoned:
    /// its task is detached and whatever it eventually returns is dropped.
    /// A failed read ends the session with an error and no score.
    pub async fn run(
        &self,
        problems: Vec<Problem>,
        reporter: &dyn SessionReporter,
    ) -> Result<SessionResult, QuizError> {
        let start = Instant::now();
        let mut result = SessionResult {
            total: problems.len(),
            ..SessionResult::default()
        };

        // `None` when the limit is too large to represent; that never expires.
        let deadline_at = tokio::time::Instant::now().checked_add(self.time_limit);
        let expired = || deadline_at.is_some_and(|at| tokio::time::Instant::now() >= at);
        let deadline = match deadline_at {
            Some(at) => tokio::time::sleep_until(at),
            None => tokio::time::sleep(self.time_limit),
        };
        tokio::pin!(deadline);
        tracing::debug!(
            "session armed: {} problem(s), {:?} limit",
            result.total,
            self.time_limit
        );

        for (index, problem) in problems.iter().enumerate() {
            reporter.on_problem(index, problem);
            result.shown += 1;

            // The timer entry may not have fired yet even though its instant
            // has passed, so check the clock before waiting at all.
            if expired() {
                time_up(&mut result, reporter, index);
                break;
            }

            let source = Arc::clone(&self.answers);
            let read = tokio::task::spawn_blocking(move || source.read_answer());

            tokio::select! {
                biased;

                () = &mut deadline => {
                    time_up(&mut result, reporter, index);
                    break;
                }
                joined = read => {
                    let given = joined.map_err(|e| QuizError::ReadTask(e.to_string()))??;
                    if expired() {
                        time_up(&mut result, reporter, index);
                        break;
                    }
                    let correct = problem.is_correct(&given);
                    if correct {
                        result.correct += 1;
                    }
                    tracing::debug!("problem {index} answered, correct={correct}");
                    reporter.on_answer(index, problem, &given, correct);
                }
            }
        }

        tracing::debug!(
            "session finished in {:.1}s: {}/{} correct, {} shown",
            start.elapsed().as_secs_f64(),
            result.correct,
            result.total,
            result.shown
        );
        Ok(result)
    }
}

fn time_up(result: &mut SessionResult, reporter: &dyn SessionReporter, index: usize) {
    tracing::info!("time limit reached at problem {index}");
    reporter.on_timeout(index);
    result.timed_out = true;
}
