//! quizshow-core: problem loading, shuffling and the timed session runner.
//!
//! This crate holds everything about a quiz run that does not touch the
//! terminal directly, so the `quizshow` binary only wires flags, prompts and
//! console output around it.

pub mod config;
pub mod error;
pub mod input;
pub mod loader;
pub mod model;
pub mod session;
pub mod shuffle;
