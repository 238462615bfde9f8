//! Command-line flags.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use quizshow_core::config::{Config, DEFAULT_PROBLEMS_PATH, DEFAULT_TIME_LIMIT_SECS};

/// Long flags that may also be spelled with a single dash (`-time 10`).
const SINGLE_DASH_LONG: [&str; 3] = ["time", "file", "random"];

#[derive(Debug, Parser)]
#[command(name = "quizshow", version, about = "Timed command-line quiz game")]
pub struct Cli {
    /// Time limit for the whole quiz in seconds
    #[arg(
        short = 't',
        long = "time",
        env = "QUIZ_TIME",
        default_value_t = DEFAULT_TIME_LIMIT_SECS,
        allow_negative_numbers = true
    )]
    pub time: i64,

    /// CSV file of problem,answer rows
    #[arg(short = 'f', long = "file", env = "QUIZ_FILE", default_value = DEFAULT_PROBLEMS_PATH)]
    pub file: PathBuf,

    /// Randomize the question ordering
    #[arg(
        short = 'r',
        long = "random",
        env = "QUIZ_RANDOM",
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set
    )]
    pub random: bool,
}

impl Cli {
    /// Parse flags from the process arguments.
    pub fn from_env() -> Self {
        Self::parse_from(normalize_flags(std::env::args_os()))
    }

    pub fn into_config(self) -> Config {
        Config {
            time_limit_secs: self.time,
            source_path: self.file,
            shuffle: self.random,
        }
    }
}

/// Rewrite single-dash long flags (`-time`, `-file=x`) to their `--` form.
///
/// Arguments after a bare `--` are left alone.
pub fn normalize_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.to_str() {
                Some(s) if is_single_dash_long(s) => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_LONG.contains(&name)
}
