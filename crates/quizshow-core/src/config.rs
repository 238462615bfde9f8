//! Run configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default session time limit in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: i64 = 30;

/// Default location of the problem file.
pub const DEFAULT_PROBLEMS_PATH: &str = "/etc/problems.csv";

/// Settings for one quiz run, fixed once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whole-session budget in seconds. Not range checked.
    pub time_limit_secs: i64,
    /// Problem file to load.
    pub source_path: PathBuf,
    /// Shuffle problems before play.
    pub shuffle: bool,
}

impl Config {
    /// The session budget as a duration. Zero and negative limits expire
    /// immediately.
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs.max(0).unsigned_abs())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            source_path: PathBuf::from(DEFAULT_PROBLEMS_PATH),
            shuffle: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.time_limit(), Duration::from_secs(30));
        assert_eq!(config.source_path, PathBuf::from("/etc/problems.csv"));
        assert!(!config.shuffle);
    }

    #[test]
    fn negative_limit_expires_immediately() {
        let config = Config {
            time_limit_secs: -5,
            ..Config::default()
        };
        assert_eq!(config.time_limit(), Duration::ZERO);
    }
}
