//! CSV problem loader.
//!
//! Reads a header-less, two-column CSV source fully into memory. Any
//! malformed record fails the whole load; there is no per-record skipping.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::QuizError;
use crate::model::Problem;

/// Load every problem from the CSV file at `path`, in file order.
pub fn load_problems(path: &Path) -> Result<Vec<Problem>, QuizError> {
    let file = File::open(path).map_err(|source| QuizError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let problems = parse_problems(file)?;
    tracing::info!(
        "loaded {} problem(s) from {}",
        problems.len(),
        path.display()
    );
    Ok(problems)
}

/// Parse problems from any CSV reader.
///
/// Rows must all have the same width (the first row decides). Only the
/// first two fields are used.
pub fn parse_problems<R: Read>(reader: R) -> Result<Vec<Problem>, QuizError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut problems = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let (Some(prompt), Some(answer)) = (record.get(0), record.get(1)) else {
            return Err(QuizError::MissingField {
                record: index + 1,
                found: record.len(),
            });
        };
        problems.push(Problem::new(prompt, answer));
    }

    Ok(problems)
}

/// Parse problems from an in-memory string (useful for testing).
pub fn parse_problems_str(content: &str) -> Result<Vec<Problem>, QuizError> {
    parse_problems(content.as_bytes())
}
