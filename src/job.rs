use std::path::PathBuf;
use std::str::FromStr;

use crate::error::TranspileError;

/// Represents a job to transpile one source file into one destination file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// The path of the file to read
    source: PathBuf,
    /// The path of the file to write
    destination: PathBuf,
}

impl Job {
    /// Creates a new job with the specified source and destination paths.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn into_inner(self) -> (PathBuf, PathBuf) {
        (self.source, self.destination)
    }
}

impl FromStr for Job {
    type Err = TranspileError;

    /// Parses `source=destination`, splitting on the first `=`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.split_once('=') {
            Some((source, destination)) if !source.is_empty() && !destination.is_empty() => {
                Ok(Job::new(source, destination))
            }
            _ => Err(TranspileError::InvalidJob(token.to_string())),
        }
    }
}
