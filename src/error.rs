use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranspileError {
    /// The output directory could not be created
    #[error("failed to create output directory '{}': {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A source file could not be read or a destination could not be written
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The transform step rejected a source file
    #[error("transform failed for '{}': {message}", path.display())]
    Transform { path: PathBuf, message: String },
    /// The compile step rejected the transformed source
    #[error("compile failed for '{}': {message}", path.display())]
    Compile { path: PathBuf, message: String },
    /// A job argument was not of the form `source=destination`
    #[error("invalid job '{0}': expected <source>=<destination>")]
    InvalidJob(String),
}

/// Rejection reported by a transform or compile collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct StageError(pub String);

impl StageError {
    pub fn new(message: impl Into<String>) -> Self {
        StageError(message.into())
    }
}
