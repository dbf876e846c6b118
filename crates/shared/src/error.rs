// Error types for planning-table access.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanningError {
    #[error("Failed to read planning table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write planning table {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Task not found in planning table: {0}")]
    TaskNotFound(String),
}
