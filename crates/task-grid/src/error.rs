//! Grid Errors
//!
//! The pipeline itself is total; these errors only come from loading
//! configuration/seed data and validating row input.

use serde::{Deserialize, Serialize};

/// Common result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Grid-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GridError {
    NotFound(String),
    InvalidInput(String),
    Parse(String),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::NotFound(msg) => write!(f, "Not found: {}", msg),
            GridError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            GridError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

impl From<serde_json::Error> for GridError {
    fn from(e: serde_json::Error) -> Self {
        GridError::Parse(e.to_string())
    }
}
