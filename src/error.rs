//! Unified error hierarchy
//!
//! The computational core (cycles, state, group) is total and appears
//! nowhere here; errors come from the shell around it — storage, export,
//! configuration, and input parsing at the CLI edge.

use thiserror::Error;

use crate::export::ExportError;
use crate::store::StoreError;

/// Top-level error type for vitalrs operations
#[derive(Debug, Error)]
pub enum VitalError {
    /// People store errors
    #[error("People store error: {0}")]
    Store(#[from] StoreError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for vitalrs operations
pub type Result<T> = std::result::Result<T, VitalError>;

impl VitalError {
    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            VitalError::Store(StoreError::NotFound(key)) => {
                format!(
                    "No person named \"{}\" — add them with `vitalrs people add`.",
                    key
                )
            }
            VitalError::Store(StoreError::RosterFull { max }) => {
                format!(
                    "The roster already holds {} people. Remove someone before adding another.",
                    max
                )
            }
            VitalError::Validation(reason) => format!("Invalid input: {}", reason),
            _ => self.to_string(),
        }
    }
}
