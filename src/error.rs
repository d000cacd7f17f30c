//! Custom error types for the royalty report
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. Every variant is surfaced to the caller
//! as a user-visible failure; nothing is retried.

use thiserror::Error;

/// The main error type for royalty report operations
#[derive(Error, Debug)]
pub enum RoyaltyError {
    /// A required column is absent from an input spreadsheet
    #[error("Missing required column '{column}' in {file}")]
    MissingColumn { file: String, column: &'static str },

    /// An Amount cell could not be read as a number
    #[error("Invalid amount '{value}' in {file} at row {row}")]
    InvalidAmount {
        file: String,
        row: usize,
        value: String,
    },

    /// The input is not a readable spreadsheet
    #[error("Invalid spreadsheet file {file}: {reason}")]
    InvalidFile { file: String, reason: String },

    /// Validation errors for user input (period, arguments)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Spreadsheet writer errors
    #[error("Export error: {0}")]
    Export(String),
}

impl RoyaltyError {
    /// Create a "missing column" error
    pub fn missing_column(file: impl Into<String>, column: &'static str) -> Self {
        Self::MissingColumn {
            file: file.into(),
            column,
        }
    }

    /// Create an "invalid file" error
    pub fn invalid_file(file: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidFile {
            file: file.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if this is a missing column error
    pub fn is_missing_column(&self) -> bool {
        matches!(self, Self::MissingColumn { .. })
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount { .. })
    }

    /// Check if this is an invalid file error
    pub fn is_invalid_file(&self) -> bool {
        matches!(self, Self::InvalidFile { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for RoyaltyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RoyaltyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for RoyaltyError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for royalty report operations
pub type RoyaltyResult<T> = Result<T, RoyaltyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = RoyaltyError::missing_column("operacoes.xlsx", "Amount");
        assert_eq!(
            err.to_string(),
            "Missing required column 'Amount' in operacoes.xlsx"
        );
        assert!(err.is_missing_column());
    }

    #[test]
    fn test_invalid_amount_display() {
        let err = RoyaltyError::InvalidAmount {
            file: "operacoes.xlsx".into(),
            row: 7,
            value: "n/a".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid amount 'n/a' in operacoes.xlsx at row 7"
        );
        assert!(err.is_invalid_amount());
        assert!(!err.is_invalid_file());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RoyaltyError = io_err.into();
        assert!(matches!(err, RoyaltyError::Io(_)));
    }
}
