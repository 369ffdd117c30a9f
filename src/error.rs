//! Error types for the Shelfmark core

use serde::Serialize;
use thiserror::Error;

use crate::repository::StorageError;

/// Numeric error codes exposed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    BadValue = 2,
    DuplicateTitle = 3,
    NoSuchBook = 4,
    AlreadyBorrowed = 5,
    NotBorrowed = 6,
    StorageFailure = 7,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Book '{0}' already exists in the catalog")]
    DuplicateTitle(String),

    #[error("Book '{0}' not found in the catalog")]
    NotFound(String),

    #[error("'{title}' is already borrowed by {borrower}")]
    AlreadyBorrowed { title: String, borrower: String },

    #[error("'{0}' is not currently borrowed")]
    NotBorrowed(String),

    #[error("Loan period must be a positive number of days, got {0}")]
    InvalidPeriod(i64),

    #[error("Storage error: {0}")]
    Persistence(#[from] StorageError),
}

/// Error payload handed to the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    /// Numeric code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::DuplicateTitle(_) => ErrorCode::DuplicateTitle,
            AppError::NotFound(_) => ErrorCode::NoSuchBook,
            AppError::AlreadyBorrowed { .. } => ErrorCode::AlreadyBorrowed,
            AppError::NotBorrowed(_) => ErrorCode::NotBorrowed,
            AppError::InvalidPeriod(_) => ErrorCode::BadValue,
            AppError::Persistence(_) => ErrorCode::StorageFailure,
        }
    }

    /// Build the payload shown to the user for this error
    pub fn report(&self) -> ErrorReport {
        let code = self.code();
        ErrorReport {
            code: code as u32,
            error: format!("{:?}", code),
            message: self.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
