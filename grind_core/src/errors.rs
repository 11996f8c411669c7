//! # Error Types
//!
//! Structured error types for grind_core. The calculator engine itself is
//! infallible by contract (malformed text sanitizes to zero, incomplete
//! input degrades to the no-data sentinel); these errors serve catalog
//! validation, persistence, and the account access workflow.
//!
//! ## Example
//!
//! ```rust
//! use grind_core::errors::{CalcError, CalcResult};
//!
//! fn validate_cap(cap: u32) -> CalcResult<()> {
//!     if cap == 0 {
//!         return Err(CalcError::invalid_input(
//!             "guest_cap",
//!             cap.to_string(),
//!             "Guest usage cap must be at least 1",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for grind_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for catalog, persistence, and account operations.
///
/// Each variant carries enough context for programmatic handling; all
/// variants serialize cleanly to JSON for the API layer.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Calculator id not present in the catalog
    #[error("Unknown calculator: {id}")]
    UnknownCalculator { id: String },

    /// A formula references an input key the definition does not declare
    #[error("Calculator '{calculator}' formula references undeclared input key '{key}'")]
    UndeclaredInputKey { calculator: String, key: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Access request already decided; transitions are one-shot
    #[error("Access request for {email} already decided: {status}")]
    AccessAlreadyDecided { email: String, status: String },

    /// Account locked out after too many failed login attempts
    #[error("Account {email} is locked until {until}")]
    AccountLocked {
        email: String,
        until: DateTime<Utc>,
    },

    /// Guest session has used up its calculation allowance
    #[error("Guest usage cap reached: {used}/{cap} calculations")]
    GuestCapReached { used: u32, cap: u32 },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownCalculator error
    pub fn unknown_calculator(id: impl Into<String>) -> Self {
        CalcError::UnknownCalculator { id: id.into() }
    }

    /// Create an UndeclaredInputKey error
    pub fn undeclared_input_key(calculator: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::UndeclaredInputKey {
            calculator: calculator.into(),
            key: key.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(
        path: impl Into<String>,
        locked_by: impl Into<String>,
        locked_at: impl Into<String>,
    ) -> Self {
        CalcError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this error is recoverable by waiting and retrying
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CalcError::FileLocked { .. } | CalcError::AccountLocked { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            CalcError::UndeclaredInputKey { .. } => "UNDECLARED_INPUT_KEY",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::FileLocked { .. } => "FILE_LOCKED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
            CalcError::AccessAlreadyDecided { .. } => "ACCESS_ALREADY_DECIDED",
            CalcError::AccountLocked { .. } => "ACCOUNT_LOCKED",
            CalcError::GuestCapReached { .. } => "GUEST_CAP_REACHED",
        }
    }
}
