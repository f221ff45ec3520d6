//! # Error Types
//!
//! Structured error types for intdiv_core. An evaluation can fail in exactly
//! two ways, and both are display states rather than crashes: the front end
//! replaces every output field with [`DivError::label`] and carries on.
//!
//! ## Example
//!
//! ```rust
//! use intdiv_core::errors::{DivError, DivResult};
//!
//! fn check_divisor(text: &str) -> DivResult<()> {
//!     if text.trim() == "0" {
//!         return Err(DivError::DivisionByZero);
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(check_divisor("0").unwrap_err().label(), "DIVISION BY ZERO");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for intdiv_core operations
pub type DivResult<T> = Result<T, DivError>;

/// Display label shown in place of every output when the divisor is zero.
pub const DIVISION_BY_ZERO_LABEL: &str = "DIVISION BY ZERO";

/// Display label shown in place of every output when an operand does not parse.
pub const SYNTAX_ERROR_LABEL: &str = "SYNTAX ERROR";

/// Structured error type for division evaluations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum DivError {
    /// The divisor parsed successfully but is zero
    #[error("Division by zero")]
    DivisionByZero,

    /// An operand is not an integer literal
    #[error("Invalid operand '{field}': '{value}' - {reason}")]
    InvalidOperand {
        field: String,
        value: String,
        reason: String,
    },
}

impl DivError {
    /// Create an InvalidOperand error
    pub fn invalid_operand(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        DivError::InvalidOperand {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// The label a front end shows on every output field for this error.
    pub fn label(&self) -> &'static str {
        match self {
            DivError::DivisionByZero => DIVISION_BY_ZERO_LABEL,
            DivError::InvalidOperand { .. } => SYNTAX_ERROR_LABEL,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DivError::DivisionByZero => "DIVISION_BY_ZERO",
            DivError::InvalidOperand { .. } => "INVALID_OPERAND",
        }
    }
}
