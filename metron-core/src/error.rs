//! Structured measurement errors
//!
//! Every failure is raised at the point of detection and returned as a value.
//! Nothing here formats messages for end users beyond the `Display` text;
//! the presentation layer decides how to show them.

use serde::Serialize;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const NULL_OPERAND: &str = "NULL_OPERAND";
    pub const NULL_UNIT: &str = "NULL_UNIT";
    pub const UNSUPPORTED_OPERATION: &str = "UNSUPPORTED_OPERATION";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const INVALID_UNIT: &str = "INVALID_UNIT";
}

/// Error type for quantity construction, conversion and arithmetic
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeasurementError {
    #[error("Invalid value: {value} is not a finite number")]
    InvalidValue { value: f64 },

    #[error("{operation}: other quantity is missing")]
    NullOperand { operation: String },

    #[error("{operation}: unit is missing")]
    NullUnit { operation: String },

    #[error("{operation} is not supported for {category} quantities")]
    UnsupportedOperation { category: String, operation: String },

    #[error("Division by zero")]
    DivideByZero,

    #[error("Unknown {category} unit: {unit}")]
    InvalidUnit { category: String, unit: String },
}

impl MeasurementError {
    // ========== Constructors ==========

    pub fn invalid_value(value: f64) -> Self {
        Self::InvalidValue { value }
    }

    pub fn null_operand(operation: impl Into<String>) -> Self {
        Self::NullOperand { operation: operation.into() }
    }

    pub fn null_unit(operation: impl Into<String>) -> Self {
        Self::NullUnit { operation: operation.into() }
    }

    pub fn unsupported(category: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            category: category.into(),
            operation: operation.into(),
        }
    }

    pub fn invalid_unit(category: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::InvalidUnit {
            category: category.into(),
            unit: unit.into(),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidValue { .. } => codes::INVALID_VALUE,
            Self::NullOperand { .. } => codes::NULL_OPERAND,
            Self::NullUnit { .. } => codes::NULL_UNIT,
            Self::UnsupportedOperation { .. } => codes::UNSUPPORTED_OPERATION,
            Self::DivideByZero => codes::DIV_ZERO,
            Self::InvalidUnit { .. } => codes::INVALID_UNIT,
        }
    }

    /// Suggestion for fixing the error
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::InvalidValue { .. } => "Use a finite number",
            Self::NullOperand { .. } => "Supply both quantities",
            Self::NullUnit { .. } => "Supply a target unit",
            Self::UnsupportedOperation { .. } => "Convert or compare instead",
            Self::DivideByZero => "Ensure divisor is not zero",
            Self::InvalidUnit { .. } => "List the category's units with `units <category>`",
        }
    }

    /// Name of the rejected operation, when the error carries one
    pub fn operation(&self) -> Option<&str> {
        match self {
            Self::NullOperand { operation }
            | Self::NullUnit { operation }
            | Self::UnsupportedOperation { operation, .. } => Some(operation),
            _ => None,
        }
    }
}

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, MeasurementError>;
