//! Errors raised while interpreting a command line

use metron_core::MeasurementError;
use thiserror::Error;

pub mod codes {
    pub const UNKNOWN_COMMAND: &str = "UNKNOWN_COMMAND";
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} expects {expected} arguments, got {got}")]
    ArgCount {
        command: &'static str,
        expected: &'static str,
        got: usize,
    },

    #[error("Not a number: {0}")]
    InvalidNumber(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unit not found in any category: {0}")]
    UnknownUnit(String),

    #[error(transparent)]
    Measurement(#[from] MeasurementError),
}

impl CommandError {
    /// Machine-readable code; measurement errors keep their own codes
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::UnknownCommand(_) => codes::UNKNOWN_COMMAND,
            CommandError::ArgCount { .. } => codes::ARG_COUNT,
            CommandError::InvalidNumber(_) => codes::PARSE_ERROR,
            CommandError::UnknownCategory(_) => codes::UNKNOWN_CATEGORY,
            CommandError::UnknownUnit(_) => codes::UNKNOWN_UNIT,
            CommandError::Measurement(e) => e.code(),
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            CommandError::UnknownCommand(_) | CommandError::ArgCount { .. } => "Type `help` for usage",
            CommandError::InvalidNumber(_) => "Use a finite decimal number such as 12.5 or -3e2",
            CommandError::UnknownCategory(_) => "Categories: length, weight, volume, temperature",
            CommandError::UnknownUnit(_) => "List a category's units with `units <category>`",
            CommandError::Measurement(e) => e.suggestion(),
        }
    }
}
