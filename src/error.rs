//! # Error Types
//!
//! Every failure the calculator can report, and the exit status each one
//! maps to.

use crate::config::{EXIT_IO_FAILURE, EXIT_PARSE_FAILURE, EXIT_VALIDATION_FAILURE};
use crate::models::InputMode;
use std::fmt;

/// Which of the two inputs a failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Weight,
    Height,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Weight => write!(f, "weight"),
            Field::Height => write!(f, "height"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BmiError {
    #[error("{}", parse_message(.mode, .field, .input))]
    Parse {
        mode: InputMode,
        field: Field,
        input: String,
    },

    #[error("Error: weight and height must be positive ({field} was {value})")]
    Validation { field: Field, value: f64 },

    #[error("height must be > 0 (got {0} m)")]
    InvalidHeight(f64),

    #[error("I/O error: {0}")]
    Io(String),
}

fn parse_message(mode: &InputMode, field: &Field, input: &str) -> String {
    match mode {
        InputMode::Arguments => format!(
            "Invalid arguments: weight and height must be numbers ({field} was '{input}')"
        ),
        InputMode::Interactive => format!(
            "Invalid input: please enter numbers, e.g. weight 70 and height 170 or 1.70 ({field} was '{input}')"
        ),
    }
}

impl BmiError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            BmiError::Parse { .. } => EXIT_PARSE_FAILURE,
            BmiError::Validation { .. } | BmiError::InvalidHeight(_) => EXIT_VALIDATION_FAILURE,
            BmiError::Io(_) => EXIT_IO_FAILURE,
        }
    }
}

impl From<anyhow::Error> for BmiError {
    fn from(err: anyhow::Error) -> Self {
        BmiError::Io(format!("{err:#}"))
    }
}

impl From<std::io::Error> for BmiError {
    fn from(err: std::io::Error) -> Self {
        BmiError::Io(err.to_string())
    }
}
