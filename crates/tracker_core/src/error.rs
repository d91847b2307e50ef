use std::fmt;

use thiserror::Error;

/// Input that failed the positivity check in the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    Steps,
    Weight,
    Height,
    Duration,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::Steps => "number of steps",
            InputField::Weight => "weight",
            InputField::Height => "height",
            InputField::Duration => "duration",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TrackerError {
    #[error("expected {expected} comma-separated fields, got {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("invalid number of steps: {0}")]
    InvalidSteps(String),
    #[error("invalid duration: {0}")]
    InvalidDuration(String),
    #[error("{field} must be greater than zero")]
    InvalidInput { field: InputField },
    #[error("unknown training type: {0}")]
    UnknownActivity(String),
    #[error("configuration error: {0}")]
    Config(String),
}

pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_names_the_field() {
        let err = TrackerError::InvalidInput {
            field: InputField::Weight,
        };
        assert_eq!(err.to_string(), "weight must be greater than zero");
    }

    #[test]
    fn field_count_message() {
        let err = TrackerError::FieldCount {
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "expected 3 comma-separated fields, got 2"
        );
    }
}
