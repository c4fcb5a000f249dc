use std::fmt;

use serde::{Serialize, Serializer};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const BAD_INPUT_MESSAGE: &str = "This is not a valid input";
pub const PATTERN_MESSAGE: &str = "This time is invalid, enter a correct time: HH:MM(:SS)";

/// Outcome of the last validation pass.
///
/// Hosts read it as `bool | string`: anything but [`ErrorStatus::Invalid`]
/// serializes to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ErrorStatus {
    #[default]
    Unvalidated,
    Valid,
    Invalid(String),
}

impl ErrorStatus {
    pub fn invalid(message: impl Into<String>) -> Self {
        ErrorStatus::Invalid(message.into())
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorStatus::Invalid(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, ErrorStatus::Invalid(_))
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorStatus::Unvalidated => f.write_str("unvalidated"),
            ErrorStatus::Valid => f.write_str("valid"),
            ErrorStatus::Invalid(message) => f.write_str(message),
        }
    }
}

impl Serialize for ErrorStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ErrorStatus::Invalid(message) => serializer.serialize_str(message),
            _ => serializer.serialize_bool(false),
        }
    }
}

/// Raised when typed text cannot be turned into seconds since midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionError {
    pub input: String,
    pub message: String,
}

impl ExtractionError {
    pub fn new(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': {}", self.input, self.message)
    }
}

impl std::error::Error for ExtractionError {}
