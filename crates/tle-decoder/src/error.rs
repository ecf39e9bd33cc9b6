use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which of the two element lines an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TleLine {
    One,
    Two,
}

impl TleLine {
    /// Leading character a well-formed line carries in column 1
    pub fn expected_number(self) -> char {
        match self {
            TleLine::One => '1',
            TleLine::Two => '2',
        }
    }
}

impl fmt::Display for TleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TleLine::One => write!(f, "line 1"),
            TleLine::Two => write!(f, "line 2"),
        }
    }
}

/// A field whose text does not satisfy its numeric encoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}: {value:?}")]
pub struct NumericError {
    pub value: String,
    pub reason: &'static str,
}

impl NumericError {
    pub fn new(value: &str, reason: &'static str) -> Self {
        Self {
            value: value.to_string(),
            reason,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("{line} is malformed ({len} chars): {reason}")]
    MalformedLine {
        line: TleLine,
        len: usize,
        reason: &'static str,
    },
    #[error("invalid {field}: {source}")]
    NumericFormat {
        field: &'static str,
        #[source]
        source: NumericError,
    },
    #[error("{line} must start with '{expected}', found {found:?}")]
    LineNumber {
        line: TleLine,
        expected: char,
        found: Option<char>,
    },
    #[error("{line} checksum mismatch: expected {expected}, found {found:?}")]
    Checksum {
        line: TleLine,
        expected: u32,
        found: Option<char>,
    },
}

impl DecodeError {
    /// Name of the field that failed, for numeric errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DecodeError::NumericFormat { field, .. } => Some(*field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
