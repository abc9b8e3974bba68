//! Error types shared by every drill.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("{what} is empty")]
    Empty { what: String },

    #[error("capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("{what}: expected {expected}, got {actual}")]
    Mismatch {
        what: String,
        expected: String,
        actual: String,
    },

    #[error("unknown topic '{0}'")]
    UnknownTopic(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DrillError {
    pub fn empty(what: impl Into<String>) -> Self {
        Self::Empty { what: what.into() }
    }

    pub fn capacity(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    pub fn mismatch(
        what: impl Into<String>,
        expected: impl std::fmt::Debug,
        actual: impl std::fmt::Debug,
    ) -> Self {
        Self::Mismatch {
            what: what.into(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        }
    }
}

impl From<toml::de::Error> for DrillError {
    fn from(err: toml::de::Error) -> Self {
        DrillError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for DrillError {
    fn from(err: serde_json::Error) -> Self {
        DrillError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;
