//! Error handling for guilded-rest-types
//!
//! This module provides the error type shared by the configuration and
//! shape-narrowing layers.

use std::fmt;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Generic/unknown error
    Unknown,
    /// Invalid argument provided
    InvalidArgument,
    /// A JSON value did not match the declared shape
    ShapeMismatch,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::InvalidArgument => "Invalid argument",
            ErrorCode::ShapeMismatch => "Shape mismatch",
        }
    }
}

/// Internal error type
#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Error {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::InvalidArgument, msg)
    }

    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::ShapeMismatch, msg)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::shape_mismatch(e.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::invalid_argument(format!("Invalid URL: {e}"))
    }
}
