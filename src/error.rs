//! Error types for the harness.
//!
//! Translation units have no error path; everything here concerns selecting
//! operations, shaping their inputs, reading configuration and writing reports.

use thiserror::Error;

/// Errors that can occur while driving translation units.
#[derive(Debug, Error)]
pub enum Error {
    /// No translation unit with this name exists in the catalog.
    #[error("unknown operation `{name}` (run `neonrvv list` for the catalog)")]
    UnknownOperation { name: String },

    /// An input row does not have the lane count of its vector shape.
    #[error("{operation}: input {input} has {found} lanes, expected {expected}")]
    LaneCount {
        operation: String,
        input: usize,
        expected: usize,
        found: usize,
    },

    /// Inputs do not match the operation's signature.
    #[error("{operation}: {message}")]
    Shape { operation: String, message: String },

    /// The harness configuration is invalid or unreadable.
    #[error("invalid configuration: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Creates an unknown-operation error.
pub fn unknown_operation(name: impl Into<String>) -> Error {
    Error::UnknownOperation { name: name.into() }
}

/// Creates a shape error.
pub fn shape_error(operation: impl Into<String>, message: impl Into<String>) -> Error {
    Error::Shape {
        operation: operation.into(),
        message: message.into(),
    }
}

/// Creates a configuration error.
pub fn config_error(message: impl Into<String>) -> Error {
    Error::Config {
        message: message.into(),
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        config_error(err.to_string())
    }
}
