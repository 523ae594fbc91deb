//! Error types for the Yomigana library.
//!
//! All errors are represented by the [`YomiganaError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use yomigana::error::{YomiganaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(YomiganaError::malformed_node("ねこ"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Yomigana operations.
///
/// This enum represents all possible errors that can occur in the Yomigana
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum YomiganaError {
    /// I/O errors (pipe writes/reads to the analyzer process, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The external analyzer process could not be started.
    #[error("Analyzer unavailable: {0}")]
    AnalyzerUnavailable(String),

    /// An analyzer output node did not parse as `surface[reading]`.
    #[error("Malformed analyzer node: {0:?}")]
    MalformedNode(String),

    /// A reading could not be aligned against its surface form.
    #[error("Alignment error: {0}")]
    Alignment(String),

    /// JSON serialization/deserialization errors (config files, CLI output)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with YomiganaError.
pub type Result<T> = std::result::Result<T, YomiganaError>;

impl YomiganaError {
    /// Create a new analyzer-unavailable error.
    pub fn analyzer_unavailable<S: Into<String>>(msg: S) -> Self {
        YomiganaError::AnalyzerUnavailable(msg.into())
    }

    /// Create a new malformed-node error carrying the offending node text.
    pub fn malformed_node<S: Into<String>>(node: S) -> Self {
        YomiganaError::MalformedNode(node.into())
    }

    /// Create a new alignment error.
    pub fn alignment<S: Into<String>>(msg: S) -> Self {
        YomiganaError::Alignment(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        YomiganaError::Other(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        YomiganaError::Other(format!("Invalid configuration: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = YomiganaError::analyzer_unavailable("mecab not found");
        assert_eq!(error.to_string(), "Analyzer unavailable: mecab not found");

        let error = YomiganaError::malformed_node("ねこ");
        assert_eq!(error.to_string(), "Malformed analyzer node: \"ねこ\"");

        let error = YomiganaError::alignment("reading too short");
        assert_eq!(error.to_string(), "Alignment error: reading too short");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let yomigana_error = YomiganaError::from(io_error);

        match yomigana_error {
            YomiganaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
