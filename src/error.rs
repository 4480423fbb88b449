//! Error types for the Tessera library.
//!
//! All failures are represented by the [`TesseraError`] enum. In-memory
//! index operations are total and never fail; only file I/O and malformed
//! persisted input produce errors.
//!
//! # Examples
//!
//! ```
//! use tessera::error::{Result, TesseraError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TesseraError::parse("Invalid input"))
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

/// The main error type for Tessera operations.
#[derive(Error, Debug)]
pub enum TesseraError {
    /// I/O errors (lexicon save/load, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed persisted lexicon input
    #[error("Parse error: {0}")]
    Parse(String),

    /// Analysis-related errors (normalization, stemming, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Lexicon-related errors
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TesseraError.
pub type Result<T> = std::result::Result<T, TesseraError>;

impl TesseraError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        TesseraError::Parse(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TesseraError::Analysis(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        TesseraError::Lexicon(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TesseraError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TesseraError::parse("Test parse error");
        assert_eq!(error.to_string(), "Parse error: Test parse error");

        let error = TesseraError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = TesseraError::lexicon("Test lexicon error");
        assert_eq!(error.to_string(), "Lexicon error: Test lexicon error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let tessera_error = TesseraError::from(io_error);

        match tessera_error {
            TesseraError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
