//! Error types for the solr-message library.
//!
//! All failures surface as a [`MessageError`]. Building a message is a single
//! pass: any error discards the partial result and is returned to the caller
//! unchanged, without protocol-specific wrapping.
//!
//! # Examples
//!
//! ```
//! use solr_message::error::{MessageError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MessageError::malformed_input("nested object in field 'title'"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for message construction.
///
/// It uses the `thiserror` crate for the `Error` implementation and provides
/// constructor helpers for the string-carrying variants.
#[derive(Error, Debug)]
pub enum MessageError {
    /// I/O errors raised by the XML writer or by file-backed converters
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// XML construction or rendering errors
    #[error("XML error: {0}")]
    Xml(String),

    /// Input that cannot be turned into a message (non-scalar values, non-map documents)
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// JSON parsing errors for raw document input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with MessageError.
pub type Result<T> = std::result::Result<T, MessageError>;

impl MessageError {
    /// Create a new XML error.
    pub fn xml<S: Into<String>>(msg: S) -> Self {
        MessageError::Xml(msg.into())
    }

    /// Create a new malformed input error.
    pub fn malformed_input<S: Into<String>>(msg: S) -> Self {
        MessageError::MalformedInput(msg.into())
    }
}

impl From<quick_xml::Error> for MessageError {
    fn from(err: quick_xml::Error) -> Self {
        MessageError::Xml(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for MessageError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        MessageError::Xml(format!("rendered message is not UTF-8: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = MessageError::xml("unbalanced element");
        assert_eq!(error.to_string(), "XML error: unbalanced element");

        let error = MessageError::malformed_input("nested array");
        assert_eq!(error.to_string(), "Malformed input: nested array");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let message_error = MessageError::from(io_error);

        match message_error {
            MessageError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let message_error = MessageError::from(json_error);
        assert!(matches!(message_error, MessageError::Json(_)));
    }
}
