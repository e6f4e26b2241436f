//! Error types for the shim's safe layer.
//!
//! Nothing here crosses the C boundary. The `ffi` wrappers turn these into
//! log events and sentinel return values.

use thiserror::Error;

/// Result type for shim operations
pub type ShimResult<T> = Result<T, ShimError>;

/// Errors that can occur inside the shim
#[derive(Error, Debug)]
pub enum ShimError {
    /// A required pointer argument was null
    #[error("Null pointer passed for `{arg}`")]
    NullPointer { arg: &'static str },

    /// Writing to the output stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A log filter directive could not be parsed
    #[error("Invalid log filter `{directive}`: {reason}")]
    InvalidFilter { directive: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_null_pointer_display() {
        let err = ShimError::NullPointer { arg: "message" };
        assert_eq!(err.to_string(), "Null pointer passed for `message`");
    }

    #[test]
    fn test_io_error_converts() {
        let err: ShimError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, ShimError::Io(_)));
        assert_eq!(err.to_string(), "IO error: pipe closed");
    }
}
