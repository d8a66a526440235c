//! # Crate Errors
//!
//! Defines [`Error`], the top-level enum wrapping the failures of every
//! module in this crate, and the [`Result`] shorthand.
use std::result::Result as StdResult;

use crate::config::error::ConfigError;
use crate::event::EventError;
use crate::exception::Exception;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// Failure raised by an event object, the event server, or a timeout
    #[error("{0}")]
    Event(#[from] EventError),

    /// Failure already rendered into a base exception
    #[error("{0}")]
    Exception(#[from] Exception),

    /// Report configuration could not be loaded or saved
    #[error("Report configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

impl Error {
    /// Whether this error is the expected event timeout signal
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Event(err) => err.is_timeout(),
            _ => false,
        }
    }
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_error_converts_with_question_mark() {
        fn fails() -> Result<()> {
            let checked: std::result::Result<(), EventError> =
                Err(EventError::event("loc", "bad state", "ev1"));
            checked?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, Error::Event(_)));
        assert_eq!(
            err.to_string(),
            "[Exception caught] - loc\n[CEvent class] - bad state - ev1"
        );
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_timeout_is_detected_through_crate_error() {
        let err: Error = EventError::timeout("ev2").into();
        assert!(err.is_timeout());

        let other: Error = "plain".into();
        assert!(!other.is_timeout());
        assert_eq!(other.to_string(), "Error: plain");
    }

    #[test]
    fn test_exception_display_is_transparent() {
        let err: Error = Exception::new("loc", "msg").into();
        assert_eq!(err.to_string(), "[Exception caught] - loc\nmsg");
    }

    #[test]
    fn test_config_error_display() {
        let err: Error = ConfigError::UnsupportedFormat("ini".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Report configuration error: Unsupported configuration format: ini"
        );
    }
}
