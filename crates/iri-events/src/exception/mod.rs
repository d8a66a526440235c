//! # Base Exception
//!
//! Defines [`Exception`], the general failure value every class-specific
//! failure in this library is rendered through, and the [`here!`](crate::here)
//! macro used to capture the diagnostic context of a call site.
//!
//! An exception is built from a diagnostic context and a message and can be
//! extended with [`Exception::append`]. Its rendered text always starts with
//! the general marker:
//!
//! ```text
//! [Exception caught] - <location>
//! <message>
//! ```
use thiserror::Error;

/// General marker placed in front of every rendered exception
pub const EXCEPTION_MARKER: &str = "[Exception caught] - ";

/// Base failure value carrying a diagnostic context and a message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{}\n{}", EXCEPTION_MARKER, .location, .message)]
pub struct Exception {
    /// Call site that raised the exception (see [`here!`](crate::here))
    location: String,
    /// Class-specific part of the message, extended by `append`
    message: String,
}

impl Exception {
    /// Create a new exception from a diagnostic context and a message
    pub fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Append text to the end of the message
    pub fn append(&mut self, text: &str) {
        self.message.push_str(text);
    }

    /// Builder form of [`Exception::append`]
    pub fn with(mut self, text: &str) -> Self {
        self.append(text);
        self
    }

    /// Get the diagnostic context
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Get the message, without the general marker and location
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Full rendered text, identical to the `Display` output
    pub fn what(&self) -> String {
        self.to_string()
    }
}

/// Capture the diagnostic context of the call site.
///
/// Expands to a `String` of the form `module::path:file.rs:line`.
#[macro_export]
macro_rules! here {
    () => {
        ::std::format!(
            "{}:{}:{}",
            ::std::module_path!(),
            ::std::file!(),
            ::std::line!()
        )
    };
}

#[cfg(test)]
mod tests;
