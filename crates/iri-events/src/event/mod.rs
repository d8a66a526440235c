//! # Event Failures
//!
//! Failure values raised by the event and event server utilities.
//!
//! Every failure is an [`EventError`] tagged with an [`EventErrorKind`]:
//! a failure of a single event object, a failure of the event server that
//! manages named events, or the timeout signal raised when an awaited event
//! does not fire in time. The timeout is not a bug; callers are expected to
//! branch on [`EventError::is_timeout`] instead of parsing the message.
pub mod error;

use std::fmt;

/// Type for event identifiers
pub type EventId = String;

/// Class of component that raised an event failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventErrorKind {
    /// A single event object failed
    Event,
    /// The event server managing named events failed
    EventServer,
    /// The awaited event was not activated in time
    Timeout,
}

impl EventErrorKind {
    /// Class identifying tag placed in front of the message
    pub fn tag(&self) -> &'static str {
        match self {
            EventErrorKind::Event => "[CEvent class]",
            EventErrorKind::EventServer => "[CEventServer class]",
            EventErrorKind::Timeout => "[Timeout]",
        }
    }

    /// Whether this kind is the expected timeout signal rather than an error
    pub fn is_timeout(&self) -> bool {
        matches!(self, EventErrorKind::Timeout)
    }
}

impl fmt::Display for EventErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventErrorKind::Event => "event",
            EventErrorKind::EventServer => "event server",
            EventErrorKind::Timeout => "timeout",
        };
        f.write_str(name)
    }
}

/// Re-export important types
pub use error::EventError;

// Test module declaration
#[cfg(test)]
mod tests;
