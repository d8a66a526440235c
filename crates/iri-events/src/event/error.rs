//! # Event Failure Values
//!
//! Defines [`EventError`], the structured failure raised by event objects
//! and the event server.
//!
//! The fields are kept as given and only rendered when displayed. Rendering
//! goes through the base [`Exception`], so the text reads:
//!
//! ```text
//! [Exception caught] - <location>
//! [CEvent class] - <message> - <event id>
//! ```
//!
//! and for the timeout signal, which carries neither location nor message:
//!
//! ```text
//! [Exception caught] -
//! [Timeout] - <event id>
//! ```
use std::fmt;

use thiserror::Error;

use crate::event::{EventErrorKind, EventId};
use crate::exception::Exception;

const SEPARATOR: &str = " - ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct EventError {
    kind: EventErrorKind,
    location: String,
    message: Option<String>,
    event_id: EventId,
}

impl EventError {
    /// Failure attributable to a single event object.
    ///
    /// `location` should come from [`here!`](crate::here), `event_id` is the
    /// identifier used to access the event.
    pub fn event(
        location: impl Into<String>,
        message: impl Into<String>,
        event_id: impl Into<EventId>,
    ) -> Self {
        Self {
            kind: EventErrorKind::Event,
            location: location.into(),
            message: Some(message.into()),
            event_id: event_id.into(),
        }
    }

    /// Failure attributable to the event server, such as an unknown or
    /// duplicated event identifier.
    pub fn server(
        location: impl Into<String>,
        message: impl Into<String>,
        event_id: impl Into<EventId>,
    ) -> Self {
        Self {
            kind: EventErrorKind::EventServer,
            location: location.into(),
            message: Some(message.into()),
            event_id: event_id.into(),
        }
    }

    /// Signal that the event `event_id` was not activated in time.
    pub fn timeout(event_id: impl Into<EventId>) -> Self {
        Self {
            kind: EventErrorKind::Timeout,
            location: String::new(),
            message: None,
            event_id: event_id.into(),
        }
    }

    pub fn kind(&self) -> EventErrorKind {
        self.kind
    }

    /// Diagnostic context, empty for timeouts
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Free-form message, `None` for timeouts
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn is_timeout(&self) -> bool {
        self.kind.is_timeout()
    }

    /// Render this failure through the base exception.
    pub fn to_exception(&self) -> Exception {
        let mut exception = Exception::new(self.location.as_str(), self.kind.tag());
        exception.append(SEPARATOR);
        if let Some(message) = &self.message {
            exception.append(message);
            exception.append(SEPARATOR);
        }
        exception.append(&self.event_id);
        exception
    }
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_exception(), f)
    }
}

impl From<EventError> for Exception {
    fn from(err: EventError) -> Self {
        err.to_exception()
    }
}
