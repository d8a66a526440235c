//! # IRI Events
//!
//! Failure values for the event and event server utilities.
//!
//! An [`EventError`] keeps the call site, the message and the identifier of
//! the event that failed, tagged with the class of component that raised it.
//! It renders through the base [`Exception`]:
//!
//! ```
//! use iri_events::EventError;
//!
//! let err = EventError::event("foo():file.cpp:10", "bad state", "ev1");
//! assert_eq!(
//!     err.to_string(),
//!     "[Exception caught] - foo():file.cpp:10\n[CEvent class] - bad state - ev1"
//! );
//!
//! let timeout = EventError::timeout("ev2");
//! assert!(timeout.is_timeout());
//! ```
pub mod config;
pub mod error;
pub mod event;
pub mod exception;
pub mod logging;
pub mod report;

// Re-export key public types for easier use by dependent crates
pub use config::{ConfigError, ConfigFormat, ReportConfig};
pub use error::{Error, Result};
pub use event::{EventError, EventErrorKind, EventId};
pub use exception::Exception;
pub use report::Reporter;
