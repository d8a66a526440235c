//! # Failure Reporting
//!
//! [`Reporter`] writes event failures to the `log` facade at the level
//! configured for their kind. Real failures of an event or of the event
//! server go out at the failure level, the timeout signal at the (usually
//! quieter) timeout level, so an expected timeout does not read like a bug
//! in the logs.
use log::Level;

use crate::config::ReportConfig;
use crate::event::EventError;

#[derive(Debug, Clone, Default)]
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Log level used for `err`
    pub fn level_for(&self, err: &EventError) -> Level {
        if err.is_timeout() {
            self.config.timeout_level()
        } else {
            self.config.failure_level()
        }
    }

    /// Log the rendered failure and return the level it was logged at.
    pub fn report(&self, err: &EventError) -> Level {
        let level = self.level_for(err);
        log::log!(target: self.config.target(), level, "{}", err);
        level
    }

    /// Report the error of `result`, if any, and hand back the value.
    pub fn report_result<T>(&self, result: Result<T, EventError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.report(&err);
                None
            }
        }
    }
}
