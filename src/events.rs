//! Event System
//!
//! Diagnostic events emitted while loading and interacting with the dashboard

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// Background task running the three provider calls.
    Loader,
    /// Controller applying or discarding load outcomes.
    Controller,
    /// Keyboard-driven actions (range selection, export).
    Interface,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    StateChange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn loader(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Loader, msg, event_type, log_level)
    }

    pub fn controller(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Controller, msg, event_type, log_level)
    }

    pub fn interface(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Interface, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        if self.event_type == EventType::Error {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_always_display() {
        let event = Event::controller(
            "Error loading dashboard data".to_string(),
            EventType::Error,
            LogLevel::Error,
        );
        assert!(event.should_display());
    }

    #[test]
    fn test_display_format() {
        let mut event = Event::loader(
            "Loading Last 7 days".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        );
        event.timestamp = "2024-01-01 10:00:00".to_string();
        assert_eq!(
            event.to_string(),
            "Refresh [2024-01-01 10:00:00] Loading Last 7 days"
        );
    }
}
