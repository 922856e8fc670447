//! Error types for the notification loop.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sunclock_solar::SolarError;

/// Errors from the window tracker, location sources and message sinks.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WatchError {
    /// Error from the solar computation.
    Solar(SolarError),
    /// Location fix could not be obtained.
    Location(String),
    /// Message could not be delivered.
    Sink(String),
    /// I/O error.
    Io(String),
}

impl Display for WatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solar(e) => write!(f, "solar error: {e}"),
            Self::Location(msg) => write!(f, "location error: {msg}"),
            Self::Sink(msg) => write!(f, "delivery error: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for WatchError {}

impl From<SolarError> for WatchError {
    fn from(e: SolarError) -> Self {
        Self::Solar(e)
    }
}

impl From<std::io::Error> for WatchError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for WatchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Sink(e.to_string())
    }
}
