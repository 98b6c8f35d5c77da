//! Logging Abstractions
//!
//! Tagged, levelled logging that the core forwards to whatever logging
//! facility the host platform provides.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Single letter used by compact console output.
    pub fn code(&self) -> char {
        match self {
            LogLevel::Trace => 'T',
            LogLevel::Debug => 'D',
            LogLevel::Info => 'I',
            LogLevel::Warn => 'W',
            LogLevel::Error => 'E',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logger trait
///
/// Forwards tagged log lines from the core to a host logging pipeline:
/// - **Desktop**: console output or the `tracing` facade
/// - **Tests**: [`SilentLogger`] or a recording mock
///
/// Only [`log`](Logger::log) is required; the per-level helpers and the
/// error variant are provided on top of it.
///
/// Implementations must never fail the caller. Problems writing a log line
/// are the adapter's to report.
///
/// # Example
///
/// ```
/// use bridge_traits::logging::{LogLevel, Logger};
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct Recorder(Mutex<Vec<String>>);
///
/// impl Logger for Recorder {
///     fn log(&self, level: LogLevel, tag: &str, message: &str) {
///         self.0.lock().unwrap().push(format!("{} {} {}", level, tag, message));
///     }
/// }
///
/// let logger = Recorder::default();
/// logger.warn("Sync", "slow request");
/// assert_eq!(logger.0.lock().unwrap()[0], "warn Sync slow request");
/// ```
pub trait Logger: Send + Sync {
    /// Write a single log line.
    fn log(&self, level: LogLevel, tag: &str, message: &str);

    /// Write a log line followed by the error that caused it.
    fn log_with_error(
        &self,
        level: LogLevel,
        tag: &str,
        message: &str,
        error: &(dyn StdError + 'static),
    ) {
        self.log(level, tag, message);
        self.log(level, tag, &error.to_string());
    }

    fn error(&self, tag: &str, message: &str) {
        self.log(LogLevel::Error, tag, message);
    }

    fn warn(&self, tag: &str, message: &str) {
        self.log(LogLevel::Warn, tag, message);
    }

    fn info(&self, tag: &str, message: &str) {
        self.log(LogLevel::Info, tag, message);
    }

    fn debug(&self, tag: &str, message: &str) {
        self.log(LogLevel::Debug, tag, message);
    }

    fn trace(&self, tag: &str, message: &str) {
        self.log(LogLevel::Trace, tag, message);
    }
}

/// Logger that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentLogger;

impl Logger for SilentLogger {
    fn log(&self, _level: LogLevel, _tag: &str, _message: &str) {}
}
