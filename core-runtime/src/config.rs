//! # Core Configuration Module
//!
//! Provides configuration management for fore.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a `CoreConfig`
//! instance that holds the bridges and settings shared by the rest of the
//! library. It enforces fail-fast validation so a missing bridge is reported
//! at startup rather than at first use.
//!
//! ## Required Dependencies
//!
//! - `Logger` - Where library and app log lines go
//!
//! ## Optional Dependencies (with defaults)
//!
//! - `Clock` - Time source (default: [`SystemClock`])
//! - `WorkMode` - Dispatch mode (default: asynchronous)
//!
//! When the `desktop-shims` feature is enabled, a `ConsoleLogger` is injected
//! automatically if no logger is provided.
//!
//! ## Usage
//!
//! ```
//! use bridge_traits::SilentLogger;
//! use core_async::WorkMode;
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .work_mode(WorkMode::Synchronous)
//!     .logger(Arc::new(SilentLogger))
//!     .build()
//!     .expect("Failed to build config");
//!
//! config.logger.info("Startup", "configured");
//! ```

use crate::error::{Error, Result};
use crate::logging::LoggingConfig;
use bridge_traits::{Clock, Logger, SystemClock};
use core_async::{Dispatcher, WorkMode};
use std::sync::Arc;

/// Core configuration for fore.
///
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// Whether dispatched work runs inline or on execution contexts
    pub work_mode: WorkMode,

    /// Logger for library and app output (required)
    pub logger: Arc<dyn Logger>,

    /// Time source
    pub clock: Arc<dyn Clock>,

    /// Tracing subscriber settings, applied by [`init_logging`](crate::logging::init_logging)
    pub logging: LoggingConfig,

    /// Wrap width for the default console logger, if any
    pub wrap_width: Option<usize>,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("work_mode", &self.work_mode)
            .field("logger", &"Logger { ... }")
            .field("clock", &"Clock { ... }")
            .field("logging", &self.logging)
            .field("wrap_width", &self.wrap_width)
            .finish()
    }
}

impl CoreConfig {
    /// Creates a new builder for constructing a `CoreConfig`.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.wrap_width == Some(0) {
            return Err(Error::Config(
                "Wrap width must be greater than 0 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Builds a dispatcher running in the configured [`WorkMode`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`] if the execution contexts could not be
    /// started.
    pub fn dispatcher(&self) -> Result<Dispatcher> {
        let dispatcher = Dispatcher::new(self.work_mode)?;
        tracing::debug!(mode = ?self.work_mode, "Dispatcher started");
        Ok(dispatcher)
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn logger_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "Logger".to_string(),
        message: "Logger implementation is required for library output. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use the default ConsoleLogger. \
                 Tests: inject bridge_traits::SilentLogger or a recording logger."
            .to_string(),
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_logger(
    logging: &LoggingConfig,
    wrap_width: Option<usize>,
) -> Result<Arc<dyn Logger>> {
    use bridge_desktop::ConsoleLogger;

    let mut logger = ConsoleLogger::new().with_min_level(logging.level);
    if let Some(width) = wrap_width {
        logger = logger.with_wrap_width(width);
    }

    let logger: Arc<dyn Logger> = Arc::new(logger);
    Ok(logger)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_logger(
    _logging: &LoggingConfig,
    _wrap_width: Option<usize>,
) -> Result<Arc<dyn Logger>> {
    Err(logger_missing_error())
}

/// Builder for constructing [`CoreConfig`] instances.
///
/// Call [`build()`](CoreConfigBuilder::build) once every option is set. The
/// builder validates required dependencies and provides helpful error
/// messages.
#[derive(Default)]
pub struct CoreConfigBuilder {
    work_mode: Option<WorkMode>,
    logger: Option<Arc<dyn Logger>>,
    clock: Option<Arc<dyn Clock>>,
    logging: Option<LoggingConfig>,
    wrap_width: Option<usize>,
}

impl CoreConfigBuilder {
    /// Sets the dispatch mode. Tests usually want [`WorkMode::Synchronous`].
    pub fn work_mode(mut self, mode: WorkMode) -> Self {
        self.work_mode = Some(mode);
        self
    }

    /// Sets the logger.
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Sets the time source.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Sets the tracing subscriber settings.
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Wraps messages of the default console logger to `width` characters.
    ///
    /// Has no effect on an explicitly provided logger.
    pub fn wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = Some(width);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the wrap width is zero
    /// - [`Error::CapabilityMissing`] if no logger was provided and the
    ///   `desktop-shims` feature is disabled
    pub fn build(self) -> Result<CoreConfig> {
        let logging = self.logging.unwrap_or_default();

        if self.wrap_width == Some(0) {
            return Err(Error::Config(
                "Wrap width must be greater than 0 characters".to_string(),
            ));
        }

        let logger = match self.logger {
            Some(logger) => logger,
            None => provide_default_logger(&logging, self.wrap_width)?,
        };

        let config = CoreConfig {
            work_mode: self.work_mode.unwrap_or_default(),
            logger,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            logging,
            wrap_width: self.wrap_width,
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::{FixedClock, LogLevel, SilentLogger};
    use chrono::{DateTime, Utc};

    mockall::mock! {
        pub TestClock {}

        impl Clock for TestClock {
            fn now(&self) -> DateTime<Utc>;
        }
    }

    #[test]
    fn test_builder_defaults() {
        let config = CoreConfig::builder()
            .logger(Arc::new(SilentLogger))
            .build()
            .unwrap();

        assert_eq!(config.work_mode, WorkMode::Asynchronous);
        assert_eq!(config.wrap_width, None);
        assert!(config.clock.unix_timestamp() > 0);
    }

    #[test]
    fn test_builder_with_all_fields() {
        let clock = Arc::new(FixedClock::at_millis(42_000));
        let config = CoreConfig::builder()
            .work_mode(WorkMode::Synchronous)
            .logger(Arc::new(SilentLogger))
            .clock(clock)
            .logging(LoggingConfig::default().with_level(LogLevel::Debug))
            .wrap_width(72)
            .build()
            .unwrap();

        assert_eq!(config.work_mode, WorkMode::Synchronous);
        assert_eq!(config.clock.current_time_millis(), 42_000);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.wrap_width, Some(72));
    }

    #[test]
    fn test_builder_uses_injected_clock() {
        let mut clock = MockTestClock::new();
        let instant = DateTime::from_timestamp(1_000, 0).unwrap();
        clock.expect_now().times(1).return_const(instant);

        let config = CoreConfig::builder()
            .logger(Arc::new(SilentLogger))
            .clock(Arc::new(clock))
            .build()
            .unwrap();

        assert_eq!(config.clock.unix_timestamp(), 1_000);
    }

    #[test]
    fn test_builder_rejects_zero_wrap_width() {
        let result = CoreConfig::builder()
            .logger(Arc::new(SilentLogger))
            .wrap_width(0)
            .build();

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Wrap width must be greater than 0"));
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_builder_requires_logger() {
        let result = CoreConfig::builder().build();

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Logger"));
        assert!(err_msg.contains("library output"));
    }

    #[cfg(feature = "desktop-shims")]
    #[test]
    fn test_builder_injects_console_logger() {
        let result = CoreConfig::builder().wrap_width(40).build();

        assert!(result.is_ok());
    }

    #[test]
    fn test_dispatcher_follows_work_mode() {
        let config = CoreConfig::builder()
            .work_mode(WorkMode::Synchronous)
            .logger(Arc::new(SilentLogger))
            .build()
            .unwrap();

        let dispatcher = config.dispatcher().unwrap();
        assert_eq!(dispatcher.mode(), WorkMode::Synchronous);
    }

    #[test]
    fn test_debug_hides_bridges() {
        let config = CoreConfig::builder()
            .logger(Arc::new(SilentLogger))
            .build()
            .unwrap();

        let debug = format!("{:?}", config);
        assert!(debug.contains("Logger { ... }"));
        assert!(debug.contains("Asynchronous"));
    }
}
