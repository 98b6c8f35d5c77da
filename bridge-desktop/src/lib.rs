//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! - [`ConsoleLogger`] writes compact, tag-aligned lines to stdout (or any
//!   writer), optionally wrapping long messages
//! - [`TracingLogger`] forwards every line to the `tracing` facade, so it
//!   lands in whatever subscriber the host installed
//!
//! ## Usage
//!
//! ```
//! use bridge_desktop::ConsoleLogger;
//! use bridge_traits::Logger;
//!
//! let logger = ConsoleLogger::new().with_wrap_width(60);
//! logger.info("Startup", "fore is ready");
//! ```

mod console;
mod tracing_logger;

pub use console::{ConsoleLogger, TagPadder};
pub use tracing_logger::TracingLogger;
