//! # Host Bridge Traits
//!
//! Platform abstraction traits that each host platform implements.
//!
//! ## Overview
//!
//! This crate defines the contract between the core library and
//! platform-specific adapters. Each trait represents a capability the core
//! needs but that is provided differently per platform.
//!
//! ## Traits
//!
//! - [`Logger`](logging::Logger) - Tagged, levelled logging forwarded to the host
//! - [`Clock`](time::Clock) - Time source for deterministic testing
//!
//! Desktop adapters live in `bridge-desktop`.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so a single adapter can be shared
//! behind an `Arc` by every part of the core.

pub mod error;
pub mod logging;
pub mod time;

pub use error::BridgeError;

// Re-export commonly used types
pub use logging::{LogLevel, Logger, SilentLogger};
pub use time::{Clock, FixedClock, SystemClock};
