//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for fore:
//! - Configuration management ([`CoreConfig`](config::CoreConfig))
//! - Logging and tracing infrastructure
//!
//! ## Overview
//!
//! This crate wires the bridge adapters (logger, clock) together with the
//! `WorkMode` dispatcher from `core-async`. Apps build one [`CoreConfig`]
//! at startup, switching to [`WorkMode::Synchronous`](core_async::WorkMode)
//! in tests, and hand out the logger, clock and dispatcher from there.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{CoreConfig, CoreConfigBuilder};
pub use error::{Error, Result};
