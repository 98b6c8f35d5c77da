//! # UI Helpers
//!
//! Small state helpers called from a view's sync routine.
//!
//! - [`SyncTrigger`] fires a one-off action the first time a threshold is
//!   reached, and re-arms according to its [`ResetRule`]

pub mod trigger;

pub use trigger::{ResetRule, SyncTrigger};
