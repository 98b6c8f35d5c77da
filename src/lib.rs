//! Workspace placeholder crate.
//!
//! This crate exposes feature flags that map to the individual workspace
//! crates (`core-text`, `core-ui`, `core-async`, `core-runtime`, and the
//! bridge crates). Host applications can depend on `fore-workspace` and enable
//! the documented features without needing to wire each crate individually.
//!
//! - `text`: the monospace line wrapper and text padder
//! - `ui`: the [`SyncTrigger`](core_ui::SyncTrigger) latch
//! - `runtime`: configuration, logging, clock and the `WorkMode` dispatcher
//! - `desktop-shims` (default): desktop logger adapters injected as defaults

#[cfg(feature = "text")]
pub use core_text as text;

#[cfg(feature = "ui")]
pub use core_ui as ui;

#[cfg(feature = "runtime")]
pub use bridge_traits as bridge;

#[cfg(feature = "runtime")]
pub use core_async as dispatch;

#[cfg(feature = "runtime")]
pub use core_runtime as runtime;

#[cfg(feature = "desktop-shims")]
pub use bridge_desktop as desktop;
