//! # Text Utilities
//!
//! Left-to-right text helpers for monospaced output.
//!
//! ## Overview
//!
//! - [`wrap`](wrap::wrap) breaks text into lines that fit a character budget,
//!   preferring to break between words and honouring explicit `'\n'` breaks
//! - [`pad_text`](pad::pad_text) pads text to a fixed width on either side
//!
//! Widths are counted in `char`s, so these helpers assume every character
//! occupies a single monospace cell.
//!
//! ```
//! use core_text::wrap;
//!
//! let lines = wrap("hello world", 5).unwrap();
//! assert_eq!(lines, vec!["hello", "world"]);
//! ```

pub mod error;
pub mod pad;
pub mod wrap;

pub use error::{Result, TextError};
pub use pad::{pad_text, Pad};
pub use wrap::wrap;
