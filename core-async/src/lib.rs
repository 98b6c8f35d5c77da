//! Async dispatch layer for fore.
//!
//! This crate wraps the Tokio runtime so that call sites can switch between
//! two ways of running the same future with a single flag:
//!
//! - [`WorkMode::Asynchronous`]: the future runs on a named execution
//!   context ([`ExecutionContext::Main`], [`ExecutionContext::Io`] or
//!   [`ExecutionContext::Default`]), each backed by its own worker threads
//! - [`WorkMode::Synchronous`]: the future runs to completion, blocking, on
//!   the calling thread before the call returns
//!
//! Synchronous mode exists for tests: everything happens in order, on the
//! test's thread, with no need to wait for background work.
//!
//! # Modules
//!
//! - `dispatch`: [`WorkMode`], [`ExecutionContext`] and the [`Dispatcher`]
//! - `task`: [`Job`] and [`Deferred`] handles returned by the dispatcher
//! - `runtime`: runtime builders for the execution contexts
//!
//! # Examples
//!
//! ```rust
//! use core_async::{Dispatcher, ExecutionContext, WorkMode};
//!
//! let dispatcher = Dispatcher::new(WorkMode::Synchronous).unwrap();
//! let answer = dispatcher.spawn(ExecutionContext::Io, async { 42 });
//!
//! // Already computed: synchronous mode ran it before `spawn` returned
//! assert!(answer.is_completed());
//! assert_eq!(futures::executor::block_on(answer).unwrap(), 42);
//! ```

pub mod dispatch;
pub mod runtime;
pub mod task;

// Re-export commonly used types at crate root for convenience
pub use dispatch::{Dispatcher, ExecutionContext, WorkMode};
pub use task::{Deferred, Job, JoinError};
