//! Runtime builders for the execution contexts.
//!
//! Downstream crates never need to depend on Tokio directly; the dispatcher
//! owns every runtime built here.

use std::io;

pub use tokio::runtime::{Builder, Handle, Runtime};

/// Runtime that only makes progress while a caller blocks on it.
pub fn current_thread() -> io::Result<Runtime> {
    Builder::new_current_thread().enable_all().build()
}

/// Multi-threaded runtime whose workers are named `name`.
pub fn worker_pool(name: &str, worker_threads: usize) -> io::Result<Runtime> {
    Builder::new_multi_thread()
        .worker_threads(worker_threads.max(1))
        .thread_name(name)
        .enable_all()
        .build()
}

/// Number of threads the platform can run in parallel, at least one.
pub fn available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|threads| threads.get())
        .unwrap_or(1)
}
