//! `WorkMode`-switchable dispatch onto named execution contexts.
//!
//! Pinning down the order of events in tests is much easier when nothing runs
//! in the background. Rather than faking executors, every call site goes
//! through a [`Dispatcher`] and the app picks the mode once:
//!
//! - [`WorkMode::Asynchronous`] gives the behaviour you would expect: work is
//!   spawned onto the requested [`ExecutionContext`]
//! - [`WorkMode::Synchronous`] runs everything sequentially, blocking, on
//!   whatever thread the caller is on
//!
//! There is no virtual time in synchronous mode: a future that sleeps for ten
//! seconds blocks the caller for ten seconds.
//!
//! # Examples
//!
//! ```rust
//! use core_async::{Dispatcher, ExecutionContext, WorkMode};
//!
//! let dispatcher = Dispatcher::new(WorkMode::Asynchronous).unwrap();
//!
//! let name = dispatcher.spawn(ExecutionContext::Io, async {
//!     std::thread::current().name().map(str::to_owned)
//! });
//!
//! let name = futures::executor::block_on(name).unwrap();
//! assert_eq!(name.as_deref(), Some("fore-io"));
//! ```

use std::fmt;
use std::future::Future;
use std::io;

use crate::runtime::{self, Handle, Runtime};
use crate::task::{Deferred, Job, Result};

/// How dispatched work is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorkMode {
    /// Run to completion on the calling thread before returning.
    Synchronous,
    /// Run on the requested execution context.
    #[default]
    Asynchronous,
}

/// Named execution contexts available in asynchronous mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionContext {
    /// One worker thread: work runs serially, in submission order.
    Main,
    /// A wider pool for work that spends its time waiting on I/O.
    Io,
    /// A pool sized to the number of CPUs, for computation.
    Default,
}

impl ExecutionContext {
    /// Name given to the worker threads of this context.
    pub fn thread_name(&self) -> &'static str {
        match self {
            ExecutionContext::Main => "fore-main",
            ExecutionContext::Io => "fore-io",
            ExecutionContext::Default => "fore-default",
        }
    }

    fn worker_threads(&self) -> usize {
        let parallelism = runtime::available_parallelism();
        match self {
            ExecutionContext::Main => 1,
            ExecutionContext::Io => (parallelism * 2).clamp(MIN_IO_THREADS, MAX_IO_THREADS),
            ExecutionContext::Default => parallelism,
        }
    }
}

const MIN_IO_THREADS: usize = 2;
const MAX_IO_THREADS: usize = 16;

enum Runtimes {
    Caller(Runtime),
    Contexts {
        main: Runtime,
        io: Runtime,
        default: Runtime,
    },
}

/// Runs futures either inline or on named execution contexts, depending on
/// its [`WorkMode`].
///
/// All futures must be `Send + 'static` in both modes, so switching the mode
/// never changes what compiles.
pub struct Dispatcher {
    mode: WorkMode,
    runtimes: Option<Runtimes>,
}

impl Dispatcher {
    /// Creates a dispatcher, starting the worker threads of every execution
    /// context in asynchronous mode.
    ///
    /// # Errors
    ///
    /// Returns an error if a runtime could not be built, usually because the
    /// platform refused to spawn threads.
    pub fn new(mode: WorkMode) -> io::Result<Self> {
        let runtimes = match mode {
            WorkMode::Synchronous => Runtimes::Caller(runtime::current_thread()?),
            WorkMode::Asynchronous => Runtimes::Contexts {
                main: build_context(ExecutionContext::Main)?,
                io: build_context(ExecutionContext::Io)?,
                default: build_context(ExecutionContext::Default)?,
            },
        };

        Ok(Self {
            mode,
            runtimes: Some(runtimes),
        })
    }

    pub fn mode(&self) -> WorkMode {
        self.mode
    }

    /// Starts `future` without waiting for its result.
    ///
    /// # Panics
    ///
    /// In synchronous mode, panics when called from within an async runtime,
    /// since blocking there would stall the runtime's own thread. A panic
    /// inside `future` propagates to the caller.
    pub fn launch<F>(&self, context: ExecutionContext, future: F) -> Job
    where
        F: Future<Output = ()> + Send + 'static,
    {
        match self.runtimes() {
            Runtimes::Caller(runtime) => {
                runtime.block_on(future);
                Job::completed()
            }
            contexts => Job::running(Self::handle_of(contexts, context).spawn(future)),
        }
    }

    /// Starts `future` and returns a handle to its eventual value.
    ///
    /// # Panics
    ///
    /// Same as [`launch`](Self::launch).
    pub fn spawn<F>(&self, context: ExecutionContext, future: F) -> Deferred<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        match self.runtimes() {
            Runtimes::Caller(runtime) => Deferred::ready(runtime.block_on(future)),
            contexts => Deferred::running(Self::handle_of(contexts, context).spawn(future)),
        }
    }

    /// Runs `future` on `context` and waits for its result.
    ///
    /// In synchronous mode the future is awaited inline, on the caller's own
    /// task, so this is safe to use from within any async runtime.
    pub async fn with_context<F>(&self, context: ExecutionContext, future: F) -> Result<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        match self.runtimes() {
            Runtimes::Caller(_) => Ok(future.await),
            contexts => Self::handle_of(contexts, context).spawn(future).await,
        }
    }

    /// Handle of the runtime that serves `context`.
    ///
    /// In synchronous mode every context maps to the caller-side runtime.
    pub fn handle(&self, context: ExecutionContext) -> Handle {
        Self::handle_of(self.runtimes(), context).clone()
    }

    fn runtimes(&self) -> &Runtimes {
        match &self.runtimes {
            Some(runtimes) => runtimes,
            // Only taken in `drop`
            None => unreachable!("dispatcher used after shutdown"),
        }
    }

    fn handle_of(runtimes: &Runtimes, context: ExecutionContext) -> &Handle {
        match runtimes {
            Runtimes::Caller(runtime) => runtime.handle(),
            Runtimes::Contexts { main, io, default } => match context {
                ExecutionContext::Main => main.handle(),
                ExecutionContext::Io => io.handle(),
                ExecutionContext::Default => default.handle(),
            },
        }
    }
}

fn build_context(context: ExecutionContext) -> io::Result<Runtime> {
    runtime::worker_pool(context.thread_name(), context.worker_threads())
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        // Dropping a runtime blocks, which is not allowed inside another runtime
        match self.runtimes.take() {
            Some(Runtimes::Caller(runtime)) => runtime.shutdown_background(),
            Some(Runtimes::Contexts { main, io, default }) => {
                main.shutdown_background();
                io.shutdown_background();
                default.shutdown_background();
            }
            None => {}
        }
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
