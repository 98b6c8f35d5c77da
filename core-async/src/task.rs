//! Handles for work started by a [`Dispatcher`](crate::Dispatcher).
//!
//! Both handles have two shapes. Work started in synchronous mode has already
//! finished by the time the handle exists; work started in asynchronous mode
//! is backed by a Tokio `JoinHandle`.

use futures::FutureExt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

pub use tokio::task::{JoinError, JoinHandle};

/// Result type for task operations.
pub type Result<T> = std::result::Result<T, JoinError>;

/// Handle to fire-and-forget work.
#[derive(Debug)]
pub struct Job {
    handle: Option<JoinHandle<()>>,
}

impl Job {
    pub(crate) fn completed() -> Self {
        Self { handle: None }
    }

    pub(crate) fn running(handle: JoinHandle<()>) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Cancels the work if it has not finished yet.
    pub fn abort(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }

    /// Waits for the work to finish.
    pub async fn join(self) -> Result<()> {
        match self.handle {
            Some(handle) => handle.await,
            None => Ok(()),
        }
    }
}

/// Handle to work that produces a value.
///
/// Awaiting it yields the value, or the [`JoinError`] if the work panicked or
/// was aborted.
#[derive(Debug)]
pub struct Deferred<T> {
    state: DeferredState<T>,
}

#[derive(Debug)]
enum DeferredState<T> {
    Ready(Option<T>),
    Running(JoinHandle<T>),
}

impl<T> Deferred<T> {
    pub(crate) fn ready(value: T) -> Self {
        Self {
            state: DeferredState::Ready(Some(value)),
        }
    }

    pub(crate) fn running(handle: JoinHandle<T>) -> Self {
        Self {
            state: DeferredState::Running(handle),
        }
    }

    pub fn is_completed(&self) -> bool {
        match &self.state {
            DeferredState::Ready(_) => true,
            DeferredState::Running(handle) => handle.is_finished(),
        }
    }

    /// Cancels the work if it has not finished yet.
    pub fn abort(&self) {
        if let DeferredState::Running(handle) = &self.state {
            handle.abort();
        }
    }
}

// The value is only ever moved out, never pinned.
impl<T> Unpin for Deferred<T> {}

impl<T> Future for Deferred<T> {
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().state {
            DeferredState::Ready(value) => match value.take() {
                Some(value) => Poll::Ready(Ok(value)),
                None => panic!("Deferred polled after completion"),
            },
            DeferredState::Running(handle) => handle.poll_unpin(cx),
        }
    }
}
