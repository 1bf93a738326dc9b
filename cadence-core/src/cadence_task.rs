// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background task spawning with cooperative cancellation.

use crate::{CadenceError, CancellationToken, Result};
use std::future::Future;

/// Task handle that cancels its task when dropped.
///
/// `CadenceTask` spawns a future on the Tokio runtime and hands it a
/// [`CancellationToken`]. Dropping the handle, or calling [`cancel`], signals
/// the token; the task is expected to observe it and exit.
///
/// # Example
///
/// ```rust
/// use cadence_core::CadenceTask;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let task = CadenceTask::spawn(|cancel| async move {
///     tokio::select! {
///         _ = cancel.cancelled() => println!("cancelled before firing"),
///         _ = tokio::time::sleep(Duration::from_secs(1)) => println!("fired"),
///     }
/// });
///
/// // Task cancels on drop
/// drop(task);
/// # }
/// ```
///
/// [`cancel`]: CadenceTask::cancel
#[derive(Debug)]
pub struct CadenceTask {
    cancel: CancellationToken,
}

impl CadenceTask {
    /// Spawn a background task with cancellation support.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime, like `tokio::spawn`.
    /// Use [`try_spawn`](Self::try_spawn) to get an error instead.
    #[cfg(feature = "runtime-tokio")]
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        tokio::spawn(f(cancel.clone()));
        Self { cancel }
    }

    /// Spawn a background task, failing if no runtime is available.
    ///
    /// # Errors
    ///
    /// Returns [`CadenceError::MissingRuntime`] outside of a Tokio runtime.
    #[cfg(feature = "runtime-tokio")]
    pub fn try_spawn<F, Fut>(f: F) -> Result<Self>
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle =
            tokio::runtime::Handle::try_current().map_err(|_| CadenceError::MissingRuntime)?;
        let cancel = CancellationToken::new();
        handle.spawn(f(cancel.clone()));
        Ok(Self { cancel })
    }

    /// Signal the task to stop.
    ///
    /// Doesn't wait for it to complete; the task stops at its next
    /// cancellation checkpoint.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns `true` once `cancel()` was called or the handle was dropped.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for CadenceTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Check that a runtime is available to schedule deferred callbacks.
///
/// # Errors
///
/// Returns [`CadenceError::MissingRuntime`] when called outside of a Tokio runtime.
#[cfg(feature = "runtime-tokio")]
pub fn ensure_runtime() -> Result<()> {
    tokio::runtime::Handle::try_current()
        .map(|_| ())
        .map_err(|_| CadenceError::MissingRuntime)
}
