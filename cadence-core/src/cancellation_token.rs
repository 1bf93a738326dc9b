// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellation token for scheduled callbacks.
//!
//! A scheduled debounce callback, a throttle cooldown and an interval all park
//! on a timer. The token lets the owner of that work wake it early and tell it
//! to exit without running: the parked task races its timer against
//! [`CancellationToken::run_until_cancelled`].

use event_listener::{Event, EventListener};
use futures::future::{select, Either};
use std::fmt;
use std::future::Future;
use std::pin::{pin, Pin};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

/// Cloneable handle to a shared cancellation flag.
///
/// # Example
///
/// ```
/// use cadence_core::CancellationToken;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let token = CancellationToken::new();
/// let worker = token.clone();
///
/// let handle = tokio::spawn(async move {
///     worker
///         .run_until_cancelled(tokio::time::sleep(Duration::from_secs(60)))
///         .await
/// });
///
/// token.cancel();
/// assert_eq!(handle.await.ok(), Some(None));
/// # }
/// ```
#[derive(Clone)]
pub struct CancellationToken {
    shared: Arc<Shared>,
}

struct Shared {
    flag: AtomicBool,
    wakeup: Event,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                flag: AtomicBool::new(false),
                wakeup: Event::new(),
            }),
        }
    }

    /// Mark the token cancelled and wake every waiter. Idempotent.
    pub fn cancel(&self) {
        if self.shared.flag.swap(true, Ordering::AcqRel) {
            return;
        }
        self.shared.wakeup.notify(usize::MAX);
    }

    pub fn is_cancelled(&self) -> bool {
        self.shared.flag.load(Ordering::Acquire)
    }

    /// Future resolving once the token is cancelled.
    ///
    /// Owns a clone of the token, so it can be moved into a spawned task.
    pub fn cancelled(&self) -> Cancelled {
        Cancelled {
            token: self.clone(),
            listener: None,
        }
    }

    /// Drive `work` unless the token is cancelled first.
    ///
    /// Returns `None` when cancelled. When both are ready on the same poll,
    /// `work` wins, so an expired timer still reports its output.
    pub async fn run_until_cancelled<F>(&self, work: F) -> Option<F::Output>
    where
        F: Future,
    {
        let work = pin!(work);
        match select(work, self.cancelled()).await {
            Either::Left((output, _)) => Some(output),
            Either::Right(((), _)) => None,
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancellationToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Future returned by [`CancellationToken::cancelled`].
#[derive(Debug)]
pub struct Cancelled {
    token: CancellationToken,
    listener: Option<EventListener>,
}

impl Future for Cancelled {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();
        loop {
            if this.token.is_cancelled() {
                return Poll::Ready(());
            }

            match this.listener.as_mut() {
                // Registered before the flag is re-checked, so a cancel in between is seen
                None => this.listener = Some(this.token.shared.wakeup.listen()),
                Some(listener) => {
                    if Pin::new(listener).poll(cx).is_pending() {
                        return Poll::Pending;
                    }
                    this.listener = None;
                }
            }
        }
    }
}
