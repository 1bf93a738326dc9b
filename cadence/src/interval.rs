// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Repeating trigger owned by the caller.
//!
//! An [`Interval`] calls a [`Callback`] with the same arguments every period
//! until it is cancelled or dropped. It is the explicit-handle replacement for
//! a fire-and-forget repeating timer, and is what drives wrappers in demos and
//! tests.

use crate::callback::Callback;
use crate::debounce::validate_wait;
use cadence_core::{ensure_runtime, CadenceTask, Result};
use cadence_runtime::runtime::Runtime;
use cadence_runtime::timer::Timer;
use cadence_runtime::DefaultRuntime;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Shortest period an interval ticks at; shorter requests are clamped.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a running repeating trigger.
///
/// # Example
///
/// ```rust
/// use cadence::{Debounced, Interval};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let debounced = Debounced::new(
///     |(a, b): (&'static str, &'static str)| println!("fn executes! args = {a}, {b}"),
///     Duration::from_millis(150),
/// );
/// // The trigger owns a handle; keep ours so the trailing call survives `cancel`
/// let trigger = Interval::start(Duration::from_millis(10), debounced.clone(), ("arg1", "arg2"));
///
/// tokio::time::sleep(Duration::from_millis(100)).await;
/// trigger.cancel();
/// tokio::time::sleep(Duration::from_millis(200)).await;
/// # }
/// ```
#[derive(Debug)]
pub struct Interval {
    period: Duration,
    ticks: Arc<AtomicU64>,
    task: CadenceTask,
}

impl Interval {
    /// Call `callback` with a clone of `args` every `period`, first after one period.
    ///
    /// Periods below [`MIN_PERIOD`] are clamped to it.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime.
    pub fn start<A, C>(period: Duration, callback: C, args: A) -> Self
    where
        A: Clone + Send + 'static,
        C: Callback<A>,
    {
        let period = if period < MIN_PERIOD {
            warn!("interval: period {:?} clamped to {:?}", period, MIN_PERIOD);
            MIN_PERIOD
        } else {
            period
        };

        let timer = <DefaultRuntime as Runtime>::Timer::default();
        let ticks = Arc::new(AtomicU64::new(0));
        let task_ticks = Arc::clone(&ticks);
        let first = timer.sleep_future(period);

        let task = CadenceTask::spawn(move |cancel| async move {
            let mut sleep = Box::pin(first);
            loop {
                if cancel.run_until_cancelled(sleep.as_mut()).await.is_none() {
                    return;
                }

                callback.invoke(args.clone());
                task_ticks.fetch_add(1, Ordering::Relaxed);

                if cancel.is_cancelled() {
                    return;
                }
                sleep.set(timer.sleep_future(period));
            }
        });

        Self {
            period,
            ticks,
            task,
        }
    }

    /// Like [`start`](Self::start), but rejects a zero period and a missing runtime.
    ///
    /// # Errors
    ///
    /// - [`CadenceError::InvalidWait`](cadence_core::CadenceError::InvalidWait) when `period` is zero
    /// - [`CadenceError::MissingRuntime`](cadence_core::CadenceError::MissingRuntime) outside of a
    ///   Tokio runtime
    pub fn try_start<A, C>(period: Duration, callback: C, args: A) -> Result<Self>
    where
        A: Clone + Send + 'static,
        C: Callback<A>,
    {
        validate_wait(period)?;
        ensure_runtime()?;
        Ok(Self::start(period, callback, args))
    }

    /// Signal the trigger to stop.
    ///
    /// Doesn't wait for a tick already in progress; on a multi-thread runtime
    /// that tick may still reach the callback after this returns.
    pub fn cancel(&self) {
        self.task.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.task.is_cancelled()
    }

    /// Number of calls made so far.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}
