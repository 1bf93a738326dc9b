// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing debounce for callbacks.
//!
//! Each call captures its arguments, cancels the pending invocation (if any)
//! and schedules a new one `wait` later. Only the last call of a burst reaches
//! the target:
//!
//! ```text
//! calls:   a  b  c                 d
//!          |--|--|-------wait-----> c   |------wait-----> d
//! ```
//!
//! If calls keep arriving faster than `wait`, the target never fires.
//!
//! With [`Debounced::immediate`] the first call of a burst also reaches the
//! target synchronously, in addition to the trailing invocation.

use crate::callback::Callback;
use crate::DEFAULT_WAIT;
use cadence_core::{ensure_runtime, CadenceError, CadenceTask, Result};
use cadence_runtime::mutex::MutexLike;
use cadence_runtime::runtime::Runtime;
use cadence_runtime::timer::Timer;
use cadence_runtime::DefaultRuntime;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Default)]
struct PendingState {
    /// Bumped on every reschedule; a firing task whose generation is stale is a no-op
    generation: u64,
    task: Option<CadenceTask>,
}

/// Debouncing wrapper around a [`Callback`].
///
/// Holds at most one scheduled invocation at a time. Clones are handles to
/// the same wrapper and share its pending state; dropping the last handle
/// cancels the pending invocation.
///
/// Calls that schedule an invocation must happen inside a Tokio runtime.
///
/// # Example
///
/// ```rust
/// use cadence::Debounced;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let search = Debounced::new(
///     |query: String| println!("searching for {query}"),
///     Duration::from_millis(300),
/// );
///
/// search.call("r".to_string());
/// search.call("ru".to_string());
/// search.call("rust".to_string());
/// // Only "rust" is searched, 300ms after the last keystroke
/// tokio::time::sleep(Duration::from_millis(350)).await;
/// # }
/// ```
pub struct Debounced<A, C, R = DefaultRuntime>
where
    R: Runtime,
{
    inner: Arc<DebounceInner<A, C, R>>,
}

struct DebounceInner<A, C, R>
where
    R: Runtime,
{
    target: Arc<C>,
    wait: Duration,
    leading: Option<fn(&A) -> A>,
    timer: R::Timer,
    state: R::Mutex<PendingState>,
    _args: PhantomData<fn(A)>,
}

impl<A, C> Debounced<A, C, DefaultRuntime>
where
    A: Send + 'static,
    C: Callback<A>,
{
    /// Trailing debounce of `target` by `wait`.
    pub fn new(target: C, wait: Duration) -> Self {
        Self::build(target, wait, None)
    }

    /// Trailing debounce with [`DEFAULT_WAIT`].
    pub fn with_default_wait(target: C) -> Self {
        Self::new(target, DEFAULT_WAIT)
    }

    /// Like [`new`](Self::new), but validates the configuration up front.
    ///
    /// # Errors
    ///
    /// - [`CadenceError::InvalidWait`] when `wait` is zero
    /// - [`CadenceError::MissingRuntime`] when called outside of a Tokio runtime
    pub fn try_new(target: C, wait: Duration) -> Result<Self> {
        validate_wait(wait)?;
        ensure_runtime()?;
        Ok(Self::new(target, wait))
    }

    /// Debounce that also fires on the leading edge.
    ///
    /// The first call of a burst (one that finds nothing pending) invokes the
    /// target synchronously with a clone of its arguments, then schedules the
    /// trailing invocation as usual.
    pub fn immediate(target: C, wait: Duration) -> Self
    where
        A: Clone,
    {
        let leading: fn(&A) -> A = A::clone;
        Self::build(target, wait, Some(leading))
    }

    fn build(target: C, wait: Duration, leading: Option<fn(&A) -> A>) -> Self {
        Self {
            inner: Arc::new(DebounceInner {
                target: Arc::new(target),
                wait,
                leading,
                timer: Default::default(),
                state: MutexLike::new(PendingState::default()),
                _args: PhantomData,
            }),
        }
    }
}

impl<A, C, R> Debounced<A, C, R>
where
    A: Send + 'static,
    C: Callback<A>,
    R: Runtime,
{
    /// Record a call: cancel what is pending and schedule `args` for `wait` later.
    pub fn call(&self, args: A) {
        let inner = &*self.inner;
        let leading_args = {
            let mut state = inner.state.lock();

            let leading_args = match state.task.take() {
                Some(previous) => {
                    previous.cancel();
                    debug!("debounce: rescheduled pending call, waiting {:?}", inner.wait);
                    None
                }
                None => inner.leading.map(|clone| clone(&args)),
            };

            state.generation = state.generation.wrapping_add(1);
            state.task = Some(inner.schedule(state.generation, args));
            leading_args
        };

        if let Some(args) = leading_args {
            debug!("debounce: leading call fired immediately");
            inner.target.invoke(args);
        }
    }

    /// The quiet period required before the target fires.
    pub fn wait(&self) -> Duration {
        self.inner.wait
    }

    /// Whether the first call of a burst fires synchronously.
    pub fn is_immediate(&self) -> bool {
        self.inner.leading.is_some()
    }

    /// Whether an invocation is currently scheduled.
    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().task.is_some()
    }
}

impl<A, C, R> DebounceInner<A, C, R>
where
    A: Send + 'static,
    C: Callback<A>,
    R: Runtime,
{
    fn schedule(&self, generation: u64, args: A) -> CadenceTask {
        let sleep = self.timer.sleep_future(self.wait);
        let target = Arc::clone(&self.target);
        let state = self.state.clone();
        let wait = self.wait;

        CadenceTask::spawn(move |cancel| async move {
            if cancel.run_until_cancelled(sleep).await.is_none() {
                return;
            }

            {
                let mut state = state.lock();
                if state.generation != generation {
                    return;
                }
                state.task = None;
            }

            debug!("debounce: firing after {:?} of quiet", wait);
            target.invoke(args);
        })
    }
}

impl<A, C, R> Clone for Debounced<A, C, R>
where
    R: Runtime,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, C, R> Callback<A> for Debounced<A, C, R>
where
    A: Send + 'static,
    C: Callback<A>,
    R: Runtime,
{
    fn invoke(&self, args: A) {
        self.call(args);
    }
}

impl<A, C, R> Drop for DebounceInner<A, C, R>
where
    R: Runtime,
{
    fn drop(&mut self) {
        if let Some(pending) = self.state.lock().task.take() {
            debug!("debounce: last handle dropped with a pending call, cancelling it");
            pending.cancel();
        }
    }
}

impl<A, C, R> fmt::Debug for Debounced<A, C, R>
where
    R: Runtime,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.inner.wait)
            .field("immediate", &self.inner.leading.is_some())
            .field("pending", &self.inner.state.lock().task.is_some())
            .finish()
    }
}

/// Trailing debounce of `target` by `wait`.
///
/// Shorthand for [`Debounced::new`].
pub fn debounce<A, C>(target: C, wait: Duration) -> Debounced<A, C>
where
    A: Send + 'static,
    C: Callback<A>,
{
    Debounced::new(target, wait)
}

pub(crate) fn validate_wait(wait: Duration) -> Result<()> {
    if wait.is_zero() {
        return Err(CadenceError::invalid_wait(wait));
    }
    Ok(())
}
