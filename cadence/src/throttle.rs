// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttle for callbacks: at most one invocation per `wait` interval.
//!
//! Calls that are let through reach the target synchronously; the others are
//! dropped, never deferred. Two policies decide which calls get through:
//!
//! - [`ThrottlePolicy::Timestamp`] remembers when the target last fired and
//!   lets a call through once strictly more than `wait` has elapsed.
//! - [`ThrottlePolicy::Cooldown`] starts a timer after each invocation and
//!   drops calls until that timer fires.
//!
//! Both bound the rate identically but differ in which instant opens the next
//! window: the timestamp check is evaluated lazily at call time, the cooldown
//! is cleared by its own timer task.

use crate::callback::Callback;
use crate::debounce::validate_wait;
use crate::DEFAULT_WAIT;
use cadence_core::{ensure_runtime, CadenceTask, Result};
use cadence_runtime::mutex::MutexLike;
use cadence_runtime::runtime::Runtime;
use cadence_runtime::timer::Timer;
use cadence_runtime::DefaultRuntime;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

/// Which calls a [`Throttled`] wrapper lets through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThrottlePolicy {
    /// Fire when more than `wait` elapsed since the last invocation.
    Timestamp,
    /// Fire when no cooldown timer is running, then start one.
    Cooldown,
}

#[derive(Debug)]
struct ThrottleState<I> {
    last_fired: Option<I>,
    /// Bumped whenever a cooldown starts; a stale cooldown task leaves the state alone
    generation: u64,
    cooldown: Option<CadenceTask>,
}

impl<I> Default for ThrottleState<I> {
    fn default() -> Self {
        Self {
            last_fired: None,
            generation: 0,
            cooldown: None,
        }
    }
}

/// Throttling wrapper around a [`Callback`].
///
/// Clones are handles to the same wrapper and share its window; dropping the
/// last handle cancels a running cooldown.
///
/// # Example
///
/// ```rust
/// use cadence::Throttled;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let on_scroll = Throttled::cooldown(
///     |offset: u32| println!("scrolled to {offset}"),
///     Duration::from_millis(100),
/// );
///
/// on_scroll.call(10); // fires
/// on_scroll.call(20); // dropped, cooldown active
/// # }
/// ```
pub struct Throttled<A, C, R = DefaultRuntime>
where
    R: Runtime,
{
    inner: Arc<ThrottleInner<A, C, R>>,
}

struct ThrottleInner<A, C, R>
where
    R: Runtime,
{
    target: C,
    wait: Duration,
    policy: ThrottlePolicy,
    timer: R::Timer,
    state: R::Mutex<ThrottleState<R::Instant>>,
    _args: PhantomData<fn(A)>,
}

impl<A, C> Throttled<A, C, DefaultRuntime>
where
    A: Send + 'static,
    C: Callback<A>,
{
    /// Throttle `target` to one invocation per `wait` using `policy`.
    pub fn new(target: C, wait: Duration, policy: ThrottlePolicy) -> Self {
        Self {
            inner: Arc::new(ThrottleInner {
                target,
                wait,
                policy,
                timer: Default::default(),
                state: MutexLike::new(ThrottleState::default()),
                _args: PhantomData,
            }),
        }
    }

    /// Throttle by `policy` with [`DEFAULT_WAIT`].
    pub fn with_default_wait(target: C, policy: ThrottlePolicy) -> Self {
        Self::new(target, DEFAULT_WAIT, policy)
    }

    /// Throttle using the [`ThrottlePolicy::Timestamp`] policy.
    pub fn timestamp(target: C, wait: Duration) -> Self {
        Self::new(target, wait, ThrottlePolicy::Timestamp)
    }

    /// Throttle using the [`ThrottlePolicy::Cooldown`] policy.
    pub fn cooldown(target: C, wait: Duration) -> Self {
        Self::new(target, wait, ThrottlePolicy::Cooldown)
    }

    /// Like [`new`](Self::new), but validates the configuration up front.
    ///
    /// # Errors
    ///
    /// - [`CadenceError::InvalidWait`](cadence_core::CadenceError::InvalidWait) when `wait` is zero
    /// - [`CadenceError::MissingRuntime`](cadence_core::CadenceError::MissingRuntime) for the
    ///   cooldown policy outside of a Tokio runtime
    pub fn try_new(target: C, wait: Duration, policy: ThrottlePolicy) -> Result<Self> {
        validate_wait(wait)?;
        if policy == ThrottlePolicy::Cooldown {
            ensure_runtime()?;
        }
        Ok(Self::new(target, wait, policy))
    }
}

impl<A, C, R> Throttled<A, C, R>
where
    A: Send + 'static,
    C: Callback<A>,
    R: Runtime,
{
    /// Invoke the target now if the policy allows it, otherwise drop the call.
    pub fn call(&self, args: A) {
        let inner = &*self.inner;
        let admitted = match inner.policy {
            ThrottlePolicy::Timestamp => inner.admit_by_timestamp(),
            ThrottlePolicy::Cooldown => inner.admit_by_cooldown(),
        };

        if admitted {
            inner.target.invoke(args);
        } else {
            debug!("throttle: dropped call ({:?} policy)", inner.policy);
        }
    }

    /// The minimum spacing between two invocations.
    pub fn wait(&self) -> Duration {
        self.inner.wait
    }

    pub fn policy(&self) -> ThrottlePolicy {
        self.inner.policy
    }

    /// Whether a cooldown timer is currently running.
    ///
    /// Always `false` under the timestamp policy.
    pub fn is_cooling_down(&self) -> bool {
        self.inner.state.lock().cooldown.is_some()
    }
}

impl<A, C, R> ThrottleInner<A, C, R>
where
    R: Runtime,
{
    fn admit_by_timestamp(&self) -> bool {
        let now = self.timer.now();
        let mut state = self.state.lock();

        let open = match state.last_fired {
            None => true,
            Some(last) => now > last && now - last > self.wait,
        };
        if open {
            state.last_fired = Some(now);
        }
        open
    }

    fn admit_by_cooldown(&self) -> bool {
        let mut state = self.state.lock();
        if state.cooldown.is_some() {
            return false;
        }

        state.generation = state.generation.wrapping_add(1);
        state.last_fired = Some(self.timer.now());
        state.cooldown = Some(self.start_cooldown(state.generation));
        true
    }

    fn start_cooldown(&self, generation: u64) -> CadenceTask {
        let sleep = self.timer.sleep_future(self.wait);
        let state = self.state.clone();

        CadenceTask::spawn(move |cancel| async move {
            if cancel.run_until_cancelled(sleep).await.is_none() {
                return;
            }

            let mut state = state.lock();
            if state.generation == generation {
                state.cooldown = None;
                debug!("throttle: cooldown cleared");
            }
        })
    }
}

impl<A, C, R> Clone for Throttled<A, C, R>
where
    R: Runtime,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, C, R> Callback<A> for Throttled<A, C, R>
where
    A: Send + 'static,
    C: Callback<A>,
    R: Runtime,
{
    fn invoke(&self, args: A) {
        self.call(args);
    }
}

impl<A, C, R> Drop for ThrottleInner<A, C, R>
where
    R: Runtime,
{
    fn drop(&mut self) {
        if let Some(cooldown) = self.state.lock().cooldown.take() {
            cooldown.cancel();
        }
    }
}

impl<A, C, R> fmt::Debug for Throttled<A, C, R>
where
    R: Runtime,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("Throttled")
            .field("wait", &self.inner.wait)
            .field("policy", &self.inner.policy)
            .field("last_fired", &state.last_fired)
            .field("cooling_down", &state.cooldown.is_some())
            .finish()
    }
}

/// Throttle `target` to one invocation per `wait` with the cooldown policy.
///
/// Shorthand for [`Throttled::cooldown`].
pub fn throttle<A, C>(target: C, wait: Duration) -> Throttled<A, C>
where
    A: Send + 'static,
    C: Callback<A>,
{
    Throttled::cooldown(target, wait)
}
