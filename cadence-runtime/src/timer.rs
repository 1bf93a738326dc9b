// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::Debug;
use std::future::Future;
use std::ops::{Add, Sub};
use std::time::Duration;

/// Clock and sleep source for scheduled callbacks.
///
/// `now()` must be monotonic: the timestamp throttle compares two readings and
/// a clock that jumps backwards would let calls through early.
pub trait Timer: Clone + Send + Sync + Debug + 'static {
    type Sleep: Future<Output = ()> + Send + 'static;

    type Instant: Copy
        + Debug
        + 'static
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    fn now(&self) -> Self::Instant;

    /// Time elapsed since `earlier`, saturating at zero.
    fn elapsed_since(&self, earlier: Self::Instant) -> Duration {
        let now = self.now();
        if now >= earlier {
            now - earlier
        } else {
            Duration::ZERO
        }
    }
}
