// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{mutex::MutexLike, timer::Timer};
use std::fmt::Debug;
use std::ops::{Add, Sub};
use std::time::Duration;

/// The primitives a wrapper needs from an async runtime.
///
/// The mutex guards pending-invocation state shared with scheduled tasks, so
/// it is `Clone` (shared handle) and `'static`.
pub trait Runtime: Send + Sync + 'static {
    type Mutex<T: Send + ?Sized + 'static>: MutexLike<T> + Send + Sync + 'static;
    type Timer: Timer<Instant = Self::Instant> + Default;
    type Instant: Copy
        + Ord
        + 'static
        + Send
        + Sync
        + Debug
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;
}
