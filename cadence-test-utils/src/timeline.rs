// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::recorder::CallRecorder;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Millisecond offsets measured from a fixed origin.
#[derive(Clone, Copy, Debug)]
pub struct Timeline {
    origin: Instant,
}

impl Timeline {
    /// Start a timeline at the current (paused) instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Sleep until `ms` after the origin.
    ///
    /// Under paused time every timer due before that offset fires first.
    /// Returns immediately if the offset is already in the past.
    pub async fn at(&self, ms: u64) {
        sleep_until(self.origin + Duration::from_millis(ms)).await;
    }

    /// Whole milliseconds elapsed since the origin.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    #[must_use]
    pub const fn origin(&self) -> Instant {
        self.origin
    }

    /// A recorder measuring call offsets against this timeline.
    #[must_use]
    pub fn recorder<A>(&self) -> CallRecorder<A> {
        CallRecorder::with_origin(self.origin)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
