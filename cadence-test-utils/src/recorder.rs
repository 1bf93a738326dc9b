// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::time::Instant;

/// One observed invocation of a recorded callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall<A> {
    /// Whole milliseconds after the recorder's origin
    pub at_ms: u64,
    pub args: A,
}

/// Hands out callbacks that record every invocation.
///
/// Clones share the same record.
#[derive(Debug)]
pub struct CallRecorder<A> {
    origin: Instant,
    calls: Arc<Mutex<Vec<RecordedCall<A>>>>,
}

impl<A> Clone for CallRecorder<A> {
    fn clone(&self) -> Self {
        Self {
            origin: self.origin,
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<A> CallRecorder<A> {
    /// Recorder whose offsets are measured from now.
    #[must_use]
    pub fn new() -> Self {
        Self::with_origin(Instant::now())
    }

    #[must_use]
    pub fn with_origin(origin: Instant) -> Self {
        Self {
            origin,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A callback appending `(offset, args)` on each invocation.
    pub fn callback(&self) -> impl Fn(A) + Send + Sync + 'static
    where
        A: Send + 'static,
    {
        let origin = self.origin;
        let calls = Arc::clone(&self.calls);
        move |args| {
            let at_ms = u64::try_from(origin.elapsed().as_millis()).unwrap_or(u64::MAX);
            calls.lock().push(RecordedCall { at_ms, args });
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall<A>>
    where
        A: Clone,
    {
        self.calls.lock().clone()
    }

    /// Offsets of all recorded calls, in call order.
    #[must_use]
    pub fn times(&self) -> Vec<u64> {
        self.calls.lock().iter().map(|call| call.at_ms).collect()
    }

    /// Arguments of all recorded calls, in call order.
    #[must_use]
    pub fn args(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.calls.lock().iter().map(|call| call.args.clone()).collect()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl<A> Default for CallRecorder<A> {
    fn default() -> Self {
        Self::new()
    }
}
