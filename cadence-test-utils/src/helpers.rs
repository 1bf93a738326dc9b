// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::recorder::CallRecorder;
use tokio::task::yield_now;

/// Give spawned tasks a chance to run without moving the clock.
pub async fn settle() {
    for _ in 0..8 {
        yield_now().await;
    }
}

/// Panics if the recorder saw any call.
pub fn assert_no_calls<A>(recorder: &CallRecorder<A>) {
    let count = recorder.count();
    assert!(
        count == 0,
        "Unexpected invocation: expected no calls, recorded {count} at {:?} ms",
        recorder.times()
    );
}
