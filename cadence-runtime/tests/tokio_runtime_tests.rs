// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_runtime::mutex::MutexLike;
use cadence_runtime::runtime::Runtime;
use cadence_runtime::timer::Timer;
use cadence_runtime::{DefaultRuntime, TokioTimer};
use std::time::Duration;
use tokio::time::{advance, pause};

type StateMutex = <DefaultRuntime as Runtime>::Mutex<Vec<u32>>;

#[tokio::test]
async fn test_sleep_future_completes_after_duration() {
    // Arrange
    pause();
    let timer = TokioTimer;
    let start = timer.now();

    // Act
    timer.sleep_future(Duration::from_millis(250)).await;

    // Assert
    assert!(timer.now() - start >= Duration::from_millis(250));
}

#[tokio::test]
async fn test_now_follows_paused_clock() {
    pause();
    let timer = TokioTimer;
    let start = timer.now();

    advance(Duration::from_secs(3)).await;

    assert_eq!(timer.elapsed_since(start), Duration::from_secs(3));
}

#[tokio::test]
async fn test_elapsed_since_future_instant_saturates() {
    pause();
    let timer = TokioTimer;
    let later = timer.now() + Duration::from_secs(10);

    assert_eq!(timer.elapsed_since(later), Duration::ZERO);
}

#[test]
fn test_default_runtime_mutex_shares_state_between_clones() {
    let mutex: StateMutex = MutexLike::new(Vec::new());
    let clone = mutex.clone();

    clone.lock().push(1);
    mutex.lock().push(2);

    assert_eq!(*mutex.lock(), vec![1, 2]);
}
