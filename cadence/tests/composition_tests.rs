// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence::{debounce, throttle, Callback, Debounced, Interval, Throttled};
use cadence_test_utils::test_data::{key, TestEvent};
use cadence_test_utils::{assert_no_calls, Timeline};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_debounce_of_debounce_adds_both_waits() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<TestEvent>();
    let inner = debounce(recorder.callback(), Duration::from_millis(100));
    let outer = debounce(inner, Duration::from_millis(100));

    // Act
    outer.call(key('a'));
    timeline.at(50).await;
    outer.call(key('b'));

    // Assert
    timeline.at(249).await;
    assert_no_calls(&recorder);
    timeline.at(1000).await;
    assert_eq!(recorder.times(), vec![250]);
    assert_eq!(recorder.args(), vec![key('b')]);
}

#[tokio::test(start_paused = true)]
async fn test_throttle_of_debounce_debounces_admitted_calls() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<u64>();
    let debounced = debounce(recorder.callback(), Duration::from_millis(50));
    let throttled = throttle(debounced, Duration::from_millis(100));

    // Act: a call every 7ms; the throttle admits 0, 105, 210
    for offset in (0..=300).step_by(7) {
        timeline.at(offset).await;
        throttled.call(offset);
    }
    timeline.at(1000).await;

    // Assert
    assert_eq!(recorder.times(), vec![50, 155, 260]);
    assert_eq!(recorder.args(), vec![0, 105, 210]);
}

#[tokio::test(start_paused = true)]
async fn test_debounce_of_throttle_forwards_last_call_once() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<u64>();
    let throttled = Throttled::timestamp(recorder.callback(), Duration::from_millis(100));
    let debounced = debounce(throttled, Duration::from_millis(30));

    // Act
    for offset in [0, 10, 20] {
        timeline.at(offset).await;
        debounced.call(offset);
    }
    timeline.at(500).await;

    // Assert
    assert_eq!(recorder.times(), vec![50]);
    assert_eq!(recorder.args(), vec![20]);
}

#[tokio::test(start_paused = true)]
async fn test_shared_wrapper_keeps_one_state() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<&'static str>();
    let debounced = debounce(recorder.callback(), Duration::from_millis(100));
    let from_task = debounced.clone();

    // Act
    debounced.call("main");
    tokio::spawn(async move {
        from_task.invoke("task");
    })
    .await
    .expect("spawned task panicked");
    timeline.at(500).await;

    // Assert
    assert_eq!(recorder.args(), vec!["task"]);
}

#[tokio::test(start_paused = true)]
async fn test_interval_driven_debounce_fires_after_cancel() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<(&'static str, &'static str, &'static str)>();
    let debounced = Debounced::new(recorder.callback(), Duration::from_millis(1500));

    // Act
    let interval = Interval::start(
        Duration::from_millis(10),
        debounced.clone(),
        ("arg1", "arg2", "arg3"),
    );
    timeline.at(505).await;
    interval.cancel();

    // Assert
    timeline.at(1999).await;
    assert_no_calls(&recorder);
    timeline.at(3000).await;
    assert_eq!(recorder.times(), vec![2000]);
    assert_eq!(recorder.args(), vec![("arg1", "arg2", "arg3")]);
    assert_eq!(interval.ticks(), 50);
    assert!(!debounced.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_interval_driven_immediate_debounce_fires_both_edges() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<(&'static str, &'static str, &'static str)>();
    let debounced = Debounced::immediate(recorder.callback(), Duration::from_millis(1500));

    // Act
    let interval = Interval::start(
        Duration::from_millis(10),
        debounced.clone(),
        ("arg1", "arg2", "arg3"),
    );
    timeline.at(505).await;
    interval.cancel();
    timeline.at(3000).await;

    // Assert
    let ticks = interval.ticks();
    assert_eq!(ticks, 50);
    assert_eq!(recorder.times(), vec![10, 10 * ticks + 1500]);
    assert!(debounced.is_immediate());
}

#[tokio::test(start_paused = true)]
async fn test_interval_owning_only_handle_cancels_trailing_call() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<u8>();
    let debounced = Debounced::new(recorder.callback(), Duration::from_millis(100));

    // Act: the interval holds the last handle and drops it on cancel
    let interval = Interval::start(Duration::from_millis(10), debounced, 1);
    timeline.at(55).await;
    interval.cancel();
    timeline.at(1000).await;

    // Assert
    assert_no_calls(&recorder);
}

#[tokio::test(start_paused = true)]
async fn test_interval_driven_throttles_fire_once_per_window() {
    // Arrange
    let timeline = Timeline::new();
    let by_timestamp = timeline.recorder::<u8>();
    let by_cooldown = timeline.recorder::<u8>();
    let wait = Duration::from_millis(1500);
    let period = Duration::from_millis(7);

    // Act
    let first = Interval::start(
        period,
        Throttled::timestamp(by_timestamp.callback(), wait),
        1,
    );
    let second = Interval::start(period, Throttled::cooldown(by_cooldown.callback(), wait), 2);
    timeline.at(5000).await;
    first.cancel();
    second.cancel();

    // Assert
    assert_eq!(by_timestamp.times(), vec![7, 1512, 3017, 4522]);
    assert_eq!(by_cooldown.times(), vec![7, 1512, 3017, 4522]);
}
