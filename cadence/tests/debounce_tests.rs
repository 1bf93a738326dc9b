// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence::{debounce, CadenceError, Debounced, DEFAULT_WAIT};
use cadence_test_utils::test_data::{input, key, typing, TestEvent};
use cadence_test_utils::{assert_no_calls, settle, RecordedCall, Timeline};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_debounce_burst_fires_once_after_last_call() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<TestEvent>();
    let debounced = debounce(recorder.callback(), Duration::from_millis(500));

    // Act: five calls within 100ms
    for (idx, event) in typing("hello").into_iter().enumerate() {
        timeline.at(idx as u64 * 20).await;
        debounced.call(event);
    }

    // Assert
    timeline.at(579).await;
    assert_no_calls(&recorder);

    timeline.at(2000).await;
    assert_eq!(
        recorder.calls(),
        vec![RecordedCall {
            at_ms: 580,
            args: input("hello"),
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn test_debounce_calls_spaced_beyond_wait_fire_independently() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<TestEvent>();
    let debounced = debounce(recorder.callback(), Duration::from_millis(100));

    // Act
    for (offset, c) in [(0, 'a'), (200, 'b'), (400, 'c')] {
        timeline.at(offset).await;
        debounced.call(key(c));
    }
    timeline.at(1000).await;

    // Assert
    assert_eq!(recorder.times(), vec![100, 300, 500]);
    assert_eq!(recorder.args(), vec![key('a'), key('b'), key('c')]);
}

#[tokio::test(start_paused = true)]
async fn test_debounce_resets_on_new_call() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<TestEvent>();
    let debounced = debounce(recorder.callback(), Duration::from_millis(500));

    // Act & Assert
    debounced.call(key('a'));
    timeline.at(300).await;
    assert_no_calls(&recorder);

    debounced.call(key('b'));
    timeline.at(600).await;
    assert_no_calls(&recorder);

    timeline.at(801).await;
    assert_eq!(recorder.times(), vec![800]);
    assert_eq!(recorder.args(), vec![key('b')]);
}

#[tokio::test(start_paused = true)]
async fn test_debounce_never_fires_while_calls_keep_coming() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<u64>();
    let debounced = debounce(recorder.callback(), Duration::from_millis(100));

    // Act
    for offset in (0..=950).step_by(50) {
        timeline.at(offset).await;
        debounced.call(offset);
    }

    // Assert
    timeline.at(1049).await;
    assert_no_calls(&recorder);

    timeline.at(1100).await;
    assert_eq!(recorder.times(), vec![1050]);
    assert_eq!(recorder.args(), vec![950]);
}

#[tokio::test(start_paused = true)]
async fn test_debounce_default_wait_is_one_second() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<&'static str>();
    let debounced = Debounced::with_default_wait(recorder.callback());

    // Act
    debounced.call("once");
    timeline.at(999).await;
    assert_no_calls(&recorder);
    timeline.at(1500).await;

    // Assert
    assert_eq!(debounced.wait(), DEFAULT_WAIT);
    assert_eq!(recorder.times(), vec![1000]);
}

#[tokio::test(start_paused = true)]
async fn test_debounce_passes_tuple_arguments_of_last_call() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<(String, String, String)>();
    let callback = recorder.callback();
    let debounced = debounce(
        move |(a, b, c): (&'static str, &'static str, &'static str)| {
            callback((a.to_string(), b.to_string(), c.to_string()));
        },
        Duration::from_millis(1500),
    );

    // Act
    debounced.call(("arg1", "arg2", "arg3"));
    timeline.at(10).await;
    debounced.call(("arg4", "arg5", "arg6"));
    timeline.at(3000).await;

    // Assert
    assert_eq!(
        recorder.args(),
        vec![("arg4".to_string(), "arg5".to_string(), "arg6".to_string())]
    );
    assert_eq!(recorder.times(), vec![1510]);
}

#[tokio::test(start_paused = true)]
async fn test_immediate_debounce_fires_leading_and_trailing() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<TestEvent>();
    let debounced = Debounced::immediate(recorder.callback(), Duration::from_millis(300));

    // Act: first burst
    debounced.call(key('a'));
    assert_eq!(recorder.args(), vec![key('a')]);

    timeline.at(100).await;
    debounced.call(key('b'));
    timeline.at(200).await;
    debounced.call(key('c'));
    timeline.at(1000).await;

    // Act: second burst starts fresh
    debounced.call(key('d'));
    timeline.at(2000).await;

    // Assert
    assert!(debounced.is_immediate());
    assert_eq!(recorder.times(), vec![0, 500, 1000, 1300]);
    assert_eq!(
        recorder.args(),
        vec![key('a'), key('c'), key('d'), key('d')]
    );
}

#[tokio::test(start_paused = true)]
async fn test_trailing_debounce_is_not_immediate() {
    let recorder = Timeline::new().recorder::<u32>();
    let debounced = debounce(recorder.callback(), Duration::from_millis(300));

    debounced.call(1);
    settle().await;

    assert!(!debounced.is_immediate());
    assert_no_calls(&recorder);
}

#[tokio::test(start_paused = true)]
async fn test_debounce_pending_state_clears_after_firing() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<u32>();
    let debounced = debounce(recorder.callback(), Duration::from_millis(200));
    assert!(!debounced.is_pending());

    // Act & Assert
    debounced.call(1);
    assert!(debounced.is_pending());

    timeline.at(250).await;
    assert!(!debounced.is_pending());
    assert_eq!(recorder.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_debounce_cancels_pending_call() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<u32>();
    let debounced = debounce(recorder.callback(), Duration::from_millis(200));

    // Act
    debounced.call(1);
    timeline.at(100).await;
    drop(debounced);
    timeline.at(1000).await;

    // Assert
    assert_no_calls(&recorder);
}

#[tokio::test(start_paused = true)]
async fn test_debounce_try_new_validates_wait() -> anyhow::Result<()> {
    let recorder = Timeline::new().recorder::<u32>();

    let rejected = Debounced::try_new(recorder.callback(), Duration::ZERO);
    assert!(matches!(
        rejected,
        Err(CadenceError::InvalidWait { wait }) if wait.is_zero()
    ));

    let accepted = Debounced::try_new(recorder.callback(), Duration::from_millis(5))?;
    assert_eq!(accepted.wait(), Duration::from_millis(5));

    Ok(())
}

#[test]
fn test_debounce_try_new_outside_runtime_fails() {
    let result = Debounced::try_new(|_: u32| {}, Duration::from_millis(5));
    assert!(matches!(result, Err(CadenceError::MissingRuntime)));
}

#[tokio::test(start_paused = true)]
async fn test_debounce_debug_output() {
    let debounced = Debounced::immediate(|_: u32| {}, Duration::from_millis(5));
    assert_eq!(
        format!("{debounced:?}"),
        "Debounced { wait: 5ms, immediate: true, pending: false }"
    );
}

#[tokio::test(start_paused = true)]
async fn test_debounce_clones_share_pending_call() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<TestEvent>();
    let debounced = debounce(recorder.callback(), Duration::from_millis(200));
    let handle = debounced.clone();

    // Act
    debounced.call(key('a'));
    timeline.at(100).await;
    handle.call(key('b'));
    drop(debounced);
    timeline.at(1000).await;

    // Assert
    assert_eq!(recorder.times(), vec![300]);
    assert_eq!(recorder.args(), vec![key('b')]);
    assert!(!handle.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_last_clone_cancels_pending_call() {
    // Arrange
    let timeline = Timeline::new();
    let recorder = timeline.recorder::<u32>();
    let debounced = debounce(recorder.callback(), Duration::from_millis(200));
    let handle = debounced.clone();

    // Act
    handle.call(1);
    drop(debounced);
    assert!(handle.is_pending());
    drop(handle);
    timeline.at(1000).await;

    // Assert
    assert_no_calls(&recorder);
}
