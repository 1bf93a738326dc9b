// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_core::CadenceError;
use std::time::Duration;

#[test]
fn test_error_display() {
    let err = CadenceError::invalid_wait(Duration::ZERO);
    assert_eq!(
        err.to_string(),
        "Invalid wait duration: 0ns (must be greater than zero)"
    );

    let err = CadenceError::MissingRuntime;
    assert_eq!(
        err.to_string(),
        "No async runtime available to schedule a callback"
    );
}

#[test]
fn test_invalid_wait_keeps_rejected_duration() {
    let err = CadenceError::invalid_wait(Duration::from_millis(0));

    assert_eq!(err, CadenceError::InvalidWait { wait: Duration::ZERO });
}

#[test]
fn test_errors_convert_into_anyhow() {
    let result: anyhow::Result<()> = Err(CadenceError::MissingRuntime.into());

    let err = result.unwrap_err();
    assert!(err.downcast_ref::<CadenceError>().is_some());
}
