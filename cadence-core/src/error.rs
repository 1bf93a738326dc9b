// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the cadence wrappers
//!
//! Wrapped callbacks themselves are never caught: a panicking target unwinds
//! into whoever invoked it. The errors below only cover misuse detected
//! before anything is scheduled.
//!
//! # Examples
//!
//! ```
//! use cadence_core::{CadenceError, Result};
//! use std::time::Duration;
//!
//! fn validate(wait: Duration) -> Result<Duration> {
//!     if wait.is_zero() {
//!         return Err(CadenceError::invalid_wait(wait));
//!     }
//!     Ok(wait)
//! }
//!
//! assert!(validate(Duration::ZERO).is_err());
//! ```

use std::time::Duration;

/// Root error type for all cadence operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CadenceError {
    /// The wait duration is not usable for a wrapper or an interval
    #[error("Invalid wait duration: {wait:?} (must be greater than zero)")]
    InvalidWait {
        /// The rejected duration
        wait: Duration,
    },

    /// No async runtime is available to schedule a deferred callback
    #[error("No async runtime available to schedule a callback")]
    MissingRuntime,
}

impl CadenceError {
    /// Create an invalid wait error for the given duration
    pub fn invalid_wait(wait: Duration) -> Self {
        Self::InvalidWait { wait }
    }
}

/// Specialized Result type for cadence operations
pub type Result<T> = std::result::Result<T, CadenceError>;
