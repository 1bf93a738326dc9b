// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce and throttle wrappers for callbacks.
//!
//! A wrapper owns one piece of hidden timer state and decides when the wrapped
//! target actually runs:
//!
//! - **[`Debounced`]** - waits until calls stop for `wait`, then fires once with
//!   the last call's arguments. Optionally also fires on the leading edge.
//! - **[`Throttled`]** - fires at most once per `wait`, dropping the calls in
//!   between, by [timestamp](ThrottlePolicy::Timestamp) or by
//!   [cooldown timer](ThrottlePolicy::Cooldown).
//! - **[`Interval`]** - caller-owned repeating trigger, cancelled explicitly or on drop.
//!
//! Every wrapper is itself a [`Callback`], so wrappers compose.
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - deferred callbacks are Tokio tasks sleeping on
//!   `tokio::time`, so paused test time drives them.
//! - `tracing` - emit debug events through `tracing` instead of staying silent.
//!
//! # Example
//!
//! ```rust
//! use cadence::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let print = |input: String| println!("[output] {input}");
//!
//! let debounced = debounce(print, Duration::from_millis(500));
//! let throttled = throttle(print, Duration::from_millis(500));
//!
//! debounced.call("typed".to_string());
//! throttled.call("clicked".to_string());
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

mod callback;
mod debounce;
mod interval;
mod throttle;

pub mod prelude;

use std::time::Duration;

pub use callback::Callback;
pub use debounce::{debounce, Debounced};
pub use interval::{Interval, MIN_PERIOD};
pub use throttle::{throttle, ThrottlePolicy, Throttled};

pub use cadence_core::{CadenceError, Result};

/// Wait used when none is given.
pub const DEFAULT_WAIT: Duration = Duration::from_millis(1000);
