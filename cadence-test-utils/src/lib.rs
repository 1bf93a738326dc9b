// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the cadence wrappers.
//!
//! Designed for `#[tokio::test(start_paused = true)]`: with the clock paused,
//! Tokio advances time only when every task is idle, so scheduled callbacks
//! fire at exact millisecond offsets and tests can assert on them.
//!
//! # Key Types
//!
//! - [`Timeline`] - a fixed origin plus `at(ms)` to move the test to an offset
//! - [`CallRecorder`] - a callback factory recording `(offset, args)` per call
//! - [`test_data`] - event fixtures to feed through wrappers
//!
//! # Example
//!
//! ```rust
//! use cadence_test_utils::Timeline;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let timeline = Timeline::new();
//! let recorder = timeline.recorder::<&'static str>();
//! let callback = recorder.callback();
//!
//! timeline.at(100).await;
//! callback("hello");
//!
//! assert_eq!(recorder.times(), vec![100]);
//! assert_eq!(recorder.args(), vec!["hello"]);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod recorder;
pub mod test_data;
pub mod timeline;

pub use helpers::{assert_no_calls, settle};
pub use recorder::{CallRecorder, RecordedCall};
pub use test_data::TestEvent;
pub use timeline::Timeline;
