// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core building blocks shared by the cadence crates.
//!
//! - [`CadenceError`] and the [`Result`] alias
//! - [`CancellationToken`] for cooperative cancellation of scheduled work
//! - [`CadenceTask`] for spawning a cancellable background task

pub mod cadence_task;
pub mod cancellation_token;
pub mod error;

pub use self::cadence_task::CadenceTask;
#[cfg(feature = "runtime-tokio")]
pub use self::cadence_task::ensure_runtime;
pub use self::cancellation_token::{CancellationToken, Cancelled};
pub use self::error::{CadenceError, Result};
