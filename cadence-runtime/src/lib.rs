// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime seams used by the cadence wrappers: a [`timer::Timer`] to sleep and
//! read the clock, a [`mutex::MutexLike`] to guard pending-invocation state,
//! and a [`runtime::Runtime`] bundling both.

pub mod impls;
pub mod mutex;
pub mod runtime;
pub mod timer;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::{TokioRuntime, TokioTimer};

/// Runtime selected by the enabled feature.
#[cfg(feature = "runtime-tokio")]
pub type DefaultRuntime = TokioRuntime;
