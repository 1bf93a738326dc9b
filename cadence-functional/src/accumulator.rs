// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;
use std::iter::Sum;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Handle to a running total that grows one term at a time.
///
/// [`add`](Accumulator::add) folds the term into the shared total and returns
/// the same handle, so terms chain without limit. Clones share the total:
/// every handle returned along a chain observes every term.
///
/// The total saturates at the `i64` bounds instead of overflowing.
///
/// ```
/// use cadence_functional::add;
///
/// assert_eq!(add(1).add(2).add(3).add(4).to_string(), "10");
///
/// let sum = add(5);
/// sum.add(1);
/// sum.add(-10);
/// assert_eq!(sum.to_string(), "-4");
/// ```
#[derive(Clone, Default)]
pub struct Accumulator {
    total: Arc<AtomicI64>,
}

impl Accumulator {
    #[must_use]
    pub fn new(start: i64) -> Self {
        Self {
            total: Arc::new(AtomicI64::new(start)),
        }
    }

    /// Fold `term` into the total and hand back this accumulator.
    pub fn add(&self, term: i64) -> Self {
        let mut current = self.total.load(Ordering::Acquire);
        loop {
            let next = current.saturating_add(term);
            match self.total.compare_exchange_weak(
                current,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return self.clone(),
                Err(actual) => current = actual,
            }
        }
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.total.load(Ordering::Acquire)
    }
}

/// Start an [`Accumulator`] at `start`.
#[must_use]
pub fn add(start: i64) -> Accumulator {
    Accumulator::new(start)
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl fmt::Debug for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Accumulator").field(&self.value()).finish()
    }
}

impl PartialEq for Accumulator {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for Accumulator {}

impl From<Accumulator> for i64 {
    fn from(accumulator: Accumulator) -> Self {
        accumulator.value()
    }
}

impl Sum<i64> for Accumulator {
    fn sum<I: Iterator<Item = i64>>(terms: I) -> Self {
        let accumulator = Self::default();
        for term in terms {
            accumulator.add(term);
        }
        accumulator
    }
}
