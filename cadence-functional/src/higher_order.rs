// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Functions passed as arguments: map, filter and fold over slices.

/// Every element doubled, in order, saturating at the `i64` bounds.
#[must_use]
pub fn double_all(values: &[i64]) -> Vec<i64> {
    values.iter().map(|value| value.saturating_mul(2)).collect()
}

/// The elements whose index is the index of their first occurrence.
///
/// Keeps the first occurrence of each value and preserves order. Only needs
/// `PartialEq`, so it works for values that cannot be hashed or ordered.
///
/// ```
/// use cadence_functional::unique;
///
/// assert_eq!(unique(&[1, 2, 1, 2, 3, 5, 4, 5, 3, 4]), vec![1, 2, 3, 5, 4]);
/// ```
#[must_use]
pub fn unique<T>(values: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    values
        .iter()
        .enumerate()
        .filter(|(idx, value)| values.iter().position(|other| other == *value) == Some(*idx))
        .map(|(_, value)| value.clone())
        .collect()
}

/// Sum of `values`, starting from `seed`, saturating at the `i64` bounds.
#[must_use]
pub fn sum_from(values: &[i64], seed: i64) -> i64 {
    values.iter().fold(seed, |acc, value| acc.saturating_add(*value))
}
