// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deep flattening of arbitrarily nested lists.

use serde_json::Value;

/// A value or a list of nested values, at any depth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Deepest list nesting; a bare item has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Item(_) => 0,
            Self::List(children) => 1 + children.iter().map(Self::depth).max().unwrap_or(0),
        }
    }

    /// All items, depth-first and left to right.
    #[must_use]
    pub fn into_flat(self) -> Vec<T> {
        let mut out = Vec::new();
        self.drain_into(&mut out);
        out
    }

    fn drain_into(self, out: &mut Vec<T>) {
        match self {
            Self::Item(item) => out.push(item),
            Self::List(children) => {
                for child in children {
                    child.drain_into(out);
                }
            }
        }
    }
}

impl Nested<Value> {
    /// JSON arrays become lists, every other value an item.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Array(children) => Self::List(children.iter().map(Self::from_json).collect()),
            other => Self::Item(other.clone()),
        }
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(children: Vec<Nested<T>>) -> Self {
        Self::List(children)
    }
}

/// All items of `nested`, depth-first and left to right.
///
/// ```
/// use cadence_functional::{flatten, Nested};
///
/// let nested = Nested::List(vec![
///     Nested::Item(1),
///     Nested::List(vec![Nested::Item(2), Nested::List(vec![Nested::Item(3)])]),
/// ]);
/// assert_eq!(flatten(&nested), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn flatten<T: Clone>(nested: &Nested<T>) -> Vec<T> {
    match nested {
        Nested::Item(item) => vec![item.clone()],
        Nested::List(children) => children.iter().flat_map(flatten).collect(),
    }
}

/// Flatten nested JSON arrays into one list of their non-array elements.
///
/// A non-array value flattens to a single-element list.
#[must_use]
pub fn flatten_json(value: &Value) -> Vec<Value> {
    Nested::from_json(value).into_flat()
}
