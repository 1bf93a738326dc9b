// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Curried runtime type checks over JSON values.
//!
//! [`is_type`] takes a tag and returns a predicate; the predicate takes the
//! value. Tag names are the capitalized kind names (`"String"`, `"Array"`, ...).

use crate::error::{FunctionalError, Result};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Runtime kind of a JSON value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl TypeTag {
    pub const ALL: [Self; 6] = [
        Self::Null,
        Self::Boolean,
        Self::Number,
        Self::String,
        Self::Array,
        Self::Object,
    ];

    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::String => "String",
            Self::Array => "Array",
            Self::Object => "Object",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeTag {
    type Err = FunctionalError;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.name() == name)
            .ok_or_else(|| FunctionalError::unknown_type(name))
    }
}

/// A predicate answering whether a value is of kind `tag`.
///
/// ```
/// use cadence_functional::{is_type, TypeTag};
/// use serde_json::json;
///
/// assert!(is_type(TypeTag::Array)(&json!([1, 2, 3])));
/// assert!(!is_type(TypeTag::Number)(&json!("5")));
/// ```
pub fn is_type(tag: TypeTag) -> impl Fn(&Value) -> bool + Copy + Send + Sync + 'static {
    move |value| TypeTag::of(value) == tag
}

/// Like [`is_type`], taking the tag by name.
///
/// # Errors
///
/// [`FunctionalError::UnknownType`] when `name` is not a tag name.
pub fn is_type_named(name: &str) -> Result<impl Fn(&Value) -> bool + Copy + Send + Sync + 'static> {
    name.parse().map(is_type)
}
