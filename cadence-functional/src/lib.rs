// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Higher-order function idioms.
//!
//! - **Functions as arguments** - [`double_all`], [`unique`], [`sum_from`]
//! - **Functions as return values** - the curried [`is_type`] checker and the
//!   chained [`Accumulator`]
//! - **Deep flattening** - [`Nested`], [`flatten`] and [`flatten_json`]
//!
//! # Example
//!
//! ```rust
//! use cadence_functional::{add, is_type, TypeTag};
//! use serde_json::json;
//!
//! let is_string = is_type(TypeTag::String);
//! assert!(is_string(&json!("123")));
//!
//! assert_eq!(add(1).add(2).add(3).to_string(), "6");
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod accumulator;
pub mod error;
pub mod flatten;
pub mod higher_order;
pub mod type_check;

pub use accumulator::{add, Accumulator};
pub use error::{FunctionalError, Result};
pub use flatten::{flatten, flatten_json, Nested};
pub use higher_order::{double_all, sum_from, unique};
pub use type_check::{is_type, is_type_named, TypeTag};
