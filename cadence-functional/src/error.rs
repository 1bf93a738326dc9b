// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FunctionalError {
    /// A type name that no [`TypeTag`](crate::TypeTag) answers to
    #[error("Unknown type name: '{name}'")]
    UnknownType { name: String },
}

impl FunctionalError {
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, FunctionalError>;
