// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for data ingestion and configuration

use crate::PathId;
use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while loading floors, slides or configuration
#[derive(Error, Debug)]
pub enum ModelError {
    /// Input document could not be decoded
    #[error("Invalid data: {0}")]
    InvalidData(#[from] serde_json::Error),

    /// Two floor records share the same path id
    #[error("Duplicate path id {0}")]
    DuplicatePathId(PathId),

    /// A floor record has an empty path id
    #[error("Floor record at position {0} has an empty path id")]
    EmptyPathId(usize),

    /// Apartment type has no comparison counterpart
    #[error("Apartment type {0} has no opposite type")]
    NoOppositeType(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ModelError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        ModelError::InvalidConfig(msg.into())
    }

    /// Create a new opposite-type error
    pub fn no_opposite(kind: impl Into<String>) -> Self {
        ModelError::NoOppositeType(kind.into())
    }
}
