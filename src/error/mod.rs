//! Error definitions
//!
//! This module provides error types for matchkit.
//!
//! Assertion mismatches are not errors: a failing constraint reports a
//! negative match result with descriptive text. [`Error`] covers the
//! serialization paths, where a failure is caught and rendered into the
//! constraint's mismatch message instead of propagating.

use thiserror::Error;

/// Main error type for matchkit
#[derive(Error, Debug)]
pub enum Error {
    /// A value could not be serialized
    #[error("could not serialize value: {0}")]
    Serialize(String),

    /// A representation could not be deserialized
    #[error("could not deserialize value: {0}")]
    Deserialize(String),

    /// Deserialize was called before anything was serialized
    #[error("nothing has been serialized yet")]
    NothingSerialized,

    /// A simulated request could not be built
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// Create a serialization error from any displayable cause.
    #[must_use]
    pub fn serialize(cause: impl std::fmt::Display) -> Self {
        Self::Serialize(cause.to_string())
    }

    /// Create a deserialization error from any displayable cause.
    #[must_use]
    pub fn deserialize(cause: impl std::fmt::Display) -> Self {
        Self::Deserialize(cause.to_string())
    }

    /// Create an invalid-request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
