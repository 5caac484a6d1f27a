//! Core error types for the Cascade web services client.
//!
//! This module defines transport-agnostic error types. Transport-specific
//! failures (from reqwest, serde_json, etc.) are converted to these types by
//! the client crate.

use thiserror::Error;

use crate::operations::Operation;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the Cascade client library.
///
/// Transport-specific errors are wrapped in string form to keep this type
/// transport-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Operation failed: {0}")]
    Operation(#[from] OperationError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),
}

/// A remote operation that the service refused or could not carry out.
///
/// The service reports failure with a `success` flag and a free-form
/// message; the message is preserved verbatim so callers can surface it.
#[derive(Error, Debug)]
pub enum OperationError {
    /// The asset addressed by the identifier could not be retrieved.
    #[error("the {property_name} cannot be retrieved ({address}): {message}")]
    AssetNotFound {
        property_name: String,
        address: String,
        message: String,
    },

    #[error("editing the asset failed: {0}")]
    EditFailed(String),

    #[error("creating the asset failed: {0}")]
    CreateFailed(String),

    #[error("copying the asset failed: {0}")]
    CopyFailed(String),

    #[error("deleting the asset failed: {0}")]
    DeleteFailed(String),

    #[error("moving the asset failed: {0}")]
    MoveFailed(String),

    #[error("publishing failed: {0}")]
    PublishFailed(String),

    /// The operation has been switched off on this connection.
    #[error("the {0} operation is disabled")]
    Disabled(Operation),

    /// Catch-all for any other operation the service rejected.
    #[error("the {operation} operation failed: {message}")]
    Failed {
        operation: Operation,
        message: String,
    },
}

/// Validation errors for client-supplied input, raised before any request
/// is sent.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("the name cannot be empty")]
    EmptyName,

    #[error("{0} cannot be empty")]
    EmptyValue(&'static str),

    #[error("no such entity type: {0}")]
    NoSuchType(String),

    #[error("expected a {expected} but found a {actual}")]
    WrongAssetType {
        expected: &'static str,
        actual: String,
    },

    #[error("a path identifier for type {0} requires a site name")]
    MissingSiteName(String),

    #[error("the end time cannot be earlier than the start time")]
    EndBeforeStart,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::UnexpectedResponse(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
