//! Error types for the post API client.
//!
//! # Design
//! `Transport` and `HttpError` are deliberately separate variants: the first
//! means the request never completed, the second means the server answered
//! with a non-success status. The presentation layer renders the two very
//! differently, so the client surfaces them raw and never folds one into the
//! other. `MissingId` covers the local precondition on item-level calls.

use std::fmt;

use crate::http::TransportError;

/// Errors returned by `PostClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not complete: no HTTP response was received.
    Transport(TransportError),

    /// An item-level operation was attempted with an empty id.
    MissingId,

    /// The server answered with a status outside the 2xx success range.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl ApiError {
    /// Whether this failure happened below the HTTP layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "{err}"),
            ApiError::MissingId => write!(f, "missing post id"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP error: {status}")?;
                if !body.is_empty() {
                    write!(f, ": {body}")?;
                }
                Ok(())
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Transport(err)
    }
}
