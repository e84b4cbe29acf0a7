//! Error types for the Trakt API client.
//!
//! # Design
//! `Unauthorized` and `NotFound` get dedicated variants because callers react
//! to them differently: a 401 means the bearer token is missing, expired, or
//! revoked (re-authenticate), while a 404 means the resource does not exist
//! (fix the lookup). All other non-2xx responses land in `HttpError` with the
//! raw status code and body for debugging.
//!
//! Decode failures inside a response body — a timestamp that matches neither
//! accepted pattern, an enum token outside its table — surface as
//! `DeserializationError` carrying the codec's message (offending raw value
//! plus field/enum identity). They are never converted to a default value:
//! a silent default would mask contract drift on the remote side.

use std::fmt;

/// Errors returned by the `parse_*` methods of the service handles.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 401 — the endpoint requires a valid OAuth bearer
    /// token and none was sent, or the one sent was rejected.
    Unauthorized,

    /// The server returned 404 — the requested resource does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 401/404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    /// Covers both malformed JSON (the parser's own message propagates
    /// unchanged) and wire values rejected by the codec layer.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "unauthorized: missing or rejected bearer token"),
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
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
