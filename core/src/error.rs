//! Error types for the trademark API client.
//!
//! # Design
//! `Validation` gets a dedicated variant because its message comes from the
//! server's `{"detail": …}` body and is meant for end-user display, while
//! `Http` carries the raw status and body for debugging. `NotFound` is kept
//! separate so detail views can redirect instead of showing a generic
//! failure.

use std::fmt;

/// Errors returned by the client, store, and controller.
#[derive(Debug)]
pub enum ApiError {
    /// The request never reached the server or no response came back.
    Network(String),

    /// The server returned 404 — the requested record does not exist.
    NotFound,

    /// The server rejected the request and supplied a user-displayable
    /// `detail` message.
    Validation(String),

    /// The server returned a non-2xx status with no usable detail.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl ApiError {
    /// Message suitable for a transient user notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(detail) => detail.clone(),
            ApiError::NotFound => "Record not found.".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network failure: {msg}"),
            ApiError::NotFound => write!(f, "record not found"),
            ApiError::Validation(detail) => write!(f, "{detail}"),
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
