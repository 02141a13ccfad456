//! Error types for the inventory API client.
//!
//! # Design
//! `Failure` is the one variant carrying HTTP semantics: callers branch on
//! its numeric status (409 means a duplicate item name) rather than on
//! per-status variants. `Transport`, `Encode` and `Decode` cover the
//! round-trip failing outside the HTTP contract.

use std::fmt;

use crate::gateway::Payload;

/// Errors returned by the gateway and the items client.
#[derive(Debug)]
pub enum RequestError {
    /// The server answered with a non-2xx status. `message` is resolved from
    /// the response body (`message` field, then `error` field), falling back
    /// to the status text and finally `HTTP <status>`. `detail` carries the
    /// decoded body when one was present.
    Failure {
        status: u16,
        message: String,
        detail: Option<Payload>,
    },

    /// The network call itself failed; no HTTP response was obtained.
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Encode(String),

    /// A successful response body was not the expected shape.
    Decode(String),
}

impl RequestError {
    /// The HTTP status for `Failure`, `None` for every other variant.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Failure { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Failure { status, message, .. } => {
                write!(f, "HTTP {status}: {message}")
            }
            RequestError::Transport(msg) => write!(f, "transport error: {msg}"),
            RequestError::Encode(msg) => write!(f, "serialization failed: {msg}"),
            RequestError::Decode(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for RequestError {}
