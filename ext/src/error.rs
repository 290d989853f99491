//! Errors raised at the caller boundary.
//!
//! These cover malformed requests and misuse of handles or settings. Domain
//! soft-failures (out-of-range vertex, full heap, duplicate key) never reach
//! this type; the core turns them into no-ops or empty results.

use thiserror::Error;

use crate::state::{Handle, Kind};

#[derive(Debug, Error)]
pub enum ExtError {
    /// Request line was not valid JSON or did not match the request shape.
    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unknown op '{0}'")]
    UnknownOp(String),

    #[error("{op}: missing argument '{name}' at position {index}")]
    MissingArgument {
        op: String,
        name: &'static str,
        index: usize,
    },

    #[error("{op}: argument '{name}' must be {expected}, got {found}")]
    BadArgument {
        op: String,
        name: &'static str,
        expected: &'static str,
        found: String,
    },

    /// Integer does not fit the 32-bit range of keys, values and weights.
    #[error("{name} {value} is outside the 32-bit integer range")]
    ValueOutOfRange { name: &'static str, value: i64 },

    #[error("no instance with handle {0}")]
    UnknownHandle(Handle),

    #[error("handle {handle} is a {found}, not a {expected}")]
    WrongKind {
        handle: Handle,
        expected: Kind,
        found: Kind,
    },

    #[error("unknown setting '{0}'")]
    UnknownSetting(String),

    #[error("setting {name} must be between {min} and {max}, got {value}")]
    SettingOutOfRange {
        name: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("graph of {requested} vertices exceeds max_vertices={max}")]
    VertexLimit { requested: i64, max: usize },
}

/// Result type alias for boundary operations.
pub type Result<T> = std::result::Result<T, ExtError>;
