//! Error types for the transport layer and the diagnostic renderers.
//!
//! # Design
//! The two families never mix: `TransportError` is the real outcome of a
//! request and is propagated unchanged through every decorator, while
//! `RenderError` only ever affects diagnostic text — a failed render is
//! converted to its `Display` string and handed to the reporting callback,
//! and the request itself proceeds as if nothing happened.

use std::fmt;

/// Failure of the real network exchange.
///
/// Non-2xx responses are not errors; they come back as `HttpResponse`
/// values with the raw status. Only transport-level failures (connect,
/// IO, protocol) land here.
#[derive(Debug)]
pub enum TransportError {
    /// The underlying transport could not complete the round-trip.
    Network(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Network(msg) => write!(f, "network error: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Failure to render a request to diagnostic text (wire dump or curl
/// command). Never aborts or alters the real request.
#[derive(Debug)]
pub enum RenderError {
    /// The request URL is relative or malformed and cannot be split into
    /// host and path for rendering.
    Url(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Url(msg) => write!(f, "invalid request url: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}
