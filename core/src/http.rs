//! Plain-data HTTP request/response types.
//!
//! # Design
//! Requests and responses are described as plain owned data so decorators
//! can inspect them by reference without consuming anything: a request body
//! is a `String`, not a single-read stream, so dumping it never invalidates
//! it for the transport that sends it next. The `url` field is absolute
//! (`http://host[:port]/path?query`); renderers split it as needed.
//!
//! All fields use owned types (`String`, `Vec`) so values can be captured,
//! cloned, and serialized by embedders without lifetime concerns.

use serde::{Deserialize, Serialize};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    /// The canonical uppercase wire form, as used in request lines and
    /// `curl -X` flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Decorators take requests by shared reference and never mutate them; the
/// same value that enters a decorator chain reaches the real transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL, including scheme, host, and optional query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }
}

/// An HTTP response described as plain data.
///
/// Produced by the transport that executed the request; decorators inspect
/// it by reference and hand it to the caller fully intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
