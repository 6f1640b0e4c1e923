//! The transport capability and the process-wide default transport.
//!
//! # Design
//! `Transport` is the single seam of this crate: "take a request, produce a
//! response or a transport failure." The real network transport implements
//! it, and so does every decorator, which is what makes decorators
//! chainable — each one holds the next `Transport` and adds an observable
//! side effect without changing the result.
//!
//! The default transport is a lazily initialized process-wide `ureq` agent.
//! It is configured with `http_status_as_error(false)` so 4xx/5xx responses
//! come back as data; only connect/IO/protocol failures become errors.

use std::sync::{Arc, OnceLock};

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, Method};

/// The capability decorators wrap and implement: execute one HTTP
/// round-trip synchronously.
///
/// Implementations hold no per-call state, so a shared instance may be used
/// from multiple threads concurrently.
pub trait Transport: Send + Sync {
    fn send(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Real network transport backed by a `ureq::Agent`.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply caller headers to a request builder of either body typestate.
fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn send(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = req.url.as_str();
        // Bodies on GET/HEAD/DELETE are dropped; ureq builds those methods
        // without a body and the mock server never expects one.
        let result = match (req.method, req.body.as_deref()) {
            (Method::Get, _) => with_headers(self.agent.get(url), &req.headers).call(),
            (Method::Head, _) => with_headers(self.agent.head(url), &req.headers).call(),
            (Method::Delete, _) => with_headers(self.agent.delete(url), &req.headers).call(),
            (Method::Post, Some(body)) => {
                with_headers(self.agent.post(url), &req.headers).send(body.as_bytes())
            }
            (Method::Post, None) => with_headers(self.agent.post(url), &req.headers).send_empty(),
            (Method::Put, Some(body)) => {
                with_headers(self.agent.put(url), &req.headers).send(body.as_bytes())
            }
            (Method::Put, None) => with_headers(self.agent.put(url), &req.headers).send_empty(),
            (Method::Patch, Some(body)) => {
                with_headers(self.agent.patch(url), &req.headers).send(body.as_bytes())
            }
            (Method::Patch, None) => with_headers(self.agent.patch(url), &req.headers).send_empty(),
        };

        let mut response = result.map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

static DEFAULT_TRANSPORT: OnceLock<UreqTransport> = OnceLock::new();

/// The process-wide default transport, initialized on first use and shared
/// read-only for the rest of the process lifetime.
pub fn default_transport() -> &'static dyn Transport {
    DEFAULT_TRANSPORT.get_or_init(UreqTransport::new)
}

/// Resolve a decorator's delegate: the configured transport if present,
/// otherwise the process-wide default.
pub fn resolve_transport(root: &Option<Arc<dyn Transport>>) -> &dyn Transport {
    match root {
        Some(transport) => transport.as_ref(),
        None => default_transport(),
    }
}
