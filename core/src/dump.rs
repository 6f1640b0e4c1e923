//! Transport decorator that captures request/response wire dumps.

use std::sync::Arc;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::render::{dump_request, dump_response};
use crate::transport::{resolve_transport, Transport};

/// Receives `(request_text, response_text)` once per `send`. The response
/// text is empty when the round-trip failed before a response existed.
pub type DumpHandler = Box<dyn Fn(&str, &str) + Send + Sync>;

/// Wraps a transport to capture wire-format dumps of each exchange.
///
/// The dump is reported after the delegate call completes, so it reflects
/// the actual outcome. Without a handler the decorator is pure delegation
/// and performs no rendering work.
pub struct DumpTransport {
    root: Option<Arc<dyn Transport>>,
    handler: Option<DumpHandler>,
}

impl DumpTransport {
    pub fn new(handler: impl Fn(&str, &str) + Send + Sync + 'static) -> Self {
        Self {
            root: None,
            handler: Some(Box::new(handler)),
        }
    }

    /// A decorator with no handler: delegates untouched, dumps nothing.
    pub fn passthrough() -> Self {
        Self {
            root: None,
            handler: None,
        }
    }

    /// Set the transport to delegate to. Without this the process-wide
    /// default transport is used.
    pub fn with_root(mut self, root: Arc<dyn Transport>) -> Self {
        self.root = Some(root);
        self
    }
}

impl Transport for DumpTransport {
    fn send(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let transport = resolve_transport(&self.root);

        let Some(handler) = &self.handler else {
            return transport.send(req);
        };

        // A failed render must never abort the real request; its message
        // becomes the dump text instead.
        let req_dump = match dump_request(req) {
            Ok(text) => text,
            Err(e) => e.to_string(),
        };

        let result = transport.send(req);

        let resp_dump = match &result {
            Ok(resp) => dump_response(resp),
            Err(_) => String::new(),
        };

        handler(&req_dump, &resp_dump);

        result
    }
}
