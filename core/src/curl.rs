//! Transport decorator that renders each request as a curl command.

use std::sync::Arc;

use url::Url;

use crate::error::{RenderError, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{resolve_transport, Transport};

/// Receives the rendered curl command (or, if rendering failed, the
/// failure's message) once per `send`.
pub type CurlHandler = Box<dyn Fn(&str) + Send + Sync>;

/// Wraps a transport to report each request as an equivalent curl
/// invocation for manual reproduction.
///
/// The command is reported before the delegate call is issued: it reflects
/// what was asked for, regardless of how the network exchange turns out.
/// Without a handler the decorator is pure delegation.
pub struct CurlTransport {
    root: Option<Arc<dyn Transport>>,
    handler: Option<CurlHandler>,
}

impl CurlTransport {
    pub fn new(handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            root: None,
            handler: Some(Box::new(handler)),
        }
    }

    /// A decorator with no handler: delegates untouched, renders nothing.
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

impl Transport for CurlTransport {
    fn send(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let transport = resolve_transport(&self.root);

        let Some(handler) = &self.handler else {
            return transport.send(req);
        };

        match curl_command(req) {
            Ok(cmd) => handler(&cmd),
            Err(e) => handler(&e.to_string()),
        }

        transport.send(req)
    }
}

/// Render a request as a single-line curl invocation:
/// `curl -X '<METHOD>' [-d '<body>'] [-H '<name>: <value>']... '<url>'`.
///
/// Header flags are sorted by name so the output is deterministic; the URL
/// is always the final argument.
pub fn curl_command(req: &HttpRequest) -> Result<String, RenderError> {
    Url::parse(&req.url).map_err(|e| RenderError::Url(format!("{}: {e}", req.url)))?;

    let mut parts = vec![
        "curl".to_string(),
        "-X".to_string(),
        shell_quote(req.method.as_str()),
    ];

    if let Some(body) = &req.body {
        parts.push("-d".to_string());
        parts.push(shell_quote(body));
    }

    let mut headers = req.headers.clone();
    headers.sort_by(|a, b| a.0.cmp(&b.0));
    for (name, value) in &headers {
        parts.push("-H".to_string());
        parts.push(shell_quote(&format!("{name}: {value}")));
    }

    parts.push(shell_quote(&req.url));
    Ok(parts.join(" "))
}

/// Wrap an argument in single quotes, escaping embedded single quotes the
/// way a POSIX shell requires (`'` closes, `\'` emits, `'` reopens).
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
