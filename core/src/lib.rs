//! Instrumentation decorators for a synchronous HTTP transport layer.
//!
//! # Overview
//! Two transparent wrappers around the `Transport` capability:
//! `DumpTransport` captures wire-format text of each request/response pair,
//! `CurlTransport` renders each request as an equivalent curl command.
//! Both forward the real exchange to a delegate transport unchanged and
//! report their text through caller-supplied callbacks; the caller always
//! receives the authentic outcome of the request.
//!
//! # Design
//! - Decorators implement the same `Transport` trait they wrap, so they
//!   chain to arbitrary depth.
//! - A decorator holds only immutable configuration (delegate + handler);
//!   instances are safe to share across threads and reuse across calls.
//! - No configured delegate means the process-wide default transport, a
//!   lazily initialized `ureq` agent.
//! - A missing handler short-circuits to pure delegation: no rendering
//!   work, no callback.
//! - Rendering failures become the reported text; they never abort or
//!   alter the real request.

pub mod curl;
pub mod dump;
pub mod error;
pub mod http;
pub mod render;
pub mod transport;

pub use curl::{curl_command, CurlHandler, CurlTransport};
pub use dump::{DumpHandler, DumpTransport};
pub use error::{RenderError, TransportError};
pub use http::{HttpRequest, HttpResponse, Method};
pub use render::{dump_request, dump_response};
pub use transport::{default_transport, resolve_transport, Transport, UreqTransport};
