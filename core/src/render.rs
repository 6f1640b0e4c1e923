//! Wire-format textual rendering of requests and responses.
//!
//! # Design
//! Dumps mirror the HTTP/1.1 on-the-wire shape: start line, `\r\n`-separated
//! header lines, a blank line, then the body. The output is meant for eyes
//! and for pasting into other tools, so headers keep the caller's order and
//! nothing is elided. A request dump synthesizes the `Host` line from the
//! absolute URL, which is the one place rendering can fail — a URL that
//! cannot be parsed into host and path yields a `RenderError`.

use url::Url;

use crate::error::RenderError;
use crate::http::{HttpRequest, HttpResponse};

/// Render the outgoing request as HTTP/1.1 wire text.
pub fn dump_request(req: &HttpRequest) -> Result<String, RenderError> {
    let url = Url::parse(&req.url).map_err(|e| RenderError::Url(format!("{}: {e}", req.url)))?;
    let host = url
        .host_str()
        .ok_or_else(|| RenderError::Url(format!("{}: no host", req.url)))?;

    let mut target = url.path().to_string();
    if let Some(query) = url.query() {
        target.push('?');
        target.push_str(query);
    }

    let mut out = format!("{} {} HTTP/1.1\r\n", req.method.as_str(), target);
    match url.port() {
        Some(port) => out.push_str(&format!("Host: {host}:{port}\r\n")),
        None => out.push_str(&format!("Host: {host}\r\n")),
    }
    for (name, value) in &req.headers {
        out.push_str(&format!("{name}: {value}\r\n"));
    }
    out.push_str("\r\n");
    if let Some(body) = &req.body {
        out.push_str(body);
    }
    Ok(out)
}

/// Render the incoming response as HTTP/1.1 wire text.
///
/// Responses are plain data with no URL to parse, so this cannot fail.
pub fn dump_response(resp: &HttpResponse) -> String {
    let mut out = match reason_phrase(resp.status) {
        Some(reason) => format!("HTTP/1.1 {} {reason}\r\n", resp.status),
        None => format!("HTTP/1.1 {}\r\n", resp.status),
    };
    for (name, value) in &resp.headers {
        out.push_str(&format!("{name}: {value}\r\n"));
    }
    out.push_str("\r\n");
    out.push_str(&resp.body);
    out
}

/// Canonical reason phrases for the statuses a dump reader actually meets.
fn reason_phrase(status: u16) -> Option<&'static str> {
    match status {
        200 => Some("OK"),
        201 => Some("Created"),
        202 => Some("Accepted"),
        204 => Some("No Content"),
        301 => Some("Moved Permanently"),
        302 => Some("Found"),
        304 => Some("Not Modified"),
        400 => Some("Bad Request"),
        401 => Some("Unauthorized"),
        403 => Some("Forbidden"),
        404 => Some("Not Found"),
        405 => Some("Method Not Allowed"),
        409 => Some("Conflict"),
        422 => Some("Unprocessable Entity"),
        429 => Some("Too Many Requests"),
        500 => Some("Internal Server Error"),
        502 => Some("Bad Gateway"),
        503 => Some("Service Unavailable"),
        504 => Some("Gateway Timeout"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;

    #[test]
    fn request_dump_has_request_line_host_and_headers() {
        let req = HttpRequest::new(Method::Get, "http://example.test/items?limit=5")
            .with_header("Accept", "application/json");
        let dump = dump_request(&req).unwrap();
        assert_eq!(
            dump,
            "GET /items?limit=5 HTTP/1.1\r\nHost: example.test\r\nAccept: application/json\r\n\r\n"
        );
    }

    #[test]
    fn request_dump_includes_port_and_body() {
        let req = HttpRequest::new(Method::Post, "http://localhost:3000/echo")
            .with_header("Content-Type", "application/json")
            .with_body(r#"{"name":"alpha"}"#);
        let dump = dump_request(&req).unwrap();
        assert!(dump.starts_with("POST /echo HTTP/1.1\r\nHost: localhost:3000\r\n"));
        assert!(dump.ends_with("\r\n\r\n{\"name\":\"alpha\"}"));
    }

    #[test]
    fn request_dump_defaults_empty_path_to_slash() {
        let req = HttpRequest::new(Method::Get, "http://example.test");
        let dump = dump_request(&req).unwrap();
        assert!(dump.starts_with("GET / HTTP/1.1\r\n"));
    }

    #[test]
    fn request_dump_preserves_header_order() {
        let req = HttpRequest::new(Method::Get, "http://example.test/")
            .with_header("X-Second", "2")
            .with_header("X-First", "1");
        let dump = dump_request(&req).unwrap();
        let second = dump.find("X-Second").unwrap();
        let first = dump.find("X-First").unwrap();
        assert!(second < first, "caller order must survive: {dump}");
    }

    #[test]
    fn request_dump_fails_on_relative_url() {
        let req = HttpRequest::new(Method::Get, "/items?limit=5");
        let err = dump_request(&req).unwrap_err();
        assert!(err.to_string().contains("invalid request url"));
    }

    #[test]
    fn response_dump_has_status_line_headers_and_body() {
        let resp = HttpResponse {
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: "[]".to_string(),
        };
        assert_eq!(
            dump_response(&resp),
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\r\n[]"
        );
    }

    #[test]
    fn response_dump_renders_unknown_status_without_reason() {
        let resp = HttpResponse {
            status: 599,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(dump_response(&resp).starts_with("HTTP/1.1 599\r\n"));
    }
}
