//! HTTP transport types and the transport capability.
//!
//! # Design
//! Requests and responses are plain data. The gateway builds `HttpRequest`
//! values and interprets `HttpResponse` values; the single network round-trip
//! in between happens behind the `HttpTransport` trait, so tests can inject a
//! recording or canned-response double and never open a socket.
//!
//! All fields use owned types (`String`, `Vec`) so values can be captured and
//! compared freely in test doubles.

use std::fmt;

use crate::error::RequestError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Patch,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// An HTTP request described as plain data.
///
/// Built by `gateway::prepare_request`. Header names are lowercase; a
/// caller-supplied header replaces the computed default of the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by an `HttpTransport` implementation and consumed by
/// `gateway::decode_response`. `status_text` is the reason phrase and may be
/// empty (HTTP/2 has none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

/// The capability that performs the actual network round-trip.
///
/// Implementations must return non-2xx responses as data, not as errors;
/// status interpretation belongs to the gateway. `Err` is reserved for the
/// transport itself failing (connection refused, DNS, read error).
pub trait HttpTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError>;
}
