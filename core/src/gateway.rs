//! The single chokepoint every network call passes through.
//!
//! # Design
//! Split the teacher-pattern way: `prepare_request` and `decode_response`
//! are pure functions over plain data, and `Gateway::request` is the thin
//! composition that inserts exactly one `HttpTransport::execute` between
//! them. Header rules, body decoding and error-message extraction are all
//! unit-testable without a socket.
//!
//! A response body is decoded into the `Payload` tagged union: JSON when it
//! parses, raw text otherwise. Malformed JSON on a successful response is
//! not an error; it degrades to `Payload::Text`.

use serde_json::Value;

use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

const ACCEPT: &str = "accept";
const CONTENT_TYPE: &str = "content-type";
const APPLICATION_JSON: &str = "application/json";

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }
}

/// Options bag for a single request. `Default` is a GET with no headers and
/// no body.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Build the outgoing request: `accept: application/json` always,
/// `content-type: application/json` only when a body is present and the
/// caller did not supply one, caller headers last with highest precedence
/// (a caller header replaces a computed default of the same name).
pub fn prepare_request(url: &str, options: RequestOptions) -> HttpRequest {
    let mut headers: Vec<(String, String)> =
        vec![(ACCEPT.to_string(), APPLICATION_JSON.to_string())];
    let caller_sets_content_type = options
        .headers
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case(CONTENT_TYPE));
    if options.body.is_some() && !caller_sets_content_type {
        headers.push((CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()));
    }
    for (name, value) in options.headers {
        headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        headers.push((name, value));
    }

    HttpRequest {
        method: options.method,
        url: url.to_string(),
        headers,
        body: options.body,
    }
}

/// Interpret a response.
///
/// 2xx: `Ok(None)` for status 204 or an empty body, else `Ok(Some(payload))`.
/// Anything else: `Err(RequestError::Failure)` carrying the status, the
/// resolved message and the decoded body as detail.
pub fn decode_response(response: HttpResponse) -> Result<Option<Payload>, RequestError> {
    let HttpResponse { status, status_text, body } = response;

    let payload = if body.is_empty() {
        None
    } else {
        Some(match serde_json::from_str::<Value>(&body) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Text(body),
        })
    };

    if !(200..300).contains(&status) {
        let message = failure_message(status, &status_text, payload.as_ref());
        return Err(RequestError::Failure { status, message, detail: payload });
    }

    if status == 204 {
        return Ok(None);
    }
    Ok(payload)
}

/// Resolve the error message in priority order: body `message` field, body
/// `error` field (non-empty strings only), HTTP status text, synthesized
/// `HTTP <status>`.
fn failure_message(status: u16, status_text: &str, payload: Option<&Payload>) -> String {
    if let Some(Payload::Json(Value::Object(body))) = payload {
        for field in ["message", "error"] {
            if let Some(text) = body.get(field).and_then(Value::as_str) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    if !status_text.is_empty() {
        return status_text.to_string();
    }
    format!("HTTP {status}")
}

/// The gateway: one transport call per invocation, no retries, no caching.
#[derive(Debug, Clone)]
pub struct Gateway<T> {
    transport: T,
}

impl<T: HttpTransport> Gateway<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn request(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Option<Payload>, RequestError> {
        let request = prepare_request(url, options);
        tracing::debug!(method = %request.method, url = %request.url, "issuing request");
        let response = self.transport.execute(&request)?;
        tracing::debug!(status = response.status, "response received");
        decode_response(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, status_text: &str, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn prepare_sets_accept_only_without_body() {
        let req = prepare_request("http://x/api/items", RequestOptions::default());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.headers, vec![("accept".to_string(), "application/json".to_string())]);
        assert!(req.body.is_none());
    }

    #[test]
    fn prepare_adds_content_type_for_body() {
        let req = prepare_request(
            "http://x/api/items",
            RequestOptions {
                method: HttpMethod::Post,
                body: Some("{}".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(
            req.headers,
            vec![
                ("accept".to_string(), "application/json".to_string()),
                ("content-type".to_string(), "application/json".to_string()),
            ]
        );
    }

    #[test]
    fn prepare_keeps_caller_content_type() {
        let req = prepare_request(
            "http://x/upload",
            RequestOptions {
                method: HttpMethod::Post,
                headers: vec![("Content-Type".to_string(), "text/csv".to_string())],
                body: Some("a,b".to_string()),
            },
        );
        assert_eq!(
            req.headers,
            vec![
                ("accept".to_string(), "application/json".to_string()),
                ("Content-Type".to_string(), "text/csv".to_string()),
            ]
        );
    }

    #[test]
    fn prepare_caller_header_replaces_default() {
        let req = prepare_request(
            "http://x/api/items",
            RequestOptions {
                headers: vec![("accept".to_string(), "text/plain".to_string())],
                ..Default::default()
            },
        );
        assert_eq!(req.headers, vec![("accept".to_string(), "text/plain".to_string())]);
    }

    #[test]
    fn prepare_appends_custom_headers() {
        let req = prepare_request(
            "http://x/api/items",
            RequestOptions {
                headers: vec![("x-request-id".to_string(), "42".to_string())],
                ..Default::default()
            },
        );
        assert_eq!(
            req.headers,
            vec![
                ("accept".to_string(), "application/json".to_string()),
                ("x-request-id".to_string(), "42".to_string()),
            ]
        );
    }

    #[test]
    fn decode_204_returns_none() {
        let result = decode_response(response(204, "No Content", "")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn decode_204_ignores_body() {
        let result = decode_response(response(204, "No Content", "ignored")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn decode_empty_200_returns_none() {
        let result = decode_response(response(200, "OK", "")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn decode_json_success() {
        let result = decode_response(response(200, "OK", r#"{"id":1}"#)).unwrap();
        let payload = result.unwrap();
        assert_eq!(payload.as_json().unwrap()["id"], 1);
    }

    #[test]
    fn decode_malformed_json_degrades_to_text() {
        let result = decode_response(response(200, "OK", "not json")).unwrap();
        assert_eq!(result, Some(Payload::Text("not json".to_string())));
    }

    #[test]
    fn failure_prefers_body_message() {
        let err =
            decode_response(response(409, "Conflict", r#"{"message":"Item name already exists"}"#))
                .unwrap_err();
        match err {
            RequestError::Failure { status, message, detail } => {
                assert_eq!(status, 409);
                assert_eq!(message, "Item name already exists");
                assert!(detail.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failure_falls_back_to_error_field() {
        let err =
            decode_response(response(400, "Bad Request", r#"{"error":"name must not be blank"}"#))
                .unwrap_err();
        match err {
            RequestError::Failure { message, .. } => assert_eq!(message, "name must not be blank"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failure_skips_empty_message_field() {
        let err = decode_response(response(400, "Bad Request", r#"{"message":"","error":"boom"}"#))
            .unwrap_err();
        match err {
            RequestError::Failure { message, .. } => assert_eq!(message, "boom"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failure_falls_back_to_status_text() {
        let err = decode_response(response(404, "Not Found", "gone")).unwrap_err();
        match err {
            RequestError::Failure { message, detail, .. } => {
                assert_eq!(message, "Not Found");
                assert_eq!(detail, Some(Payload::Text("gone".to_string())));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failure_synthesizes_message_as_last_resort() {
        let err = decode_response(response(502, "", "")).unwrap_err();
        match err {
            RequestError::Failure { message, detail, .. } => {
                assert_eq!(message, "HTTP 502");
                assert!(detail.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failure_always_raised_for_non_2xx_json() {
        // Even a parseable body does not rescue a failing status.
        let err = decode_response(response(500, "Internal Server Error", r#"{"ok":false}"#))
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
