//! Blocking ureq transport.
//!
//! Configures the agent with `http_status_as_error(false)` so 4xx/5xx
//! responses come back as data rather than `Err`, leaving status
//! interpretation to the gateway.

use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// Production `HttpTransport` over a reusable ureq agent.
#[derive(Clone)]
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

impl HttpTransport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError> {
        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => {
                let mut call = self.agent.get(&request.url);
                for (name, value) in &request.headers {
                    call = call.header(name, value);
                }
                call.call()
            }
            (HttpMethod::Delete, _) => {
                let mut call = self.agent.delete(&request.url);
                for (name, value) in &request.headers {
                    call = call.header(name, value);
                }
                call.call()
            }
            (HttpMethod::Post, body) => {
                let mut call = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    call = call.header(name, value);
                }
                match body {
                    Some(body) => call.send(body.as_bytes()),
                    None => call.send_empty(),
                }
            }
            (HttpMethod::Patch, body) => {
                let mut call = self.agent.patch(&request.url);
                for (name, value) in &request.headers {
                    call = call.header(name, value);
                }
                match body {
                    Some(body) => call.send(body.as_bytes()),
                    None => call.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| RequestError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
