//! REST call wrappers for the items resource.
//!
//! # Design
//! `ItemsClient` holds only a trailing-slash-trimmed base URL and a gateway;
//! it carries no state between calls. Each operation builds a URL (and query
//! string) plus `RequestOptions`, delegates the round-trip to the gateway,
//! and decodes the payload into the domain type. Any 2xx status is success
//! uniformly; the gateway handles the 204/empty-body case.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::error::RequestError;
use crate::gateway::{Gateway, Payload, RequestOptions};
use crate::http::{HttpMethod, HttpTransport};
use crate::types::{DeleteReceipt, Item, ItemFilter, ItemPatch, NewItem};

/// Everything outside the query-safe unreserved set gets percent-escaped.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Client for the `/api/items` collection.
#[derive(Debug, Clone)]
pub struct ItemsClient<T> {
    base_url: String,
    gateway: Gateway<T>,
}

impl<T: HttpTransport> ItemsClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            gateway: Gateway::new(transport),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/items", self.base_url)
    }

    fn member_url(&self, id: i64) -> String {
        format!("{}/api/items/{id}", self.base_url)
    }

    /// GET `/api/items`, optionally filtered by name substring.
    pub fn list(&self, filter: &ItemFilter) -> Result<Vec<Item>, RequestError> {
        let url = format!(
            "{}{}",
            self.collection_url(),
            query_string(&[("name", filter.name.as_deref())])
        );
        let payload = self.gateway.request(&url, RequestOptions::default())?;
        decode_json(payload)
    }

    /// GET `/api/items/{id}`.
    pub fn get(&self, id: i64) -> Result<Item, RequestError> {
        let payload = self
            .gateway
            .request(&self.member_url(id), RequestOptions::default())?;
        decode_json(payload)
    }

    /// POST `/api/items`. The server assigns the id and timestamp.
    pub fn create(&self, input: &NewItem) -> Result<Item, RequestError> {
        let body = serde_json::to_string(input).map_err(|e| RequestError::Encode(e.to_string()))?;
        let payload = self.gateway.request(
            &self.collection_url(),
            RequestOptions {
                method: HttpMethod::Post,
                body: Some(body),
                ..Default::default()
            },
        )?;
        decode_json(payload)
    }

    /// PATCH `/api/items/{id}` with a partial payload.
    pub fn update(&self, id: i64, patch: &ItemPatch) -> Result<Item, RequestError> {
        let body = serde_json::to_string(patch).map_err(|e| RequestError::Encode(e.to_string()))?;
        let payload = self.gateway.request(
            &self.member_url(id),
            RequestOptions {
                method: HttpMethod::Patch,
                body: Some(body),
                ..Default::default()
            },
        )?;
        decode_json(payload)
    }

    /// DELETE `/api/items/{id}`. Returns the server's confirmation body, or
    /// `None` when it answers 204 / with an empty body.
    pub fn delete(&self, id: i64) -> Result<Option<DeleteReceipt>, RequestError> {
        let payload = self.gateway.request(
            &self.member_url(id),
            RequestOptions {
                method: HttpMethod::Delete,
                ..Default::default()
            },
        )?;
        match payload {
            None => Ok(None),
            Some(payload) => decode_payload(payload).map(Some),
        }
    }
}

/// Build a query string from optional parameters. Absent and empty values
/// are excluded entirely; without any qualifying key the result is `""`
/// (no `?`).
fn query_string(pairs: &[(&str, Option<&str>)]) -> String {
    let mut out = String::new();
    for (key, value) in pairs {
        let Some(value) = value else { continue };
        if value.is_empty() {
            continue;
        }
        out.push(if out.is_empty() { '?' } else { '&' });
        out.push_str(&utf8_percent_encode(key, QUERY).to_string());
        out.push('=');
        out.push_str(&utf8_percent_encode(value, QUERY).to_string());
    }
    out
}

fn decode_json<D: DeserializeOwned>(payload: Option<Payload>) -> Result<D, RequestError> {
    match payload {
        Some(payload) => decode_payload(payload),
        None => Err(RequestError::Decode("empty response body".to_string())),
    }
}

fn decode_payload<D: DeserializeOwned>(payload: Payload) -> Result<D, RequestError> {
    match payload {
        Payload::Json(value) => {
            serde_json::from_value(value).map_err(|e| RequestError::Decode(e.to_string()))
        }
        Payload::Text(_) => Err(RequestError::Decode("expected a JSON body".to_string())),
    }
}
