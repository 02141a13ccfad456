//! Domain DTOs for the inventory API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently of
//! the mock-server crate; integration tests catch any drift between the two.
//! Wire names are camelCase to match the backend's JSON. Partial payloads
//! omit absent fields entirely (`skip_serializing_if`) so the server can tell
//! "not supplied" from "set to null".

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single inventory item returned by the API.
///
/// `last_updated` is server-maintained and refreshed on every write; the
/// backend serializes it as a zone-less ISO-8601 string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub amount: i64,
    pub unit: String,
    pub last_updated: NaiveDateTime,
}

/// Request payload for creating a new item. The server assigns the id and
/// the timestamp; `unit` may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Request payload for partially updating an item. Only the fields present
/// in the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Optional query parameters for listing items. A key reaches the query
/// string only when present and non-empty.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Case-insensitive substring match on the item name.
    pub name: Option<String>,
}

/// Server-defined confirmation body for a delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteReceipt {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
