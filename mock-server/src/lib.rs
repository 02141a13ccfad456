//! In-memory inventory API used as a test harness for the client core.
//!
//! Mirrors the real backend's observable behavior: camelCase JSON, integer
//! ids, case-insensitive name filtering, 409 with a `{success, message}`
//! body on duplicate names, an empty-body 404 on get, and a fresh
//! `lastUpdated` stamp on every write.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub amount: i64,
    pub unit: String,
    pub last_updated: NaiveDateTime,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub name: String,
    pub amount: i64,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub amount: Option<i64>,
    pub unit: Option<String>,
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
}

#[derive(Default)]
pub struct Store {
    items: HashMap<i64, Item>,
    next_id: i64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db = Db::default();
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/{id}",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

fn error_body(message: &str) -> Json<Value> {
    Json(json!({ "success": false, "message": message }))
}

fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, error_body("Item not found"))
}

fn name_conflict() -> (StatusCode, Json<Value>) {
    (StatusCode::CONFLICT, error_body("Item name already exists"))
}

async fn list_items(State(db): State<Db>, Query(query): Query<ListQuery>) -> Json<Vec<Item>> {
    let store = db.read().await;
    let mut items: Vec<Item> = match query.name.as_deref() {
        Some(needle) if !needle.is_empty() => {
            let needle = needle.to_lowercase();
            store
                .items
                .values()
                .filter(|item| item.name.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }
        _ => store.items.values().cloned().collect(),
    };
    // Deterministic order for clients and tests.
    items.sort_by_key(|item| item.id);
    Json(items)
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<CreateItem>,
) -> Result<(StatusCode, Json<Item>), (StatusCode, Json<Value>)> {
    if input.name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "name must not be blank" })),
        ));
    }

    let mut store = db.write().await;
    if store.items.values().any(|item| item.name == input.name) {
        return Err(name_conflict());
    }

    store.next_id += 1;
    let item = Item {
        id: store.next_id,
        name: input.name,
        amount: input.amount,
        unit: input.unit.unwrap_or_default(),
        last_updated: now(),
    };
    store.items.insert(item.id, item.clone());
    Ok((StatusCode::CREATED, Json(item)))
}

async fn get_item(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Item>, StatusCode> {
    let store = db.read().await;
    // 404 with an empty body, like the real backend.
    store.items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateItem>,
) -> Result<Json<Item>, (StatusCode, Json<Value>)> {
    let mut store = db.write().await;
    if !store.items.contains_key(&id) {
        return Err(not_found());
    }
    if let Some(name) = input.name.as_deref() {
        if store.items.values().any(|other| other.id != id && other.name == name) {
            return Err(name_conflict());
        }
    }

    let item = store.items.get_mut(&id).ok_or_else(not_found)?;
    if let Some(name) = input.name {
        item.name = name;
    }
    if let Some(amount) = input.amount {
        item.amount = amount;
    }
    if let Some(unit) = input.unit {
        item.unit = unit;
    }
    item.last_updated = now();
    Ok(Json(item.clone()))
}

async fn delete_item(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut store = db.write().await;
    match store.items.remove(&id) {
        Some(_) => Ok(Json(json!({ "success": true, "message": "Item deleted" }))),
        None => Err(not_found()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample_item() -> Item {
        Item {
            id: 1,
            name: "Work gloves".to_string(),
            amount: 3,
            unit: "pairs".to_string(),
            last_updated: NaiveDate::from_ymd_opt(2026, 8, 6)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn item_serializes_with_camel_case_timestamp() {
        let json = serde_json::to_value(sample_item()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Work gloves");
        assert_eq!(json["amount"], 3);
        assert_eq!(json["unit"], "pairs");
        assert_eq!(json["lastUpdated"], "2026-08-06T10:30:00");
        assert!(json.get("last_updated").is_none());
    }

    #[test]
    fn item_roundtrips_through_json() {
        let item = sample_item();
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, item.id);
        assert_eq!(back.name, item.name);
        assert_eq!(back.last_updated, item.last_updated);
    }

    #[test]
    fn create_item_defaults_unit_to_absent() {
        let input: CreateItem = serde_json::from_str(r#"{"name":"Soap","amount":2}"#).unwrap();
        assert_eq!(input.name, "Soap");
        assert_eq!(input.amount, 2);
        assert!(input.unit.is_none());
    }

    #[test]
    fn create_item_rejects_missing_name() {
        let result: Result<CreateItem, _> = serde_json::from_str(r#"{"amount":2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_item_all_fields_optional() {
        let input: UpdateItem = serde_json::from_str("{}").unwrap();
        assert!(input.name.is_none());
        assert!(input.amount.is_none());
        assert!(input.unit.is_none());
    }

    #[test]
    fn update_item_partial_fields() {
        let input: UpdateItem = serde_json::from_str(r#"{"amount":7}"#).unwrap();
        assert!(input.name.is_none());
        assert_eq!(input.amount, Some(7));
    }
}
