//! Client-side core for a small inventory service.
//!
//! # Overview
//! Three independent pieces: a request gateway that normalizes headers,
//! decodes JSON bodies and turns non-2xx statuses into typed errors; an
//! `ItemsClient` with the five REST wrappers over `/api/items`; and UI
//! helpers (tooltip lifecycle binding, timestamp formatter, validated
//! settings loader).
//!
//! # Design
//! - External effects live behind capabilities: the network round-trip
//!   behind `HttpTransport`, the preference store behind `SettingsStore`,
//!   the widget library behind `TooltipNode`/`WidgetInstance`. Tests inject
//!   doubles; hosts inject the real thing.
//! - `prepare_request`/`decode_response` are pure functions over plain data,
//!   so the wire contract is testable without a socket.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod format;
pub mod gateway;
pub mod http;
pub mod settings;
pub mod tooltip;
pub mod transport;
pub mod types;

pub use client::ItemsClient;
pub use error::RequestError;
pub use format::format_timestamp;
pub use gateway::{Gateway, Payload, RequestOptions};
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use settings::{load_settings, MemoryStore, Settings, SettingsStore, SortKey};
pub use tooltip::{TooltipBinding, TooltipNode, WidgetConfig, WidgetInstance};
pub use transport::UreqTransport;
pub use types::{DeleteReceipt, Item, ItemFilter, ItemPatch, NewItem};
