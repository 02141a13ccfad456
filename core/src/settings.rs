//! Persisted display preferences.
//!
//! # Design
//! The key-value store is an injected capability rather than an ambient
//! global, so hosts can back it with browser localStorage, a config file, or
//! the in-memory double below. `load_settings` re-reads the store on every
//! call; invalid or out-of-constraint values fall back to defaults key by
//! key, and the returned value always satisfies
//! `red_threshold < yellow_threshold`.

use std::collections::HashMap;

const SORT_BY_KEY: &str = "sortBy";
const YELLOW_THRESHOLD_KEY: &str = "yellowThreshold";
const RED_THRESHOLD_KEY: &str = "redThreshold";

pub const DEFAULT_YELLOW_THRESHOLD: f64 = 10.0;
pub const DEFAULT_RED_THRESHOLD: f64 = 5.0;

/// Read access to the persisted preference store.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// HashMap-backed store, for tests and embedded hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Sort order for item listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Id,
    Amount,
}

/// Validated display preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub sort_by: SortKey,
    pub yellow_threshold: f64,
    pub red_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            sort_by: SortKey::Id,
            yellow_threshold: DEFAULT_YELLOW_THRESHOLD,
            red_threshold: DEFAULT_RED_THRESHOLD,
        }
    }
}

/// Read and validate the three preference keys.
///
/// - `sortBy`: `"id"` or `"amount"`, else `Id`.
/// - `yellowThreshold`: finite and > 0, else 10.
/// - `redThreshold`: finite, > 0 and strictly below the resolved yellow
///   threshold, else 5. When even the default would not sit below a custom
///   yellow threshold, half the yellow threshold is used instead, so the
///   invariant holds for every store content.
pub fn load_settings(store: &dyn SettingsStore) -> Settings {
    let sort_by = match store.get(SORT_BY_KEY).as_deref() {
        Some("amount") => SortKey::Amount,
        _ => SortKey::Id,
    };

    let yellow_threshold = store
        .get(YELLOW_THRESHOLD_KEY)
        .and_then(|raw| parse_positive(&raw))
        .unwrap_or(DEFAULT_YELLOW_THRESHOLD);

    let red_threshold = store
        .get(RED_THRESHOLD_KEY)
        .and_then(|raw| parse_positive(&raw))
        .filter(|n| *n < yellow_threshold)
        .unwrap_or(if DEFAULT_RED_THRESHOLD < yellow_threshold {
            DEFAULT_RED_THRESHOLD
        } else {
            yellow_threshold / 2.0
        });

    Settings { sort_by, yellow_threshold, red_threshold }
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}
