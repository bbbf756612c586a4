//! Saved opportunity-board filters.
//!
//! Stored record (one per user, key `opportunityFilters:<user_id>`):
//!
//! ```json
//! { "location": "Kigali", "salary": 500000, "types": ["full-time"],
//!   "departments": ["engineering"], "sort": "newest" }
//! ```
//!
//! There is no schema version. Decoding is lenient per field: anything
//! absent, mistyped or unknown falls back to its default, and a record that
//! is not JSON at all decodes to the unfiltered default state.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::listing::{parse_compensation, FilterCriteria, SortKey};
use crate::storage::{user_key, KeyValueStore};

pub const PREFERENCES_KEY: &str = "opportunityFilters";

/// Filter and sort selection restored when the board loads.
/// The free-text search term is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingPreferences {
    pub criteria: FilterCriteria,
    /// Raw sort selection; unknown values are kept and mean identity order.
    pub sort: String,
}

impl Default for ListingPreferences {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortKey::DEFAULT.as_str().to_string(),
        }
    }
}

impl ListingPreferences {
    pub fn sort_key(&self) -> Option<SortKey> {
        SortKey::parse(&self.sort)
    }

    /// Applies the same cleanup `from_record` does, so what is used now is
    /// exactly what a later load restores: trimmed location and sort (blank
    /// meaning unset / default) and trimmed, non-empty tags.
    pub fn normalized(mut self) -> Self {
        let criteria = &mut self.criteria;
        criteria.location = criteria
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);
        criteria.types = clean_tags(&criteria.types);
        criteria.categories = clean_tags(&criteria.categories);

        let sort = self.sort.trim();
        self.sort = if sort.is_empty() {
            SortKey::DEFAULT.as_str().to_string()
        } else {
            sort.to_string()
        };
        self
    }

    /// Encodes the stored record shape.
    pub fn to_record(&self) -> Value {
        let salary = match self.criteria.max_compensation {
            Some(max) => json!(max),
            None => json!(""),
        };
        json!({
            "location": self.criteria.location.clone().unwrap_or_default(),
            "salary": salary,
            "types": self.criteria.types,
            "departments": self.criteria.categories,
            "sort": self.sort,
        })
    }

    /// Decodes a stored record, recovering defaults for anything malformed.
    pub fn from_record(raw: &str) -> Self {
        let value: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => {
                warn!("Ignoring malformed filter preferences: {e}");
                return Self::default();
            }
        };
        let Some(record) = value.as_object() else {
            warn!("Ignoring filter preferences that are not a JSON object");
            return Self::default();
        };

        let location = string_field(record, "location");
        let max_compensation = record.get("salary").and_then(salary_bound);
        let sort = string_field(record, "sort").unwrap_or_else(|| SortKey::DEFAULT.as_str().to_string());

        Self {
            criteria: FilterCriteria {
                search: String::new(),
                location,
                max_compensation,
                types: string_list(record, "types"),
                categories: string_list(record, "departments"),
            },
            sort,
        }
    }
}

fn string_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Keeps the non-blank string elements of an array field, trimmed;
/// anything else is empty.
fn string_list(record: &Map<String, Value>, key: &str) -> Vec<String> {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(clean_tag)
                .collect()
        })
        .unwrap_or_default()
}

fn clean_tag(tag: &str) -> Option<String> {
    Some(tag.trim()).filter(|t| !t.is_empty()).map(str::to_string)
}

fn clean_tags(tags: &[String]) -> Vec<String> {
    tags.iter().filter_map(|t| clean_tag(t)).collect()
}

/// `salary` may be a number or a (possibly formatted) string.
/// Empty, negative or digit-free values mean "no bound".
fn salary_bound(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => parse_compensation(s),
        _ => None,
    }
}

/// Restores a user's saved preferences, or the default state.
pub async fn load_preferences(
    store: &dyn KeyValueStore,
    user_id: Uuid,
) -> Result<ListingPreferences, AppError> {
    let key = user_key(PREFERENCES_KEY, user_id);
    match store.get(&key).await? {
        Some(raw) => Ok(ListingPreferences::from_record(&raw)),
        None => {
            debug!("No saved filter preferences for user {user_id}");
            Ok(ListingPreferences::default())
        }
    }
}

/// Overwrites the user's saved preferences.
pub async fn save_preferences(
    store: &dyn KeyValueStore,
    user_id: Uuid,
    preferences: &ListingPreferences,
) -> Result<(), AppError> {
    let key = user_key(PREFERENCES_KEY, user_id);
    store.set(&key, preferences.to_record().to_string()).await?;
    debug!("Saved filter preferences for user {user_id}");
    Ok(())
}

/// Forgets the user's saved preferences ("clear all filters").
pub async fn clear_preferences(store: &dyn KeyValueStore, user_id: Uuid) -> Result<(), AppError> {
    store.remove(&user_key(PREFERENCES_KEY, user_id)).await
}
