//! Stable, case-insensitive sorting of search results.

use std::cmp::Ordering;

use kb::RestaurantRecord;
use serde::{Deserialize, Serialize};

/// Which field the sort compares on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Budget,
    Cuisine,
    Location,
    DiningType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// A parsed sort request. Unknown inputs fall back to name ascending
/// rather than erroring; sorting is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        SortSpec {
            key: SortKey::Name,
            order: SortOrder::Asc,
        }
    }
}

impl SortSpec {
    /// Parse free-text `sort_by` / `order` inputs, case-insensitively.
    /// `"type"` is accepted as an alias for the dining-style field.
    pub fn parse(sort_by: &str, order: &str) -> Self {
        let key = match sort_by.trim().to_lowercase().as_str() {
            "budget" => SortKey::Budget,
            "cuisine" => SortKey::Cuisine,
            "location" => SortKey::Location,
            "type" | "dining_type" | "diningtype" => SortKey::DiningType,
            _ => SortKey::Name,
        };
        let order = if order.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        SortSpec { key, order }
    }
}

fn compare(a: &RestaurantRecord, b: &RestaurantRecord, key: SortKey) -> Ordering {
    let text = |field: fn(&RestaurantRecord) -> &str| {
        field(a).to_lowercase().cmp(&field(b).to_lowercase())
    };
    match key {
        SortKey::Name => text(|r| &r.name),
        SortKey::Cuisine => text(|r| &r.cuisine),
        SortKey::Location => text(|r| &r.location),
        SortKey::DiningType => text(|r| &r.dining_type),
        SortKey::Budget => a.budget.partial_cmp(&b.budget).unwrap_or(Ordering::Equal),
    }
}

/// Stable in-place sort: records that compare equal under the key keep
/// their existing relative order.
pub fn sort_records(records: &mut [RestaurantRecord], spec: SortSpec) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, spec.key);
        match spec.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
