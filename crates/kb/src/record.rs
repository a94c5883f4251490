//! Restaurant record model and per-record validation.

use serde::{Deserialize, Serialize};

use crate::error::RecordSkip;

/// Coarse nutrition level attached to each macro-nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Case-insensitive parse. Anything outside Low/Medium/High is `None`;
    /// there is deliberately no default substitution for unknown values.
    pub fn parse(raw: &str) -> Option<Level> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Level::Low),
            "medium" => Some(Level::Medium),
            "high" => Some(Level::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

/// Carb/fat/protein levels for a restaurant's food profile or a runner's
/// desired intake. All three levels are always present on a profile; a
/// restaurant with unknown nutrition carries no profile at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionProfile {
    pub carb: Level,
    pub fat: Level,
    pub protein: Level,
}

impl NutritionProfile {
    pub fn new(carb: Level, fat: Level, protein: Level) -> Self {
        NutritionProfile { carb, fat, protein }
    }
}

/// One validated row of the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name. Required; a record without one never enters a snapshot.
    pub name: String,
    /// Canonical-or-free-text cuisine category. Resolved to a human label
    /// through the vocab layer when surfaced to callers.
    #[serde(default)]
    pub cuisine: String,
    /// Canonical-or-free-text dining style (e.g. `fast_dining_type`).
    #[serde(default)]
    pub dining_type: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub nationality: String,
    /// Typical spend per head, non-negative.
    pub budget: f32,
    /// Contact number, carried through untouched and unvalidated.
    #[serde(default)]
    pub phone: Option<String>,
    /// Food nutrition levels. `None` means unknown, which downstream
    /// matching treats as "cannot satisfy nutrition criteria".
    #[serde(default)]
    pub nutrition: Option<NutritionProfile>,
}

/// Raw dataset row as it appears on disk, before field-level validation.
/// Every field is optional so a single malformed element can be rejected
/// with a precise reason instead of failing the whole load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRestaurantRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub dining_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub nutrition: Option<RawNutrition>,
}

/// Nutrition levels as free-form strings, parsed during validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNutrition {
    #[serde(default)]
    pub carb: Option<String>,
    #[serde(default)]
    pub fat: Option<String>,
    #[serde(default)]
    pub protein: Option<String>,
}

impl RawRestaurantRecord {
    /// Field-level validation. An `Err` here means the record is dropped
    /// from the snapshot; the load itself continues.
    pub fn validate(self) -> Result<RestaurantRecord, RecordSkip> {
        let name = match self.name {
            Some(n) if !n.trim().is_empty() => n.trim().to_string(),
            _ => return Err(RecordSkip::MissingName),
        };
        let id = match self.id {
            Some(i) if !i.trim().is_empty() => i.trim().to_string(),
            _ => return Err(RecordSkip::MissingId),
        };
        let budget = match self.budget {
            Some(b) if b >= 0.0 => b as f32,
            Some(b) => return Err(RecordSkip::InvalidBudget(Some(b.to_string()))),
            None => return Err(RecordSkip::InvalidBudget(None)),
        };
        let nutrition = match self.nutrition {
            Some(raw) => Some(parse_nutrition(raw)?),
            None => None,
        };

        Ok(RestaurantRecord {
            id,
            name,
            cuisine: self.cuisine.unwrap_or_default().trim().to_string(),
            dining_type: self.dining_type.unwrap_or_default().trim().to_string(),
            location: self.location.unwrap_or_default().trim().to_string(),
            nationality: self.nationality.unwrap_or_default().trim().to_string(),
            budget,
            phone: self.phone,
            nutrition,
        })
    }
}

/// A nutrition block that is present must be complete and parsable. A block
/// with a missing or unknown level marks the whole record malformed rather
/// than silently filling in a default level.
fn parse_nutrition(raw: RawNutrition) -> Result<NutritionProfile, RecordSkip> {
    let level = |field: &'static str, value: Option<String>| -> Result<Level, RecordSkip> {
        let value = value.unwrap_or_default();
        Level::parse(&value).ok_or(RecordSkip::InvalidNutritionLevel { field, value })
    };
    Ok(NutritionProfile {
        carb: level("carb", raw.carb)?,
        fat: level("fat", raw.fat)?,
        protein: level("protein", raw.protein)?,
    })
}
