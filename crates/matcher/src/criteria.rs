//! Multi-field match predicate over restaurant records.

use kb::{RestaurantRecord, Snapshot};
use serde::{Deserialize, Serialize};
use tracing::debug;
use vocab::Category;

/// Criteria for one search call. Every populated field must match for a
/// record to pass; empty/zero fields are "no constraint".
///
/// Budget bounds are inclusive. `max_budget = 0.0` is an explicit sentinel
/// for "unbounded", not "budget must be zero"; same for `min_budget`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
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
    pub min_budget: f32,
    #[serde(default)]
    pub max_budget: f32,
    /// Exact (case-insensitive) nutrition level requirements. A record with
    /// no nutrition data fails any of these that are set.
    #[serde(default)]
    pub carb_level: Option<String>,
    #[serde(default)]
    pub fat_level: Option<String>,
    #[serde(default)]
    pub protein_level: Option<String>,
}

impl SearchCriteria {
    /// Criteria for the basic search surface: cuisine, location, budget cap.
    pub fn basic(cuisine: Option<&str>, location: Option<&str>, max_budget: f32) -> Self {
        SearchCriteria {
            cuisine: cuisine.map(str::to_string),
            location: location.map(str::to_string),
            max_budget,
            ..SearchCriteria::default()
        }
    }

    fn wants_nutrition(&self) -> bool {
        has_text(&self.carb_level) || has_text(&self.fat_level) || has_text(&self.protein_level)
    }
}

fn has_text(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// Case-insensitive substring containment in either direction, the match
/// mode for free-text fields (name, location, nationality).
fn loose_contains(user: &str, stored: &str) -> bool {
    let user = user.trim().to_lowercase();
    let stored = stored.trim().to_lowercase();
    if user.is_empty() || stored.is_empty() {
        return false;
    }
    stored.contains(&user) || user.contains(&stored)
}

/// Every non-empty criterion must hold.
pub fn matches(record: &RestaurantRecord, criteria: &SearchCriteria) -> bool {
    if let Some(name) = criteria.name.as_deref().filter(|s| !s.trim().is_empty()) {
        if !loose_contains(name, &record.name) {
            return false;
        }
    }
    if let Some(cuisine) = criteria.cuisine.as_deref().filter(|s| !s.trim().is_empty()) {
        if !vocab::terms_match(Category::Cuisine, cuisine, &record.cuisine) {
            return false;
        }
    }
    if let Some(dining) = criteria
        .dining_type
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        if !vocab::terms_match(Category::DiningType, dining, &record.dining_type) {
            return false;
        }
    }
    if let Some(location) = criteria
        .location
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        if !loose_contains(location, &record.location) {
            return false;
        }
    }
    if let Some(nationality) = criteria
        .nationality
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        if !loose_contains(nationality, &record.nationality) {
            return false;
        }
    }

    if criteria.min_budget > 0.0 && record.budget < criteria.min_budget {
        return false;
    }
    if criteria.max_budget > 0.0 && record.budget > criteria.max_budget {
        return false;
    }

    if criteria.wants_nutrition() {
        let Some(nutrition) = record.nutrition else {
            // Unknown nutrition cannot satisfy a nutrition criterion.
            return false;
        };
        let level_matches = |criterion: &Option<String>, actual: kb::Level| -> bool {
            match criterion.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
                Some(wanted) => actual.as_str().eq_ignore_ascii_case(wanted),
                None => true,
            }
        };
        if !level_matches(&criteria.carb_level, nutrition.carb)
            || !level_matches(&criteria.fat_level, nutrition.fat)
            || !level_matches(&criteria.protein_level, nutrition.protein)
        {
            return false;
        }
    }

    true
}

/// Apply [`matches`] across a whole snapshot. One pass; dataset order is
/// preserved (callers sort afterwards).
pub fn filter(snapshot: &Snapshot, criteria: &SearchCriteria) -> Vec<RestaurantRecord> {
    let results: Vec<RestaurantRecord> = snapshot
        .records()
        .iter()
        .filter(|r| matches(r, criteria))
        .cloned()
        .collect();
    debug!(
        checked = snapshot.len(),
        matched = results.len(),
        "filter_applied"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use kb::{Level, NutritionProfile};

    fn record() -> RestaurantRecord {
        RestaurantRecord {
            id: "r1".into(),
            name: "Sushi Master".into(),
            cuisine: "japanese".into(),
            dining_type: "fast_dining_type".into(),
            location: "Downtown".into(),
            nationality: "Japanese".into(),
            budget: 450.0,
            phone: None,
            nutrition: Some(NutritionProfile::new(Level::Low, Level::High, Level::High)),
        }
    }

    #[test]
    fn empty_criteria_match_everything() {
        assert!(matches(&record(), &SearchCriteria::default()));
    }

    #[test]
    fn name_matches_by_substring_either_direction() {
        let mut criteria = SearchCriteria::default();
        criteria.name = Some("sushi".into());
        assert!(matches(&record(), &criteria));

        criteria.name = Some("Sushi Master Downtown Branch".into());
        assert!(matches(&record(), &criteria));

        criteria.name = Some("Thai Spice".into());
        assert!(!matches(&record(), &criteria));
    }

    #[test]
    fn cuisine_uses_synonym_table() {
        let mut criteria = SearchCriteria::default();
        criteria.cuisine = Some("sushi".into());
        assert!(matches(&record(), &criteria));
    }

    #[test]
    fn budget_bounds_are_inclusive_with_zero_sentinel() {
        let mut criteria = SearchCriteria::default();
        criteria.max_budget = 450.0;
        assert!(matches(&record(), &criteria));

        criteria.max_budget = 449.99;
        assert!(!matches(&record(), &criteria));

        // 0 means unbounded, not "budget must be zero".
        criteria.max_budget = 0.0;
        assert!(matches(&record(), &criteria));

        criteria.min_budget = 450.0;
        assert!(matches(&record(), &criteria));
        criteria.min_budget = 450.01;
        assert!(!matches(&record(), &criteria));
    }

    #[test]
    fn nutrition_levels_compare_exactly_and_case_insensitively() {
        let mut criteria = SearchCriteria::default();
        criteria.carb_level = Some("LOW".into());
        criteria.protein_level = Some("high".into());
        assert!(matches(&record(), &criteria));

        criteria.fat_level = Some("Low".into());
        assert!(!matches(&record(), &criteria));
    }

    #[test]
    fn missing_nutrition_fails_any_nutrition_criterion() {
        let mut r = record();
        r.nutrition = None;
        let mut criteria = SearchCriteria::default();
        criteria.carb_level = Some("Low".into());
        assert!(!matches(&r, &criteria));

        // But without nutrition criteria the record still passes.
        assert!(matches(&r, &SearchCriteria::default()));
    }

    #[test]
    fn filter_preserves_dataset_order() {
        let mut second = record();
        second.id = "r2".into();
        second.name = "Sushi Corner".into();
        let snapshot = Snapshot::from_records(vec![record(), second]);

        let mut criteria = SearchCriteria::default();
        criteria.cuisine = Some("japanese".into());
        let results = filter(&snapshot, &criteria);
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
    }
}
