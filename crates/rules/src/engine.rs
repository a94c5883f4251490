//! Single-pass edge derivation over a knowledge base snapshot.

use kb::{RestaurantRecord, RunnerProfile, Snapshot};
use serde::Serialize;
use tracing::{debug, info, Level as TraceLevel};

use crate::facts::RunnerFacts;
use crate::rule::rule_set;

/// Derived "recommends" edge from a runner to a restaurant. Not persisted;
/// lives for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationEdge {
    pub runner_id: String,
    pub restaurant_id: String,
    /// Maximum confidence across firing rules; 100.0 when the strongest
    /// rule carries no explicit value.
    pub confidence: f32,
    /// Ids of every rule that fired, in rule declaration order.
    pub matched_rule_ids: Vec<String>,
}

/// Run the fixed rule set for one profile against one snapshot.
///
/// Returns `(record, edge)` pairs ordered by confidence descending; ties
/// keep dataset order (the sort is stable and candidates are visited in
/// dataset order). Calling this twice against the same snapshot yields an
/// identical ordered result.
pub fn infer(
    profile: &RunnerProfile,
    snapshot: &Snapshot,
) -> Vec<(RestaurantRecord, RecommendationEdge)> {
    let span = tracing::span!(
        TraceLevel::INFO,
        "rules.infer",
        runner_id = %profile.runner_id,
        candidates = snapshot.len()
    );
    let _guard = span.enter();

    let facts = RunnerFacts::from_profile(profile);
    let mut matches: Vec<(RestaurantRecord, RecommendationEdge)> = Vec::new();

    for record in snapshot.records() {
        let mut matched_rule_ids: Vec<String> = Vec::new();
        let mut confidence: Option<f32> = None;
        for rule in rule_set() {
            if rule.fires(&facts, record) {
                matched_rule_ids.push(rule.id.to_string());
                let c = rule.confidence();
                // Max wins; first firing rule keeps the slot on a tie.
                if confidence.map_or(true, |best| c > best) {
                    confidence = Some(c);
                }
            }
        }
        if let Some(confidence) = confidence {
            debug!(
                restaurant_id = %record.id,
                confidence,
                rules = ?matched_rule_ids,
                "edge_derived"
            );
            matches.push((
                record.clone(),
                RecommendationEdge {
                    runner_id: facts.runner_id.clone(),
                    restaurant_id: record.id.clone(),
                    confidence,
                    matched_rule_ids,
                },
            ));
        }
    }

    // Stable sort: equal confidence keeps dataset order.
    matches.sort_by(|a, b| {
        b.1.confidence
            .partial_cmp(&a.1.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    info!(edges = matches.len(), "inference_complete");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use kb::{Level, NutritionProfile};

    fn record(id: &str, budget: f32, cuisine: &str, dining: &str) -> RestaurantRecord {
        RestaurantRecord {
            id: id.into(),
            name: format!("Restaurant {id}"),
            cuisine: cuisine.into(),
            dining_type: dining.into(),
            location: String::new(),
            nationality: String::new(),
            budget,
            phone: None,
            nutrition: Some(NutritionProfile::new(Level::Low, Level::High, Level::High)),
        }
    }

    fn profile() -> RunnerProfile {
        let mut p = RunnerProfile::new("runner-1", 500.0);
        p.preferred_cuisines = vec!["Japanese".into()];
        p.preferred_dining_types = vec!["Fast Dining".into()];
        p.pre_run_nutrition = Some(NutritionProfile::new(Level::Low, Level::High, Level::High));
        p
    }

    #[test]
    fn full_match_gets_default_confidence_and_all_rule_ids() {
        let snapshot = Snapshot::from_records(vec![record(
            "r1",
            300.0,
            "japanese",
            "fast_dining_type",
        )]);
        let results = infer(&profile(), &snapshot);
        assert_eq!(results.len(), 1);
        let edge = &results[0].1;
        assert_eq!(edge.confidence, 100.0);
        assert_eq!(
            edge.matched_rule_ids,
            vec!["complete-preference", "cuisine-nutrition", "dining-nutrition"]
        );
    }

    #[test]
    fn partial_match_ranks_below_full_match() {
        // r2 comes first in the dataset but only matches on cuisine.
        let snapshot = Snapshot::from_records(vec![
            record("r2", 300.0, "japanese", "buffet_type"),
            record("r1", 300.0, "japanese", "fast_dining_type"),
        ]);
        let results = infer(&profile(), &snapshot);
        let ids: Vec<&str> = results.iter().map(|(r, _)| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
        assert_eq!(results[0].1.confidence, 100.0);
        assert_eq!(results[1].1.confidence, 85.0);
    }

    #[test]
    fn equal_confidence_keeps_dataset_order() {
        let snapshot = Snapshot::from_records(vec![
            record("a", 300.0, "japanese", "fast_dining_type"),
            record("b", 200.0, "japanese", "fast_dining_type"),
        ]);
        let results = infer(&profile(), &snapshot);
        let ids: Vec<&str> = results.iter().map(|(r, _)| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn restaurants_without_nutrition_are_excluded() {
        let mut no_nutrition = record("r1", 300.0, "japanese", "fast_dining_type");
        no_nutrition.nutrition = None;
        let snapshot = Snapshot::from_records(vec![no_nutrition]);
        assert!(infer(&profile(), &snapshot).is_empty());
    }

    #[test]
    fn over_budget_restaurants_are_excluded() {
        let snapshot = Snapshot::from_records(vec![record(
            "r1",
            600.0,
            "japanese",
            "fast_dining_type",
        )]);
        assert!(infer(&profile(), &snapshot).is_empty());
    }

    #[test]
    fn inference_is_idempotent() {
        let snapshot = Snapshot::from_records(vec![
            record("r1", 300.0, "japanese", "fast_dining_type"),
            record("r2", 250.0, "thai", "fast_dining_type"),
        ]);
        let p = profile();
        let first = infer(&p, &snapshot);
        let second = infer(&p, &snapshot);
        assert_eq!(first, second);
    }
}
