//! Additive heuristic scoring of a restaurant against a runner profile.

use kb::{RestaurantRecord, RunnerProfile};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;
use vocab::Category;

/// A weight set failed validation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvalidWeights {
    #[error("weight `{0}` must be non-negative")]
    Negative(&'static str),
    #[error("under_budget_ratio must be in (0, 1], got {0}")]
    RatioOutOfRange(f32),
}

/// Point values for each scoring dimension. The defaults reproduce the
/// stock scorer; callers can override them through engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Awarded when the restaurant's budget fits within the runner's cap.
    pub budget_match: f32,
    /// Extra points when budget / cap falls below `under_budget_ratio`.
    pub under_budget_bonus: f32,
    pub under_budget_ratio: f32,
    pub cuisine_match: f32,
    pub dining_type_match: f32,
    /// Awarded once per nutrition level (carb, fat, protein) that matches
    /// either the pre-run or the post-run target.
    pub nutrition_level_match: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            budget_match: 50.0,
            under_budget_bonus: 20.0,
            under_budget_ratio: 0.7,
            cuisine_match: 30.0,
            dining_type_match: 20.0,
            nutrition_level_match: 15.0,
        }
    }
}

impl ScoreWeights {
    pub fn validate(&self) -> Result<(), InvalidWeights> {
        let named = [
            ("budget_match", self.budget_match),
            ("under_budget_bonus", self.under_budget_bonus),
            ("cuisine_match", self.cuisine_match),
            ("dining_type_match", self.dining_type_match),
            ("nutrition_level_match", self.nutrition_level_match),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(InvalidWeights::Negative(name));
            }
        }
        if !self.under_budget_ratio.is_finite()
            || self.under_budget_ratio <= 0.0
            || self.under_budget_ratio > 1.0
        {
            return Err(InvalidWeights::RatioOutOfRange(self.under_budget_ratio));
        }
        Ok(())
    }
}

/// A restaurant joined with its heuristic score and, when the caller came
/// through inference, the edge confidence and firing rule ids. Category
/// identifiers are humanized into display labels here, at the surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRestaurant {
    #[serde(flatten)]
    pub record: RestaurantRecord,
    /// Display form of `record.cuisine` (e.g. `ramen_type` -> "Ramen").
    pub cuisine_label: String,
    /// Display form of `record.dining_type`.
    pub dining_type_label: String,
    pub match_score: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matched_rule_ids: Vec<String>,
}

impl ScoredRestaurant {
    pub fn new(
        record: RestaurantRecord,
        match_score: f32,
        confidence: Option<f32>,
        matched_rule_ids: Vec<String>,
    ) -> Self {
        let cuisine_label = vocab::humanize(&record.cuisine);
        let dining_type_label = vocab::humanize(&record.dining_type);
        ScoredRestaurant {
            record,
            cuisine_label,
            dining_type_label,
            match_score,
            confidence,
            matched_rule_ids,
        }
    }

    pub fn heuristic(record: RestaurantRecord, match_score: f32) -> Self {
        ScoredRestaurant::new(record, match_score, None, Vec::new())
    }
}

/// Purely additive match score. Not a probability; an ordering key. Missing
/// data on either side contributes nothing rather than disqualifying.
///
/// `max_budget = 0.0` is the same "no cap declared" sentinel the search
/// criteria use: no budget points are awarded (and the under-budget ratio
/// is never computed against a zero cap).
pub fn score(record: &RestaurantRecord, profile: &RunnerProfile, weights: &ScoreWeights) -> f32 {
    let mut total = 0.0;

    if profile.max_budget > 0.0 && record.budget <= profile.max_budget {
        total += weights.budget_match;
        if record.budget / profile.max_budget < weights.under_budget_ratio {
            total += weights.under_budget_bonus;
        }
    }

    if profile
        .preferred_cuisines
        .iter()
        .any(|term| vocab::terms_match(Category::Cuisine, term, &record.cuisine))
    {
        total += weights.cuisine_match;
    }

    if profile
        .preferred_dining_types
        .iter()
        .any(|term| vocab::terms_match(Category::DiningType, term, &record.dining_type))
    {
        total += weights.dining_type_match;
    }

    if let Some(actual) = record.nutrition {
        for target in [profile.pre_run_nutrition, profile.post_run_nutrition]
            .into_iter()
            .flatten()
        {
            if actual.carb == target.carb {
                total += weights.nutrition_level_match;
            }
            if actual.fat == target.fat {
                total += weights.nutrition_level_match;
            }
            if actual.protein == target.protein {
                total += weights.nutrition_level_match;
            }
        }
    }

    trace!(restaurant_id = %record.id, total, "score_computed");
    total
}
