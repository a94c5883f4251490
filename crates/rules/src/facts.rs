//! Runner-side fact table for rule evaluation.

use kb::{NutritionProfile, RunnerProfile};
use serde::Serialize;
use vocab::Category;

/// The runner profile merged into evaluable form: preference terms cleaned
/// for matching, runner class canonicalized for equality predicates.
///
/// Preference terms are kept in their trimmed lowercase surface form rather
/// than canonical ids; the synonym bridging in [`vocab::terms_match`]
/// operates on what the user typed (e.g. "japanese" reaching a
/// `ramen_type` restaurant).
#[derive(Debug, Clone, Serialize)]
pub struct RunnerFacts {
    pub runner_id: String,
    /// Canonical runner class id (e.g. `marathon`, `fun_run`).
    pub runner_class: String,
    pub max_budget: f32,
    pub cuisine_interests: Vec<String>,
    pub dining_interests: Vec<String>,
    pub pre_run_nutrition: Option<NutritionProfile>,
    pub post_run_nutrition: Option<NutritionProfile>,
}

impl RunnerFacts {
    /// Merge step: canonicalize the class, clean the preference terms, drop
    /// empties. Pure; does not touch the knowledge base.
    pub fn from_profile(profile: &RunnerProfile) -> Self {
        let clean = |terms: &[String]| -> Vec<String> {
            terms
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect()
        };
        RunnerFacts {
            runner_id: profile.runner_id.clone(),
            runner_class: vocab::canonicalize(Category::RunnerClass, &profile.runner_class),
            max_budget: profile.max_budget,
            cuisine_interests: clean(&profile.preferred_cuisines),
            dining_interests: clean(&profile.preferred_dining_types),
            pre_run_nutrition: profile.pre_run_nutrition,
            post_run_nutrition: profile.post_run_nutrition,
        }
    }
}
