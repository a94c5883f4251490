//! Engine configuration.
//!
//! One struct covers everything a deployment tunes: where the dataset
//! lives, the scoring weights, and the default sort applied when a search
//! request does not name one. All fields have serde defaults so a config
//! file only needs to state what it overrides:
//!
//! ```json
//! {
//!   "dataset_path": "data/restaurants.json",
//!   "weights": { "cuisine_match": 40.0 }
//! }
//! ```

use std::path::PathBuf;

use matcher::{ScoreWeights, SortSpec};
use serde::{Deserialize, Serialize};

/// Everything [`crate::RecommendationEngine::open`] needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Path to the JSON dataset the knowledge base loads and reloads from.
    pub dataset_path: PathBuf,
    /// Heuristic scoring weights. Defaults reproduce the stock scorer.
    pub weights: ScoreWeights,
    /// Sort applied when a search request leaves the sort unspecified.
    pub default_sort: SortSpec,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            dataset_path: PathBuf::from("data/restaurants.json"),
            weights: ScoreWeights::default(),
            default_sort: SortSpec::default(),
        }
    }
}

impl EngineConfig {
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        EngineConfig {
            dataset_path: dataset_path.into(),
            ..EngineConfig::default()
        }
    }

    /// Reject configs that cannot produce a working engine. The dataset
    /// path is checked at load time, not here.
    pub fn validate(&self) -> Result<(), crate::EngineError> {
        if self.dataset_path.as_os_str().is_empty() {
            return Err(crate::EngineError::InvalidConfig(
                "dataset_path must not be empty".into(),
            ));
        }
        self.weights
            .validate()
            .map_err(|e| crate::EngineError::InvalidConfig(e.to_string()))?;
        Ok(())
    }
}
