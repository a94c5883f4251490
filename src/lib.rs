//! Workspace umbrella crate for Paceplate.
//!
//! This crate stitches the knowledge base, vocabulary, rule inference, and
//! heuristic matching layers together so callers can serve runner-facing
//! recommendation and search requests through a single API entry point.
//!
//! Two retrieval paths share one dataset:
//!
//! - **Inference** ([`RecommendationEngine::get_recommendations`]): the
//!   declarative rule set derives "recommends" edges with a confidence and
//!   provenance (which rules fired). Restaurants without nutrition data
//!   never surface here.
//! - **Search** ([`RecommendationEngine::search_basic`] /
//!   [`RecommendationEngine::search_advanced`]): criteria-driven filtering
//!   with synonym-aware term comparison and a stable, configurable sort.
//!   Missing data degrades (a record only fails criteria that explicitly
//!   ask for the missing field).

pub use kb::{
    KnowledgeBase, Level, LoadError, NutritionProfile, RestaurantRecord, RunnerProfile, Snapshot,
};
pub use matcher::{
    InvalidWeights, ScoreWeights, ScoredRestaurant, SearchCriteria, SortKey, SortOrder, SortSpec,
};
pub use rules::{RecommendationEdge, DEFAULT_CONFIDENCE};
pub use vocab::{canonicalize, humanize, terms_match, Category};

mod config;

pub use crate::config::EngineConfig;

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, Level as TraceLevel};

/// Failures constructing or refreshing an engine. Negative lookup results
/// are `Option`/empty `Vec`, never errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// The facade over the whole pipeline. Holds the knowledge base and the
/// engine configuration; every request method works against the snapshot
/// current at call time, so a concurrent [`RecommendationEngine::reload`]
/// never tears an in-flight request.
#[derive(Debug)]
pub struct RecommendationEngine {
    kb: KnowledgeBase,
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Validate the config and load the dataset it points at.
    pub fn open(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let kb = KnowledgeBase::load(&config.dataset_path)?;
        Ok(RecommendationEngine { kb, config })
    }

    /// Engine over an in-memory record set with default config. The
    /// dataset path is unused; [`RecommendationEngine::reload`] will fail.
    pub fn from_records(records: Vec<RestaurantRecord>) -> Self {
        RecommendationEngine {
            kb: KnowledgeBase::from_records(records),
            config: EngineConfig::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Re-read the configured dataset and atomically swap the snapshot.
    /// On failure the previous snapshot stays live.
    pub fn reload(&self) -> Result<(), EngineError> {
        self.kb.reload(&self.config.dataset_path)?;
        Ok(())
    }

    /// The current snapshot, for callers that need repeated reads against
    /// one consistent dataset view.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.kb.snapshot()
    }

    /// Rule-inference path: derive recommendation edges for one runner,
    /// confidence descending, each joined with its heuristic match score.
    pub fn get_recommendations(&self, profile: &RunnerProfile) -> Vec<ScoredRestaurant> {
        let span = tracing::span!(
            TraceLevel::INFO,
            "engine.recommend",
            runner_id = %profile.runner_id
        );
        let _guard = span.enter();

        let snapshot = self.kb.snapshot();
        let results: Vec<ScoredRestaurant> = rules::infer(profile, &snapshot)
            .into_iter()
            .map(|(record, edge)| {
                let match_score = matcher::score(&record, profile, &self.config.weights);
                ScoredRestaurant::new(
                    record,
                    match_score,
                    Some(edge.confidence),
                    edge.matched_rule_ids,
                )
            })
            .collect();
        info!(results = results.len(), "recommendations_served");
        results
    }

    /// Basic search surface: cuisine, location, budget cap, sorted by
    /// name ascending.
    pub fn search_basic(
        &self,
        cuisine: Option<&str>,
        location: Option<&str>,
        max_budget: f32,
    ) -> Vec<RestaurantRecord> {
        let criteria = SearchCriteria::basic(cuisine, location, max_budget);
        self.search_advanced(&criteria, Some(SortSpec::default()))
    }

    /// Criteria-driven search. `sort = None` applies the configured
    /// default sort.
    pub fn search_advanced(
        &self,
        criteria: &SearchCriteria,
        sort: Option<SortSpec>,
    ) -> Vec<RestaurantRecord> {
        let span = tracing::span!(TraceLevel::INFO, "engine.search");
        let _guard = span.enter();

        let snapshot = self.kb.snapshot();
        let mut results = matcher::filter(&snapshot, criteria);
        matcher::sort_records(&mut results, sort.unwrap_or(self.config.default_sort));
        info!(results = results.len(), "search_served");
        results
    }

    /// Every record in the current snapshot, dataset order.
    pub fn all(&self) -> Vec<RestaurantRecord> {
        self.kb.snapshot().records().to_vec()
    }

    /// Lookup by exact id, falling back to the bare local name after the
    /// last `#` or `/` separator.
    pub fn by_id(&self, id: &str) -> Option<RestaurantRecord> {
        self.kb.snapshot().by_id(id).cloned()
    }
}
