//! Paceplate Knowledge Base
//!
//! This is where restaurant data enters the matching pipeline. The backing
//! dataset is a JSON array of raw records; we validate each one, drop the
//! malformed entries with a logged reason, and publish the survivors as an
//! immutable snapshot.
//!
//! ## What we do here
//!
//! - **Validate records** - A record with no resolvable name is not a valid
//!   member of the knowledge base. Non-numeric or negative budgets and
//!   unparsable nutrition levels also disqualify a record. A skip is logged,
//!   never fatal.
//! - **Publish snapshots** - [`KnowledgeBase`] hands out [`Snapshot`] values
//!   behind an `Arc`. `reload` builds a complete new snapshot before swapping
//!   it in, so in-flight readers see either the old or the new dataset,
//!   never a partial one.
//! - **Represent absence** - Nutrition data can be wholly absent on a record
//!   ([`RestaurantRecord::nutrition`] is `None`). Downstream matching treats
//!   that as "cannot satisfy nutrition criteria", never as a default level.
//!
//! ## Main entry point
//!
//! Call [`KnowledgeBase::load`] with a dataset path, then [`KnowledgeBase::snapshot`]
//! per request. Structural failures (file missing, root not an array) surface
//! as [`LoadError`]; everything else degrades per record.

mod error;
mod record;
mod store;

pub use crate::error::{LoadError, RecordSkip};
pub use crate::record::{Level, NutritionProfile, RawRestaurantRecord, RestaurantRecord};
pub use crate::store::{KnowledgeBase, Snapshot};

use serde::{Deserialize, Serialize};

/// Request-scoped description of a runner's dietary, budget, and dining
/// preferences. Created per matching request and discarded with the response;
/// it carries no persistent identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerProfile {
    /// Opaque caller-supplied identifier, used for logging and edge output.
    pub runner_id: String,
    /// Free-text running class (e.g. "Marathon", "Fun Run"); normalized
    /// before rule evaluation.
    #[serde(default)]
    pub runner_class: String,
    /// Upper bound on acceptable restaurant budget, in currency units.
    pub max_budget: f32,
    /// Free-text cuisine preferences. Empty means "no preference".
    #[serde(default)]
    pub preferred_cuisines: Vec<String>,
    /// Free-text dining-style preferences. Empty means "no preference".
    #[serde(default)]
    pub preferred_dining_types: Vec<String>,
    /// Desired nutrition levels before a run, if the runner specified them.
    #[serde(default)]
    pub pre_run_nutrition: Option<NutritionProfile>,
    /// Desired nutrition levels after a run, if the runner specified them.
    #[serde(default)]
    pub post_run_nutrition: Option<NutritionProfile>,
}

impl RunnerProfile {
    /// Minimal profile with only an id and a budget cap; preference fields
    /// start empty.
    pub fn new(runner_id: impl Into<String>, max_budget: f32) -> Self {
        RunnerProfile {
            runner_id: runner_id.into(),
            runner_class: String::new(),
            max_budget,
            preferred_cuisines: Vec::new(),
            preferred_dining_types: Vec::new(),
            pre_run_nutrition: None,
            post_run_nutrition: None,
        }
    }
}
