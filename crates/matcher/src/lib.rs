//! Paceplate Matcher
//!
//! The heuristic search path: used when callers filter the knowledge base
//! directly (basic search, advanced search, nutrition-only, budget-range)
//! instead of going through rule inference. Where inference excludes a
//! restaurant with unknown nutrition outright, this path degrades — the
//! restaurant simply earns no nutrition points and fails only the criteria
//! that explicitly ask for nutrition levels.
//!
//! ## Core pieces
//!
//! - [`SearchCriteria`] + [`matches`]: every non-empty criterion must hold;
//!   cuisine and dining-style fields use the synonym-aware comparison from
//!   the vocab layer, budgets are inclusive bounds with `0 = unbounded`.
//! - [`ScoreWeights`] + [`score`]: purely additive match score. Not a
//!   probability — an ordering key, unbounded above, floored at zero.
//! - [`SortSpec`] + [`sort_records`]: stable, case-insensitive multi-key
//!   sort with an unknown-key fallback to name ascending.
//! - [`filter`]: one pass of [`matches`] across a snapshot.
//! - [`ScoredRestaurant`]: a record joined with its score and, when the
//!   caller came through inference, the edge fields.

mod criteria;
mod score;
mod sort;

pub use crate::criteria::{filter, matches, SearchCriteria};
pub use crate::score::{score, InvalidWeights, ScoreWeights, ScoredRestaurant};
pub use crate::sort::{sort_records, SortKey, SortOrder, SortSpec};
