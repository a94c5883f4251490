//! Paceplate Rule Inference
//!
//! In-process forward-chaining evaluator that derives "recommends" edges
//! from a runner profile to restaurants in a knowledge base snapshot. The
//! rule set is a fixed, ordered list of predicate conjunctions expressed as
//! data ([`Rule`] records), so each rule is unit-testable in isolation and
//! there is no textual rule language to parse at runtime.
//!
//! One pass per request:
//!
//! 1. **Merge** - [`RunnerFacts::from_profile`] materializes the profile as
//!    a transient fact subject with canonicalized category terms.
//! 2. **Fire** - every rule is evaluated against every restaurant; a firing
//!    rule contributes its id to the edge and its confidence to the max.
//! 3. **Materialize** - [`infer`] collects edges and orders candidates by
//!    confidence descending, stable on dataset order for equal confidence.
//!
//! A restaurant without a nutrition profile cannot satisfy any rule in the
//! fixed set (every conjunction carries a nutrition-dependent predicate), so
//! it is silently absent from inference output. The heuristic search path
//! still covers it.

mod engine;
mod facts;
mod rule;

pub use crate::engine::{infer, RecommendationEdge};
pub use crate::facts::RunnerFacts;
pub use crate::rule::{rule_set, Predicate, Rule, DEFAULT_CONFIDENCE};
