//! Error types produced by the knowledge base.
//!
//! Two severities exist here. [`LoadError`] is structural and fatal: the
//! dataset file is missing or is not a JSON array, and no snapshot is
//! published. [`RecordSkip`] is per-record and non-fatal: the offending
//! record is dropped from the snapshot with a logged reason and loading
//! continues. Absent restaurants and empty result sets are not errors at
//! all; those are `Option`/empty-`Vec` returns in the calling layers.

use std::path::PathBuf;

use thiserror::Error;

/// Structural dataset failure. No partial knowledge base is published when
/// one of these is returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The dataset file could not be read.
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON.
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset parsed, but its root is not a JSON array of records.
    #[error("dataset root must be a JSON array of restaurant records")]
    NotAnArray,
}

/// Reason a single record was excluded from the active snapshot.
///
/// These never abort a load; they are logged per record and surfaced through
/// [`Snapshot::skipped`](crate::Snapshot::skipped) for observability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RecordSkip {
    /// The record has no resolvable name, so it is not a valid member of the
    /// knowledge base.
    #[error("record has no resolvable name")]
    MissingName,

    /// The record has no identifier.
    #[error("record has no id")]
    MissingId,

    /// The record has no budget, or the budget was negative.
    #[error("record budget is missing or negative: {0:?}")]
    InvalidBudget(Option<String>),

    /// A nutrition field was present but not one of Low/Medium/High.
    #[error("unparsable nutrition level {value:?} for {field}")]
    InvalidNutritionLevel { field: &'static str, value: String },

    /// The JSON element did not deserialize as a record at all.
    #[error("malformed record element: {0}")]
    Malformed(String),
}
