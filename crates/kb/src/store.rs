//! Snapshot store: immutable published datasets with atomic reload.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use crate::error::{LoadError, RecordSkip};
use crate::record::{RawRestaurantRecord, RestaurantRecord};

/// One immutable, fully validated dataset. Readers hold an `Arc<Snapshot>`
/// and are unaffected by concurrent reloads.
#[derive(Debug, Default)]
pub struct Snapshot {
    records: Vec<RestaurantRecord>,
    by_id: HashMap<String, usize>,
    skipped: Vec<String>,
}

impl Snapshot {
    /// Build a snapshot from already validated records. Duplicate ids keep
    /// the first occurrence for lookup; iteration order is insertion order.
    pub fn from_records(records: Vec<RestaurantRecord>) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            by_id.entry(record.id.clone()).or_insert(idx);
        }
        Snapshot {
            records,
            by_id,
            skipped: Vec::new(),
        }
    }

    /// All records, in dataset order. Finite and restartable.
    pub fn records(&self) -> &[RestaurantRecord] {
        &self.records
    }

    /// Lookup by id. Falls back to matching the trailing segment after the
    /// last `#` or `/`, since callers sometimes hold a fully qualified
    /// identifier while the dataset stores the bare one (or vice versa).
    pub fn by_id(&self, id: &str) -> Option<&RestaurantRecord> {
        if let Some(&idx) = self.by_id.get(id) {
            return self.records.get(idx);
        }
        let local = local_name(id);
        self.records
            .iter()
            .find(|r| r.id == local || local_name(&r.id) == local)
    }

    /// Human-readable reasons for records dropped during this load.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn local_name(id: &str) -> &str {
    id.rsplit(['#', '/']).next().unwrap_or(id)
}

/// Read-mostly shared handle over the active [`Snapshot`].
///
/// Many concurrent matching requests read through [`KnowledgeBase::snapshot`];
/// [`KnowledgeBase::reload`] is the only writer and swaps a complete new
/// snapshot under the lock, never mutating records in place.
#[derive(Debug)]
pub struct KnowledgeBase {
    inner: RwLock<Arc<Snapshot>>,
}

impl KnowledgeBase {
    /// Load the dataset at `path` and publish the first snapshot. Fails with
    /// [`LoadError`] only on structural problems; malformed records are
    /// skipped with a logged reason.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let snapshot = load_snapshot(path)?;
        Ok(KnowledgeBase {
            inner: RwLock::new(Arc::new(snapshot)),
        })
    }

    /// In-memory knowledge base from pre-validated records. Used by tests
    /// and by hosts that manage their own dataset source.
    pub fn from_records(records: Vec<RestaurantRecord>) -> Self {
        KnowledgeBase {
            inner: RwLock::new(Arc::new(Snapshot::from_records(records))),
        }
    }

    /// Current published snapshot. Cheap: clones one `Arc`.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(
            &self
                .inner
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Atomically replace the active snapshot with a fresh load of `path`.
    /// On error the previous snapshot stays published untouched.
    pub fn reload(&self, path: &Path) -> Result<(), LoadError> {
        let snapshot = Arc::new(load_snapshot(path)?);
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = snapshot;
        Ok(())
    }
}

/// Parse and validate a dataset file into a snapshot. Element-level failures
/// are collected, logged, and excluded; only structural failures abort.
fn load_snapshot(path: &Path) -> Result<Snapshot, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: PathBuf::from(path),
        source,
    })?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    let elements = match value {
        serde_json::Value::Array(elements) => elements,
        _ => return Err(LoadError::NotAnArray),
    };

    let total = elements.len();
    let mut records = Vec::with_capacity(total);
    let mut skipped = Vec::new();
    for (position, element) in elements.into_iter().enumerate() {
        let raw_record: RawRestaurantRecord = match serde_json::from_value(element) {
            Ok(raw_record) => raw_record,
            Err(err) => {
                let reason = RecordSkip::Malformed(err.to_string());
                warn!(position, reason = %reason, "record_skipped");
                skipped.push(format!("element {position}: {reason}"));
                continue;
            }
        };
        match raw_record.validate() {
            Ok(record) => records.push(record),
            Err(reason) => {
                warn!(position, reason = %reason, "record_skipped");
                skipped.push(format!("element {position}: {reason}"));
            }
        }
    }

    info!(
        path = %path.display(),
        loaded = records.len(),
        skipped = skipped.len(),
        total,
        "knowledge_base_loaded"
    );

    let mut snapshot = Snapshot::from_records(records);
    snapshot.skipped = skipped;
    Ok(snapshot)
}
