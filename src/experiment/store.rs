//! Result store: id lifecycle and id -> result association
//!
//! ## Design
//!
//! The store is an explicit object owned by the service, not a
//! module-level singleton. One mutex guards the id counter, the
//! last-completed marker, and the payload map, so assigning an id and
//! publishing its result is a single critical section: a reader can
//! never observe an id as "last" before its result is recorded.
//!
//! Documents recorded through [`ResultStore::record_result`] keep their
//! tagged form, so reads return exactly what was recorded. Raw runner
//! payloads are kept serialized and decoded on read, which is why a read
//! can fail with [`Error::Storage`] even for an id that exists.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::experiment::ResultDocument;

#[derive(Debug, Clone)]
enum Stored {
    /// A tagged document, returned as recorded.
    Document(ResultDocument),
    /// A runner-serialized payload, decoded on read.
    Raw(String),
}

#[derive(Debug, Default)]
struct StoreInner {
    issued: u64,
    last_id: Option<u64>,
    payloads: HashMap<u64, Stored>,
}

/// Store assigning experiment ids and holding results for the lifetime
/// of the process.
///
/// Ids are strictly increasing, never reused, and assigned exactly once
/// per experiment. Recorded results are append-only history: there is no
/// update or delete.
#[derive(Debug, Default)]
pub struct ResultStore {
    inner: Mutex<StoreInner>,
}

impl ResultStore {
    /// Create a new empty store. The first assigned id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        // A poisoned mutex means a writer panicked mid-publish; the
        // invariants can no longer be trusted.
        self.inner.lock().expect("result store mutex poisoned")
    }

    /// Assign a fresh, previously unused experiment id.
    #[must_use = "an assigned id must be recorded or it leaks a gap"]
    pub fn next_id(&self) -> u64 {
        let mut inner = self.lock();
        inner.issued += 1;
        inner.issued
    }

    /// Record the result for an assigned id.
    ///
    /// # Panics
    ///
    /// Panics if a result was already recorded under `id`; ids are
    /// assigned exactly once per experiment, so a duplicate write is an
    /// invariant violation, not a recoverable condition.
    pub fn record_result(&self, id: u64, result: &ResultDocument) {
        self.record(id, Stored::Document(result.clone()));
    }

    /// Record a pre-serialized result payload for an assigned id.
    ///
    /// The runner owns the result serialization; the store does not
    /// re-validate the payload on write, only on read.
    ///
    /// # Panics
    ///
    /// Panics if a result was already recorded under `id`.
    pub fn record_raw(&self, id: u64, payload: String) {
        self.record(id, Stored::Raw(payload));
    }

    fn record(&self, id: u64, stored: Stored) {
        let mut inner = self.lock();
        assert!(
            !inner.payloads.contains_key(&id),
            "result already recorded for experiment {id}"
        );
        inner.payloads.insert(id, stored);
        inner.last_id = Some(id);
    }

    /// Id of the most recently completed experiment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoExperiments`] while the store is empty.
    pub fn last_experiment_id(&self) -> Result<u64> {
        self.lock().last_id.ok_or(Error::NoExperiments)
    }

    /// Read the result recorded under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no experiment with this id has
    /// ever completed, or [`Error::Storage`] if the stored payload
    /// exists but does not decode.
    pub fn read_result(&self, id: u64) -> Result<ResultDocument> {
        let stored = self
            .lock()
            .payloads
            .get(&id)
            .cloned()
            .ok_or(Error::NotFound(id))?;
        match stored {
            Stored::Document(document) => Ok(document),
            Stored::Raw(payload) => {
                let value: Value = serde_json::from_str(&payload).map_err(|e| Error::Storage {
                    id,
                    reason: e.to_string(),
                })?;
                Ok(ResultDocument::success(value))
            }
        }
    }

    /// Number of completed experiments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().payloads.len()
    }

    /// Whether any experiment has completed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().payloads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_store_starts_empty() {
        let store = ResultStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(matches!(
            store.last_experiment_id(),
            Err(Error::NoExperiments)
        ));
    }

    #[test]
    fn test_ids_strictly_increase() {
        let store = ResultStore::new();
        let a = store.next_id();
        let b = store.next_id();
        let c = store.next_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_record_then_read_round_trip() {
        let store = ResultStore::new();
        let id = store.next_id();
        let doc = ResultDocument::success(json!({"experimentTasks": []}));

        store.record_result(id, &doc);

        assert_eq!(store.read_result(id).unwrap(), doc);
        assert_eq!(store.last_experiment_id().unwrap(), id);
    }

    #[test]
    fn test_reads_are_idempotent() {
        let store = ResultStore::new();
        let id = store.next_id();
        let doc = ResultDocument::success(json!({"experimentTasks": [{"taskId": 1}]}));
        store.record_result(id, &doc);

        for _ in 0..3 {
            assert_eq!(store.read_result(id).unwrap(), doc);
        }
    }

    #[test]
    fn test_error_document_round_trips() {
        let store = ResultStore::new();
        let id = store.next_id();
        let doc = ResultDocument::error(i64::try_from(id).unwrap(), "linker crashed");
        store.record_result(id, &doc);

        let read = store.read_result(id).unwrap();
        assert!(read.is_error());
        assert_eq!(read, doc);
    }

    #[test]
    fn test_read_unknown_id_is_not_found() {
        let store = ResultStore::new();
        assert!(matches!(store.read_result(9999), Err(Error::NotFound(9999))));
    }

    #[test]
    fn test_corrupt_payload_is_storage_error() {
        let store = ResultStore::new();
        let id = store.next_id();
        store.record_raw(id, "{not json".to_string());

        match store.read_result(id) {
            Err(Error::Storage { id: got, .. }) => assert_eq!(got, id),
            other => panic!("expected storage error, got {other:?}"),
        }
    }

    #[test]
    #[should_panic(expected = "result already recorded")]
    fn test_duplicate_record_panics() {
        let store = ResultStore::new();
        let id = store.next_id();
        let doc = ResultDocument::success(json!({}));
        store.record_result(id, &doc);
        store.record_result(id, &doc);
    }

    #[test]
    fn test_last_id_tracks_most_recent_write() {
        let store = ResultStore::new();
        let first = store.next_id();
        let second = store.next_id();

        // Publish out of assignment order: last means last *recorded*.
        store.record_result(second, &ResultDocument::success(json!({"n": 2})));
        assert_eq!(store.last_experiment_id().unwrap(), second);

        store.record_result(first, &ResultDocument::success(json!({"n": 1})));
        assert_eq!(store.last_experiment_id().unwrap(), first);
    }
}
