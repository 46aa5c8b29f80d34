//! Per-session report store.
//!
//! Holds the last accepted report set for each browser session, in memory
//! only — nothing is written to disk, and everything is discarded when the
//! process exits. One submission overwrites the previous set for that
//! session.
//!
//! The value is kept as the JSON-serialized report array. `load` treats a
//! value that no longer parses as absent, so callers degrade to their
//! fallback data set instead of surfacing an error.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::models::DrugRiskReport;

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("Failed to serialize reports: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Session-keyed report storage.
pub struct ReportStore {
    sessions: Mutex<HashMap<Uuid, String>>,
}

impl ReportStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Persist a report set for a session, overwriting any previous value.
    pub fn save(&self, session: Uuid, reports: &[DrugRiskReport]) -> Result<(), StoreError> {
        let json = serde_json::to_string(reports)?;
        let mut sessions = self.sessions.lock().map_err(|_| StoreError::LockPoisoned)?;
        sessions.insert(session, json);
        Ok(())
    }

    /// Load the report set for a session.
    ///
    /// Returns `None` when the session has no value or the stored value
    /// fails to parse; the caller supplies the fallback.
    pub fn load(&self, session: Uuid) -> Option<Vec<DrugRiskReport>> {
        let sessions = self.sessions.lock().ok()?;
        let json = sessions.get(&session)?;
        match serde_json::from_str(json) {
            Ok(reports) => Some(reports),
            Err(e) => {
                tracing::warn!(%session, error = %e, "Session data unreadable, treating as absent");
                None
            }
        }
    }

    /// Discard the report set for a session.
    pub fn clear(&self, session: Uuid) {
        if let Ok(mut sessions) = self.sessions.lock() {
            sessions.remove(&session);
        }
    }

    /// Number of sessions holding a report set.
    pub fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store a raw value, bypassing serialization. Tests use this to plant
    /// corrupt session data.
    #[cfg(test)]
    pub(crate) fn save_raw(&self, session: Uuid, raw: &str) {
        self.sessions
            .lock()
            .expect("store lock")
            .insert(session, raw.to_string());
    }
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_reports;

    #[test]
    fn new_store_is_empty() {
        let store = ReportStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = ReportStore::new();
        let session = Uuid::new_v4();
        let reports = demo_reports();

        store.save(session, &reports).unwrap();
        let loaded = store.load(session).unwrap();
        assert_eq!(loaded, reports);
    }

    #[test]
    fn load_unknown_session_is_absent() {
        let store = ReportStore::new();
        assert!(store.load(Uuid::new_v4()).is_none());
    }

    #[test]
    fn sessions_are_isolated() {
        let store = ReportStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store.save(alice, &demo_reports()).unwrap();
        assert!(store.load(alice).is_some());
        assert!(store.load(bob).is_none());
    }

    #[test]
    fn save_overwrites_previous_value() {
        let store = ReportStore::new();
        let session = Uuid::new_v4();
        let reports = demo_reports();

        store.save(session, &reports).unwrap();
        store.save(session, &reports[..1]).unwrap();

        let loaded = store.load(session).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn corrupt_value_loads_as_absent() {
        let store = ReportStore::new();
        let session = Uuid::new_v4();

        store.save_raw(session, "{not json");
        assert!(store.load(session).is_none());
    }

    #[test]
    fn wrong_shape_value_loads_as_absent() {
        let store = ReportStore::new();
        let session = Uuid::new_v4();

        // Valid JSON, wrong shape: an object instead of a report array.
        store.save_raw(session, r#"{"reports": []}"#);
        assert!(store.load(session).is_none());
    }

    #[test]
    fn clear_removes_session_value() {
        let store = ReportStore::new();
        let session = Uuid::new_v4();

        store.save(session, &demo_reports()).unwrap();
        store.clear(session);
        assert!(store.load(session).is_none());
        assert!(store.is_empty());
    }
}
