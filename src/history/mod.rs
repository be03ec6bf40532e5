//! Per-user append-only log of past scoring results.

mod summary;

pub use summary::{summarize, DashboardSummary, Trend};

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::{ScoringResult, SurveyRecord};
use crate::storage::{history_key, Storage};

/// One past calculation. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub result: ScoringResult,
    pub data: SurveyRecord,
}

/// Persists each user's history under its own storage key, newest-first.
///
/// Append re-reads and rewrites the whole log, so the storage discipline
/// assumes at most one writer per user key at a time (single session).
pub struct HistoryStore<S: Storage> {
    storage: S,
}

impl<S: Storage> HistoryStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Record a scoring result for a user and return the created entry.
    pub fn append(
        &mut self,
        user_id: &str,
        result: ScoringResult,
        data: SurveyRecord,
    ) -> Result<HistoryEntry> {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            date: Utc::now(),
            result,
            data,
        };
        let mut log = self.read_all(user_id)?;
        log.insert(0, entry.clone());
        let payload = serde_json::to_string_pretty(&log)?;
        self.storage.set(&history_key(user_id), &payload)?;
        Ok(entry)
    }

    /// Full log for a user, newest-first. A missing or corrupt record reads
    /// as an empty log, never a fault.
    pub fn read_all(&self, user_id: &str) -> Result<Vec<HistoryEntry>> {
        let Some(payload) = self.storage.get(&history_key(user_id))? else {
            return Ok(Vec::new());
        };
        Ok(serde_json::from_str(&payload).unwrap_or_default())
    }
}
