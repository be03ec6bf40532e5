//! Dashboard aggregates derived from a user's history log. Computed on
//! read, never stored.

use serde::{Deserialize, Serialize};

use super::HistoryEntry;
use crate::scoring::FootprintCategory;

/// Direction of change between the two most recent calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Worsening,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub latest: Option<HistoryEntry>,
    /// Mean total score over all entries, 0.0 when the log is empty.
    pub average_score: f64,
    /// Number of entries in the `good` category.
    pub good_count: usize,
    /// Absent below two entries; otherwise compares only the two most
    /// recent scores, ties counting as worsening.
    pub trend: Option<Trend>,
}

pub fn summarize(history: &[HistoryEntry]) -> DashboardSummary {
    let latest = history.first().cloned();
    let average_score = if history.is_empty() {
        0.0
    } else {
        history.iter().map(|e| e.result.total_score).sum::<f64>() / history.len() as f64
    };
    let good_count = history
        .iter()
        .filter(|e| e.result.category == FootprintCategory::Good)
        .count();
    let trend = if history.len() < 2 {
        None
    } else if history[0].result.total_score < history[1].result.total_score {
        Some(Trend::Improving)
    } else {
        Some(Trend::Worsening)
    };

    DashboardSummary {
        latest,
        average_score,
        good_count,
        trend,
    }
}
