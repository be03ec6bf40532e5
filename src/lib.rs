pub mod accounts;
pub mod history;
pub mod scoring;
pub mod storage;
pub mod workspace;

// Re-export commonly used types for convenience.
pub use accounts::{AccountStore, SessionStore, UserAccount};
pub use history::{summarize, DashboardSummary, HistoryEntry, HistoryStore, Trend};
pub use scoring::{
    score, score_with_rng, FootprintCategory, ScoreBreakdown, ScoringResult, SurveyRecord,
};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use workspace::AppConfig;
