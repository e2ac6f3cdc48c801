use serde::{Deserialize, Serialize};

/// Represents a single history entry for a visited page or a submitted search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Milliseconds since the UNIX epoch.
    pub visited_at: i64,
}
