//! History Manager for StartPage.
//!
//! Implements `HistoryManagerTrait` as an in-memory log ordered newest first.
//! Entries are only ever added at the front; nothing is edited or removed.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::history::HistoryItem;

/// One hour in milliseconds, the age of the older seed entry.
const HOUR_MS: i64 = 3_600_000;

/// Trait defining history operations.
pub trait HistoryManagerTrait {
    /// Prepends `item`, making it the newest entry.
    fn record_visit(&mut self, item: HistoryItem);
    /// Entries from newest to oldest.
    fn entries(&self) -> std::collections::vec_deque::Iter<'_, HistoryItem>;
    fn newest(&self) -> Option<&HistoryItem>;
    fn contains_id(&self, id: &str) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory history log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryManager {
    items: VecDeque<HistoryItem>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entries every session starts with, relative to `now_ms`.
    pub fn seeded(now_ms: i64) -> Self {
        let items = VecDeque::from(vec![
            HistoryItem {
                id: "1".to_string(),
                title: "Wikipedia".to_string(),
                url: "https://wikipedia.org".to_string(),
                visited_at: now_ms,
            },
            HistoryItem {
                id: "2".to_string(),
                title: "Stack Overflow".to_string(),
                url: "https://stackoverflow.com".to_string(),
                visited_at: now_ms - HOUR_MS,
            },
        ]);
        Self { items }
    }
}

impl HistoryManagerTrait for HistoryManager {
    fn record_visit(&mut self, item: HistoryItem) {
        self.items.push_front(item);
    }

    fn entries(&self) -> std::collections::vec_deque::Iter<'_, HistoryItem> {
        self.items.iter()
    }

    fn newest(&self) -> Option<&HistoryItem> {
        self.items.front()
    }

    fn contains_id(&self, id: &str) -> bool {
        self.items.iter().any(|h| h.id == id)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
