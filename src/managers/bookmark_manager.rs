//! Bookmark Manager for StartPage.
//!
//! Implements `BookmarkManagerTrait` over an in-memory, insertion-ordered list.
//! Nothing is persisted; the list starts from the seed bookmarks every run.

use serde::{Deserialize, Serialize};

use crate::types::bookmark::Bookmark;

/// Trait defining bookmark management operations.
pub trait BookmarkManagerTrait {
    /// Appends a bookmark with the given id. Returns the id.
    fn add_bookmark(&mut self, id: String, title: &str, url: &str) -> String;
    /// Removes every bookmark with `id`. Returns how many were removed.
    fn remove_bookmark(&mut self, id: &str) -> usize;
    fn list_bookmarks(&self) -> &[Bookmark];
    /// The first `limit` bookmarks, in insertion order.
    fn popular(&self, limit: usize) -> &[Bookmark];
    fn contains_id(&self, id: &str) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory bookmark list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkManager {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkManager {
    /// The bookmarks every session starts with.
    pub fn seeded() -> Self {
        Self {
            bookmarks: vec![
                Bookmark::new("1", "Google", "https://google.com"),
                Bookmark::new("2", "YouTube", "https://youtube.com"),
                Bookmark::new("3", "GitHub", "https://github.com"),
            ],
        }
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    fn add_bookmark(&mut self, id: String, title: &str, url: &str) -> String {
        self.bookmarks.push(Bookmark::new(id.clone(), title, url));
        id
    }

    fn remove_bookmark(&mut self, id: &str) -> usize {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.id != id);
        before - self.bookmarks.len()
    }

    fn list_bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn popular(&self, limit: usize) -> &[Bookmark] {
        &self.bookmarks[..limit.min(self.bookmarks.len())]
    }

    fn contains_id(&self, id: &str) -> bool {
        self.bookmarks.iter().any(|b| b.id == id)
    }

    fn len(&self) -> usize {
        self.bookmarks.len()
    }
}
