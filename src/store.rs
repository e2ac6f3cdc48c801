//! Start page state container.
//!
//! `StartPage` is the single owner of the page state. Every user intent is an
//! [`Action`]; `dispatch` runs the pure [`reduce`] transition, installs the
//! resulting immutable [`PageState`] snapshot and notifies subscribers.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::services::id_generator::{IdGenerator, UuidGenerator};
use crate::services::search_engine::SearchEngine;
use crate::types::history::HistoryItem;
use crate::types::view::ActiveTab;

/// Title used for history entries created by a search; `{query}` is replaced.
pub const DEFAULT_SEARCH_TITLE: &str = "Search: {query}";

/// How many ids to draw from the generator before falling back to a UUID.
const MAX_ID_ATTEMPTS: usize = 8;

/// A user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The search field was edited.
    SetQuery(String),
    /// The search form was submitted with this text.
    SubmitSearch(String),
    AddBookmark { title: String, url: String },
    RemoveBookmark(String),
    SelectTab(ActiveTab),
}

/// Immutable snapshot of everything the page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub search_query: String,
    pub active_tab: ActiveTab,
    pub bookmarks: BookmarkManager,
    pub history: HistoryManager,
}

impl PageState {
    /// Empty query, home tab, seed bookmarks and history.
    pub fn seeded(now_ms: i64) -> Self {
        Self {
            search_query: String::new(),
            active_tab: ActiveTab::Home,
            bookmarks: BookmarkManager::seeded(),
            history: HistoryManager::seeded(now_ms),
        }
    }
}

/// What a dispatched action did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub changed: bool,
    /// Id of the bookmark or history item the action created.
    pub created_id: Option<String>,
}

/// Everything a transition may need besides the current state.
pub struct ReduceContext<'a> {
    pub ids: &'a mut dyn IdGenerator,
    pub search: &'a SearchEngine,
    pub search_title: &'a str,
    pub now_ms: i64,
}

/// Computes the state that follows `action`.
///
/// Returns `None` when the action leaves the state unchanged, together with
/// the id of any entity the action created.
pub fn reduce(
    state: &PageState,
    action: Action,
    ctx: &mut ReduceContext<'_>,
) -> (Option<PageState>, Option<String>) {
    match action {
        Action::SetQuery(text) => {
            if text == state.search_query {
                return (None, None);
            }
            let mut next = state.clone();
            next.search_query = text;
            (Some(next), None)
        }

        Action::SubmitSearch(query) => {
            if query.trim().is_empty() {
                return (None, None);
            }
            let id = fresh_id(ctx.ids, |id| state.history.contains_id(id));
            let item = HistoryItem {
                id: id.clone(),
                title: ctx.search_title.replace("{query}", &query),
                url: ctx.search.search_url(&query),
                visited_at: ctx.now_ms,
            };
            let mut next = state.clone();
            next.history.record_visit(item);
            next.search_query.clear();
            (Some(next), Some(id))
        }

        Action::AddBookmark { title, url } => {
            let id = fresh_id(ctx.ids, |id| state.bookmarks.contains_id(id));
            let mut next = state.clone();
            next.bookmarks.add_bookmark(id.clone(), &title, &url);
            (Some(next), Some(id))
        }

        Action::RemoveBookmark(id) => {
            if !state.bookmarks.contains_id(&id) {
                return (None, None);
            }
            let mut next = state.clone();
            next.bookmarks.remove_bookmark(&id);
            (Some(next), None)
        }

        Action::SelectTab(tab) => {
            if tab == state.active_tab {
                return (None, None);
            }
            let mut next = state.clone();
            next.active_tab = tab;
            (Some(next), None)
        }
    }
}

/// Draws ids until one is not `taken`.
fn fresh_id(ids: &mut dyn IdGenerator, taken: impl Fn(&str) -> bool) -> String {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = ids.next_id();
        if !taken(&id) {
            return id;
        }
        warn!(id = %id, "id generator returned an id already in use");
    }
    loop {
        let id = Uuid::new_v4().to_string();
        if !taken(&id) {
            return id;
        }
    }
}

/// Handle returned by [`StartPage::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&Arc<PageState>) + Send>;

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Owner of the page state.
pub struct StartPage {
    state: Arc<PageState>,
    ids: Box<dyn IdGenerator>,
    search: SearchEngine,
    search_title: String,
    clock: fn() -> i64,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl StartPage {
    /// Seeded state, UUID ids, the default search engine.
    pub fn new() -> Self {
        Self::with_parts(
            PageState::seeded(now_millis()),
            Box::new(UuidGenerator),
            SearchEngine::default(),
        )
    }

    pub fn with_parts(state: PageState, ids: Box<dyn IdGenerator>, search: SearchEngine) -> Self {
        Self {
            state: Arc::new(state),
            ids,
            search,
            search_title: DEFAULT_SEARCH_TITLE.to_string(),
            clock: now_millis,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Replaces the time source used to stamp new history items.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn set_search_engine(&mut self, search: SearchEngine) {
        self.search = search;
    }

    pub fn search_engine(&self) -> &SearchEngine {
        &self.search
    }

    /// Sets the history title used for searches, e.g. `"Поиск: {query}"`.
    pub fn set_search_title(&mut self, template: impl Into<String>) {
        self.search_title = template.into();
    }

    /// The current state. Cheap: clones an `Arc`.
    pub fn snapshot(&self) -> Arc<PageState> {
        Arc::clone(&self.state)
    }

    /// Applies `action`, then notifies subscribers if the state changed.
    pub fn dispatch(&mut self, action: Action) -> Transition {
        debug!(?action, "dispatch");
        let mut ctx = ReduceContext {
            ids: self.ids.as_mut(),
            search: &self.search,
            search_title: &self.search_title,
            now_ms: (self.clock)(),
        };
        let (next, created_id) = reduce(&self.state, action, &mut ctx);

        let changed = match next {
            Some(next) => {
                self.state = Arc::new(next);
                self.notify();
                true
            }
            None => false,
        };
        Transition { changed, created_id }
    }

    pub fn set_query(&mut self, text: &str) {
        self.dispatch(Action::SetQuery(text.to_string()));
    }

    /// Records a search in history. Returns the new entry's id, or `None` if
    /// the query was blank.
    pub fn submit_search(&mut self, query: &str) -> Option<String> {
        self.dispatch(Action::SubmitSearch(query.to_string())).created_id
    }

    /// Appends a bookmark. Returns its id.
    pub fn add_bookmark(&mut self, title: &str, url: &str) -> String {
        let transition = self.dispatch(Action::AddBookmark {
            title: title.to_string(),
            url: url.to_string(),
        });
        // AddBookmark always creates an entity
        transition.created_id.unwrap_or_default()
    }

    /// Returns whether a bookmark was removed.
    pub fn remove_bookmark(&mut self, id: &str) -> bool {
        self.dispatch(Action::RemoveBookmark(id.to_string())).changed
    }

    pub fn select_tab(&mut self, tab: ActiveTab) {
        self.dispatch(Action::SelectTab(tab));
    }

    /// Registers `observer`, called with each new snapshot.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&Arc<PageState>) + Send + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns whether the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        before != self.observers.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&self) {
        for (_, observer) in &self.observers {
            observer(&self.state);
        }
    }
}

impl Default for StartPage {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StartPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StartPage")
            .field("state", &self.state)
            .field("search", &self.search)
            .field("observers", &self.observers.len())
            .finish()
    }
}
