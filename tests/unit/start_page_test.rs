//! Unit tests for the `StartPage` state container.
//!
//! These tests exercise the user intents (search, add/remove bookmark, tab
//! selection) through the public API, starting from the seeded state.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rstest::rstest;

use startpage::managers::bookmark_manager::BookmarkManagerTrait;
use startpage::managers::history_manager::HistoryManagerTrait;
use startpage::services::id_generator::SequentialIdGenerator;
use startpage::services::search_engine::SearchEngine;
use startpage::store::{Action, PageState, StartPage};
use startpage::types::view::ActiveTab;

const T0: i64 = 1_700_000_000_000;

fn fixed_clock() -> i64 {
    T0 + 5_000
}

/// Helper: a seeded page with deterministic ids and clock.
fn setup() -> StartPage {
    StartPage::with_parts(
        PageState::seeded(T0),
        Box::new(SequentialIdGenerator::new("new-")),
        SearchEngine::default(),
    )
    .with_clock(fixed_clock)
}

#[test]
fn test_initial_state() {
    let page = setup();
    let state = page.snapshot();

    assert_eq!(state.search_query, "");
    assert_eq!(state.active_tab, ActiveTab::Home);
    assert_eq!(state.bookmarks.len(), 3);
    assert_eq!(state.history.len(), 2);
    assert_eq!(state.history.newest().unwrap().title, "Wikipedia");
    assert_eq!(state.history.entries().nth(1).unwrap().visited_at, T0 - 3_600_000);
}

#[test]
fn test_submit_search_cats() {
    let mut page = setup();
    let id = page.submit_search("cats").expect("non-empty search is recorded");

    let state = page.snapshot();
    assert_eq!(state.history.len(), 3);
    let newest = state.history.newest().unwrap();
    assert_eq!(newest.id, id);
    assert_eq!(newest.title, "Search: cats");
    assert_eq!(newest.url, "https://www.google.com/search?q=cats");
    assert_eq!(newest.visited_at, fixed_clock());
}

#[test]
fn test_submit_search_clears_field() {
    let mut page = setup();
    page.set_query("rust lang");
    assert_eq!(page.snapshot().search_query, "rust lang");

    page.submit_search("rust lang");

    let state = page.snapshot();
    assert_eq!(state.search_query, "");
    assert_eq!(
        state.history.newest().unwrap().url,
        "https://www.google.com/search?q=rust%20lang"
    );
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn test_blank_search_is_ignored(#[case] query: &str) {
    let mut page = setup();
    page.set_query(query);
    let before = page.snapshot();

    assert!(page.submit_search(query).is_none());

    let after = page.snapshot();
    assert_eq!(*before, *after);
    assert_eq!(after.search_query, query);
    assert_eq!(after.history.len(), 2);
}

#[test]
fn test_add_bookmark_appends_last() {
    let mut page = setup();
    let id = page.add_bookmark("Rust", "https://rust-lang.org");

    let state = page.snapshot();
    assert_eq!(state.bookmarks.len(), 4);
    let last = state.bookmarks.list_bookmarks().last().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.title, "Rust");
    assert_eq!(last.url, "https://rust-lang.org");
}

#[test]
fn test_add_then_remove_restores_original() {
    let mut page = setup();
    let original = page.snapshot();

    let id = page.add_bookmark("Example", "https://example.com");
    assert!(page.remove_bookmark(&id));

    let state = page.snapshot();
    assert_eq!(state.bookmarks, original.bookmarks);
}

#[test]
fn test_remove_unknown_bookmark_is_noop() {
    let mut page = setup();
    let before = page.snapshot();

    assert!(!page.remove_bookmark("does-not-exist"));
    assert!(Arc::ptr_eq(&before, &page.snapshot()));
}

#[test]
fn test_remove_seed_bookmark() {
    let mut page = setup();
    assert!(page.remove_bookmark("2"));

    let state = page.snapshot();
    let titles: Vec<&str> = state.bookmarks.list_bookmarks().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Google", "GitHub"]);
}

#[rstest]
#[case(ActiveTab::Home)]
#[case(ActiveTab::Bookmarks)]
#[case(ActiveTab::History)]
fn test_select_tab_from_every_tab(#[case] target: ActiveTab) {
    for from in ActiveTab::ALL {
        let mut page = setup();
        page.select_tab(from);
        page.select_tab(target);
        assert_eq!(page.snapshot().active_tab, target);
    }
}

#[test]
fn test_select_tab_changes_nothing_else() {
    let mut page = setup();
    let before = page.snapshot();
    page.select_tab(ActiveTab::History);
    let after = page.snapshot();

    assert_eq!(after.bookmarks, before.bookmarks);
    assert_eq!(after.history, before.history);
    assert_eq!(after.search_query, before.search_query);
}

#[test]
fn test_snapshots_are_immutable() {
    let mut page = setup();
    let old = page.snapshot();
    page.add_bookmark("X", "https://x.example");
    page.submit_search("x");

    assert_eq!(old.bookmarks.len(), 3);
    assert_eq!(old.history.len(), 2);
}

#[test]
fn test_dispatch_reports_created_id() {
    let mut page = setup();
    let transition = page.dispatch(Action::AddBookmark {
        title: "A".into(),
        url: "https://a.example".into(),
    });
    assert!(transition.changed);
    assert_eq!(transition.created_id.as_deref(), Some("new-1"));

    let transition = page.dispatch(Action::SelectTab(ActiveTab::Home));
    assert!(!transition.changed);
    assert!(transition.created_id.is_none());
}

#[test]
fn test_observers_fire_once_per_change() {
    let mut page = setup();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    page.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    page.submit_search("cats"); // change
    page.submit_search("  "); // no-op
    page.remove_bookmark("missing"); // no-op
    page.select_tab(ActiveTab::Home); // already home
    page.select_tab(ActiveTab::Bookmarks); // change

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_observer_sees_new_snapshot() {
    let mut page = setup();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    page.subscribe(move |state| {
        sink.lock().unwrap().push(state.bookmarks.len());
    });

    page.add_bookmark("A", "https://a.example");
    page.add_bookmark("B", "https://b.example");

    assert_eq!(*seen.lock().unwrap(), vec![4, 5]);
}

#[test]
fn test_unsubscribe() {
    let mut page = setup();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let sub = page.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(page.observer_count(), 1);

    page.select_tab(ActiveTab::History);
    assert!(page.unsubscribe(sub));
    assert!(!page.unsubscribe(sub));
    page.select_tab(ActiveTab::Home);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(page.observer_count(), 0);
}

#[test]
fn test_default_page_uses_uuid_ids() {
    let mut page = StartPage::new();
    let id = page.add_bookmark("A", "https://a.example");
    assert!(uuid::Uuid::parse_str(&id).is_ok());
}
