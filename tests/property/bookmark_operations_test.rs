//! Property-based tests for bookmark intents on the start page.
//!
//! Adding a bookmark always appends exactly one entry at the end of the list,
//! and removing it again restores the previous list, for arbitrary titles
//! and URLs.

use proptest::prelude::*;

use startpage::managers::bookmark_manager::BookmarkManagerTrait;
use startpage::services::id_generator::SequentialIdGenerator;
use startpage::services::search_engine::SearchEngine;
use startpage::store::{PageState, StartPage};

/// Strategy for generating URL strings.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".ru"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

/// Titles may be any printable text, markup included.
fn arb_title() -> impl Strategy<Value = String> {
    "[^\\x00-\\x1f]{0,40}"
}

fn page() -> StartPage {
    StartPage::with_parts(
        PageState::seeded(0),
        Box::new(SequentialIdGenerator::default()),
        SearchEngine::default(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn add_bookmark_appends_one_entry(title in arb_title(), url in arb_url()) {
        let mut page = page();
        let before = page.snapshot();

        let id = page.add_bookmark(&title, &url);
        let after = page.snapshot();

        prop_assert_eq!(after.bookmarks.len(), before.bookmarks.len() + 1);
        let last = after.bookmarks.list_bookmarks().last().unwrap();
        prop_assert_eq!(&last.id, &id);
        prop_assert_eq!(&last.title, &title);
        prop_assert_eq!(&last.url, &url);
        // Existing bookmarks keep their order
        prop_assert_eq!(
            &after.bookmarks.list_bookmarks()[..before.bookmarks.len()],
            before.bookmarks.list_bookmarks()
        );
    }

    #[test]
    fn add_then_remove_restores_bookmarks(
        entries in proptest::collection::vec((arb_title(), arb_url()), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut page = page();
        let ids: Vec<String> = entries
            .iter()
            .map(|(title, url)| page.add_bookmark(title, url))
            .collect();
        let before = page.snapshot();

        let id = page.add_bookmark("extra", "https://extra.example");
        prop_assert!(page.remove_bookmark(&id));
        let restored = page.snapshot();
        prop_assert_eq!(&restored.bookmarks, &before.bookmarks);

        // Removing any other bookmark leaves everything else in order
        let victim = pick.get(&ids).clone();
        prop_assert!(page.remove_bookmark(&victim));
        let after = page.snapshot();
        prop_assert_eq!(after.bookmarks.len(), before.bookmarks.len() - 1);
        prop_assert!(!after.bookmarks.contains_id(&victim));
        let expected: Vec<_> = before
            .bookmarks
            .list_bookmarks()
            .iter()
            .filter(|b| b.id != victim)
            .cloned()
            .collect();
        prop_assert_eq!(after.bookmarks.list_bookmarks(), expected.as_slice());
    }

    #[test]
    fn bookmark_ids_are_unique(count in 1usize..30) {
        let mut page = page();
        for i in 0..count {
            page.add_bookmark(&format!("b{}", i), "https://example.com");
        }
        let state = page.snapshot();
        let mut ids: Vec<&str> = state
            .bookmarks
            .list_bookmarks()
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), state.bookmarks.len());
    }
}
