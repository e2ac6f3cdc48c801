//! Unit tests for decoding page IPC messages.

use rstest::rstest;

use startpage::store::Action;
use startpage::types::errors::IntentError;
use startpage::types::view::ActiveTab;
use startpage::ui::intent::{decode, Intent, PLACEHOLDER_BOOKMARK_URL};

#[test]
fn test_decode_submit_search() {
    let intent = decode(r#"{"cmd":"submit_search","query":"cats"}"#).unwrap();
    assert_eq!(intent, Intent::SubmitSearch("cats".to_string()));
}

#[test]
fn test_decode_set_query_keeps_whitespace() {
    let intent = decode(r#"{"cmd":"set_query","query":"  a "}"#).unwrap();
    assert_eq!(intent, Intent::SetQuery("  a ".to_string()));
}

#[rstest]
#[case("home", ActiveTab::Home)]
#[case("bookmarks", ActiveTab::Bookmarks)]
#[case("history", ActiveTab::History)]
fn test_decode_select_tab(#[case] name: &str, #[case] tab: ActiveTab) {
    let msg = format!(r#"{{"cmd":"select_tab","tab":"{}"}}"#, name);
    assert_eq!(decode(&msg).unwrap(), Intent::SelectTab(tab));
}

#[test]
fn test_decode_remove_bookmark() {
    let intent = decode(r#"{"cmd":"remove_bookmark","id":"3"}"#).unwrap();
    assert_eq!(intent, Intent::RemoveBookmark("3".to_string()));
}

#[test]
fn test_add_bookmark_placeholders() {
    let intent = decode(r#"{"cmd":"add_bookmark"}"#).unwrap();
    let action = intent.into_action("New bookmark").unwrap();
    assert_eq!(
        action,
        Action::AddBookmark {
            title: "New bookmark".to_string(),
            url: PLACEHOLDER_BOOKMARK_URL.to_string(),
        }
    );
}

#[test]
fn test_add_bookmark_with_values() {
    let intent = decode(r#"{"cmd":"add_bookmark","title":"Rust","url":"https://rust-lang.org"}"#).unwrap();
    let action = intent.into_action("unused").unwrap();
    assert_eq!(
        action,
        Action::AddBookmark {
            title: "Rust".to_string(),
            url: "https://rust-lang.org".to_string(),
        }
    );
}

#[test]
fn test_ui_ready_has_no_action() {
    let intent = decode(r#"{"cmd":"ui_ready"}"#).unwrap();
    assert_eq!(intent, Intent::UiReady);
    assert!(intent.into_action("x").is_none());
}

#[rstest]
#[case("not json")]
#[case(r#"{"query":"cats"}"#)]
#[case(r#"{"cmd":42}"#)]
fn test_malformed(#[case] message: &str) {
    assert!(matches!(decode(message), Err(IntentError::Malformed(_))));
}

#[test]
fn test_unknown_command() {
    assert_eq!(
        decode(r#"{"cmd":"navigate","url":"https://x"}"#),
        Err(IntentError::UnknownCommand("navigate".to_string()))
    );
}

#[test]
fn test_missing_field() {
    assert_eq!(
        decode(r#"{"cmd":"remove_bookmark"}"#),
        Err(IntentError::MissingField("id"))
    );
    assert_eq!(
        decode(r#"{"cmd":"submit_search","query":7}"#),
        Err(IntentError::MissingField("query"))
    );
}

#[test]
fn test_unknown_tab() {
    assert_eq!(
        decode(r#"{"cmd":"select_tab","tab":"settings"}"#),
        Err(IntentError::UnknownTab("settings".to_string()))
    );
}
