//! Unit tests for the LocalizationEngine public API.
//!
//! These tests exercise the built-in page strings, Russian plural rules,
//! parameter interpolation and fallback behavior.

use std::collections::HashMap;

use rstest::rstest;

use startpage::services::localization_engine::{LocalizationEngine, LocalizationEngineTrait};
use startpage::types::errors::LocaleError;

#[test]
fn test_builtin_english_strings() {
    let engine = LocalizationEngine::builtin();
    assert_eq!(engine.t("app.title", None), "Love Brauzer");
    assert_eq!(engine.t("tabs.bookmarks", None), "Bookmarks");
    assert_eq!(engine.t("bookmarks.add", None), "Add");
}

#[test]
fn test_builtin_russian_strings() {
    let mut engine = LocalizationEngine::builtin();
    engine.set_locale("ru").unwrap();
    assert_eq!(engine.get_locale(), "ru");
    assert_eq!(engine.t("tabs.history", None), "История");
    assert_eq!(engine.t("bookmarks.add", None), "Добавить");
    assert_eq!(engine.t("bookmarks.placeholder_title", None), "Новая закладка");
}

#[test]
fn test_missing_key_returns_key() {
    let engine = LocalizationEngine::builtin();
    assert_eq!(engine.t("no.such.key", None), "no.such.key");
}

#[test]
fn test_interpolation() {
    let engine = LocalizationEngine::builtin();
    let mut params = HashMap::new();
    params.insert("query".to_string(), "dogs".to_string());
    assert_eq!(
        engine.t("search.history_title", Some(&params)),
        "Search: dogs"
    );
}

#[test]
fn test_unsupported_locale_keeps_current() {
    let mut engine = LocalizationEngine::builtin();
    let result = engine.set_locale("de");
    assert!(matches!(result, Err(LocaleError::UnsupportedLocale(_))));
    assert_eq!(engine.get_locale(), "en");
}

#[rstest]
#[case(0, "0 bookmarks")]
#[case(1, "1 bookmark")]
#[case(2, "2 bookmarks")]
#[case(21, "21 bookmarks")]
fn test_english_plural(#[case] count: u64, #[case] expected: &str) {
    let engine = LocalizationEngine::builtin();
    assert_eq!(engine.plural("bookmarks.count", count, None), expected);
}

#[rstest]
#[case(1, "1 закладка")]
#[case(3, "3 закладки")]
#[case(5, "5 закладок")]
#[case(11, "11 закладок")]
#[case(21, "21 закладка")]
#[case(22, "22 закладки")]
fn test_russian_plural(#[case] count: u64, #[case] expected: &str) {
    let mut engine = LocalizationEngine::builtin();
    engine.set_locale("ru").unwrap();
    assert_eq!(engine.plural("bookmarks.count", count, None), expected);
}

#[test]
fn test_plural_missing_key_returns_key() {
    let engine = LocalizationEngine::builtin();
    assert_eq!(engine.plural("tabs.count", 3, None), "tabs.count");
}

#[test]
fn test_russian_interpolation() {
    let mut engine = LocalizationEngine::builtin();
    engine.set_locale("ru").unwrap();

    let mut params = HashMap::new();
    params.insert("query".to_string(), "кошки".to_string());
    assert_eq!(
        engine.t("search.history_title", Some(&params)),
        "Поиск: кошки"
    );
}

#[test]
fn test_detect_system_locale_is_supported() {
    let engine = LocalizationEngine::builtin();
    let detected = engine.detect_system_locale();
    assert!(engine.get_available_locales().contains(&detected));
}
