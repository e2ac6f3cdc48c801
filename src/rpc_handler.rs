//! RPC method handler for the StartPage JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches method calls to the store, settings and locale
//! through the `App` struct.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::bookmark_manager::BookmarkManagerTrait;
use crate::managers::history_manager::HistoryManagerTrait;
use crate::services::localization_engine::LocalizationEngineTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::store::Action;
use crate::types::view::ActiveTab;
use crate::ui::intent::Intent;

fn str_param<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(|v| v.as_str())
}

/// Like `str_param`, but blank strings count as absent.
fn non_blank_param(params: &Value, name: &str) -> Option<String> {
    str_param(params, name)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    let mut a = app.lock().map_err(|e| e.to_string())?;

    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── State ───
        "state.get" => serde_json::to_value(&*a.page.snapshot()).map_err(|e| e.to_string()),
        "page.render" => Ok(json!({"html": a.render_document()})),

        // ─── Search ───
        "search.set_query" => {
            let query = str_param(params, "query").ok_or("missing query")?;
            a.page.set_query(query);
            Ok(json!({"ok": true}))
        }
        "search.submit" => {
            // Falls back to the query held in state, like pressing Enter in the field
            let query = match str_param(params, "query") {
                Some(q) => q.to_string(),
                None => a.page.snapshot().search_query.clone(),
            };
            let transition = a.page.dispatch(Action::SubmitSearch(query));
            let entry = transition
                .created_id
                .as_ref()
                .and_then(|_| a.page.snapshot().history.newest().cloned());
            Ok(json!({"recorded": transition.changed, "entry": entry}))
        }

        // ─── Bookmarks ───
        "bookmark.add" => {
            let intent = Intent::AddBookmark {
                title: non_blank_param(params, "title"),
                url: non_blank_param(params, "url"),
            };
            let transition = a.apply_intent(intent);
            let id = transition.created_id.ok_or("bookmark was not created")?;
            let snapshot = a.page.snapshot();
            let bookmark = snapshot
                .bookmarks
                .list_bookmarks()
                .iter()
                .find(|b| b.id == id)
                .cloned();
            Ok(json!(bookmark))
        }
        "bookmark.remove" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let removed = a.page.remove_bookmark(id);
            Ok(json!({"removed": removed}))
        }
        "bookmark.list" => {
            let snapshot = a.page.snapshot();
            Ok(json!(snapshot.bookmarks.list_bookmarks()))
        }

        // ─── History ───
        "history.list" => {
            let snapshot = a.page.snapshot();
            let entries: Vec<_> = snapshot.history.entries().collect();
            Ok(json!(entries))
        }

        // ─── Tabs ───
        "tab.select" => {
            let tab: ActiveTab = str_param(params, "tab")
                .ok_or("missing tab")?
                .parse()
                .map_err(|e: crate::types::errors::IntentError| e.to_string())?;
            a.page.select_tab(tab);
            Ok(json!({"active_tab": tab}))
        }

        // ─── Settings / locale ───
        "settings.get" => {
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key").ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            a.set_setting(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "locale.set" => {
            let lang = str_param(params, "locale").ok_or("missing locale")?;
            a.set_locale(lang).map_err(|e| e.to_string())?;
            Ok(json!({"locale": a.localization_engine.get_locale()}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
