//! Decoding of the JSON messages the page posts over the IPC channel.
//!
//! Every message is an object with a `cmd` string plus command fields, e.g.
//! `{"cmd":"remove_bookmark","id":"3"}`.

use serde_json::Value;

use crate::store::Action;
use crate::types::errors::IntentError;
use crate::types::view::ActiveTab;

/// Url of the bookmark created by the page's "Add" button.
pub const PLACEHOLDER_BOOKMARK_URL: &str = "https://example.com";

/// A decoded page message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SetQuery(String),
    SubmitSearch(String),
    /// Absent fields are filled with placeholders by [`Intent::into_action`].
    AddBookmark {
        title: Option<String>,
        url: Option<String>,
    },
    RemoveBookmark(String),
    SelectTab(ActiveTab),
    /// The page finished loading and wants the current state.
    UiReady,
}

impl Intent {
    /// Converts to a store action. `UiReady` has no action.
    pub fn into_action(self, placeholder_title: &str) -> Option<Action> {
        match self {
            Intent::SetQuery(text) => Some(Action::SetQuery(text)),
            Intent::SubmitSearch(query) => Some(Action::SubmitSearch(query)),
            Intent::AddBookmark { title, url } => Some(Action::AddBookmark {
                title: title.unwrap_or_else(|| placeholder_title.to_string()),
                url: url.unwrap_or_else(|| PLACEHOLDER_BOOKMARK_URL.to_string()),
            }),
            Intent::RemoveBookmark(id) => Some(Action::RemoveBookmark(id)),
            Intent::SelectTab(tab) => Some(Action::SelectTab(tab)),
            Intent::UiReady => None,
        }
    }
}

fn required_str(msg: &Value, field: &'static str) -> Result<String, IntentError> {
    msg.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(IntentError::MissingField(field))
}

fn optional_str(msg: &Value, field: &str) -> Option<String> {
    msg.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Characters of an IPC message kept in log output.
pub const LOG_PREVIEW_CHARS: usize = 200;

/// The first `LOG_PREVIEW_CHARS` characters of `message`, cut on a char boundary.
pub fn log_preview(message: &str) -> &str {
    message
        .char_indices()
        .nth(LOG_PREVIEW_CHARS)
        .map_or(message, |(i, _)| &message[..i])
}

/// Decodes one IPC message.
pub fn decode(message: &str) -> Result<Intent, IntentError> {
    let msg: Value =
        serde_json::from_str(message).map_err(|e| IntentError::Malformed(e.to_string()))?;
    let cmd = msg
        .get("cmd")
        .and_then(Value::as_str)
        .ok_or_else(|| IntentError::Malformed("missing cmd".to_string()))?;

    match cmd {
        "set_query" => Ok(Intent::SetQuery(required_str(&msg, "query")?)),
        "submit_search" => Ok(Intent::SubmitSearch(required_str(&msg, "query")?)),
        "add_bookmark" => Ok(Intent::AddBookmark {
            title: optional_str(&msg, "title"),
            url: optional_str(&msg, "url"),
        }),
        "remove_bookmark" => Ok(Intent::RemoveBookmark(required_str(&msg, "id")?)),
        "select_tab" => Ok(Intent::SelectTab(required_str(&msg, "tab")?.parse()?)),
        "ui_ready" => Ok(Intent::UiReady),
        other => Err(IntentError::UnknownCommand(other.to_string())),
    }
}
