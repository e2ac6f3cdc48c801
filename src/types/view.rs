use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::IntentError;

/// The top-level section currently shown on the start page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Home,
    Bookmarks,
    History,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [ActiveTab::Home, ActiveTab::Bookmarks, ActiveTab::History];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveTab::Home => "home",
            ActiveTab::Bookmarks => "bookmarks",
            ActiveTab::History => "history",
        }
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActiveTab {
    type Err = IntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(ActiveTab::Home),
            "bookmarks" => Ok(ActiveTab::Bookmarks),
            "history" => Ok(ActiveTab::History),
            other => Err(IntentError::UnknownTab(other.to_string())),
        }
    }
}
