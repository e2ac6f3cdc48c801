use serde::{Deserialize, Serialize};

/// Default search URL; `{query}` is replaced by the URL-encoded query.
pub const DEFAULT_SEARCH_TEMPLATE: &str = "https://www.google.com/search?q={query}";

/// Top-level start page settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StartPageSettings {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub appearance: AppearanceSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    pub language: String,
    pub search_template: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            search_template: DEFAULT_SEARCH_TEMPLATE.to_string(),
        }
    }
}

/// Appearance and layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceSettings {
    /// How many bookmarks the home tab shows under "Popular sites".
    pub popular_sites_limit: usize,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            popular_sites_limit: 6,
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// A `tracing_subscriber::EnvFilter` directive, e.g. `"info"` or `"startpage=debug"`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
