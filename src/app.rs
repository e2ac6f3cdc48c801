//! App Core for StartPage.
//!
//! Central struct holding the page state container, settings and locale, and
//! keeping them consistent with each other.

use tracing::{debug, info, warn};

use crate::services::localization_engine::{LocalizationEngine, LocalizationEngineTrait};
use crate::services::search_engine::SearchEngine;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::store::{StartPage, Transition};
use crate::types::errors::{LocaleError, SettingsError};
use crate::types::settings::StartPageSettings;
use crate::ui::intent::Intent;
use crate::ui::page::PageView;

/// `general.language` value that selects the locale from `$LANG`.
pub const AUTO_LANGUAGE: &str = "auto";

/// Central application struct.
pub struct App {
    pub page: StartPage,
    pub settings_engine: SettingsEngine,
    pub localization_engine: LocalizationEngine,
}

impl App {
    /// Loads settings from `config_path` (or the platform default) and builds
    /// a freshly seeded page.
    pub fn new(config_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(config_path);
        settings_engine.load()?;
        Ok(Self::with_parts(StartPage::new(), settings_engine))
    }

    /// Builds an app from an existing page and settings, without touching disk.
    pub fn with_parts(page: StartPage, settings_engine: SettingsEngine) -> Self {
        let mut app = Self {
            page,
            settings_engine,
            localization_engine: LocalizationEngine::builtin(),
        };
        app.apply_settings();
        app
    }

    pub fn settings(&self) -> &StartPageSettings {
        self.settings_engine.get_settings()
    }

    /// Pushes the current settings into the locale and the page.
    fn apply_settings(&mut self) {
        let settings = self.settings_engine.get_settings().clone();

        let lang = if settings.general.language == AUTO_LANGUAGE {
            self.localization_engine.detect_system_locale()
        } else {
            settings.general.language.clone()
        };
        if let Err(e) = self.localization_engine.set_locale(&lang) {
            warn!(language = %lang, error = %e, "keeping current locale");
        }
        self.sync_search_title();

        self.page
            .set_search_engine(SearchEngine::new(&settings.general.search_template));
        debug!(
            locale = self.localization_engine.get_locale(),
            template = self.page.search_engine().template(),
            "settings applied"
        );
    }

    fn sync_search_title(&mut self) {
        let title = self.localization_engine.t("search.history_title", None);
        self.page.set_search_title(title);
    }

    /// Switches the UI language for this session.
    pub fn set_locale(&mut self, lang: &str) -> Result<(), LocaleError> {
        self.localization_engine.set_locale(lang)?;
        self.sync_search_title();
        info!(locale = lang, "locale changed");
        Ok(())
    }

    /// Updates one setting, saves it, and applies it.
    pub fn set_setting(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        self.settings_engine.set_value(key, value)?;
        self.apply_settings();
        Ok(())
    }

    /// Applies a page intent. `UiReady` changes nothing.
    pub fn apply_intent(&mut self, intent: Intent) -> Transition {
        let placeholder = self.localization_engine.t("bookmarks.placeholder_title", None);
        match intent.into_action(&placeholder) {
            Some(action) => self.page.dispatch(action),
            None => Transition::default(),
        }
    }

    /// Renders the current snapshot.
    pub fn render_document(&self) -> String {
        let state = self.page.snapshot();
        PageView::new(&state, &self.localization_engine, self.settings().appearance.popular_sites_limit)
            .document()
    }

    /// The `#app` re-render payload for the current snapshot.
    pub fn render_payload(&self) -> serde_json::Value {
        let state = self.page.snapshot();
        PageView::new(&state, &self.localization_engine, self.settings().appearance.popular_sites_limit)
            .render_payload()
    }
}
