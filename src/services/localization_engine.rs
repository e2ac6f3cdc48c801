use std::collections::HashMap;

use serde_json::Value;

use crate::types::errors::LocaleError;

/// Supported locales.
const SUPPORTED_LOCALES: &[&str] = &["en", "ru"];

/// Default locale when system locale is not supported.
const DEFAULT_LOCALE: &str = "en";

const BUILTIN_EN: &str = include_str!("../../locales/en.json");
const BUILTIN_RU: &str = include_str!("../../locales/ru.json");

/// Trait defining the localization engine interface.
pub trait LocalizationEngineTrait {
    fn set_locale(&mut self, lang: &str) -> Result<(), LocaleError>;
    fn get_locale(&self) -> &str;
    fn t(&self, key: &str, params: Option<&HashMap<String, String>>) -> String;
    fn plural(&self, key: &str, count: u64, params: Option<&HashMap<String, String>>) -> String;
    fn detect_system_locale(&self) -> String;
    fn get_available_locales(&self) -> Vec<String>;
}

/// Localization engine holding the page strings for English and Russian.
///
/// Both locales ship inside the binary.
pub struct LocalizationEngine {
    current_locale: String,
    locales: HashMap<String, Value>,
}

impl LocalizationEngine {
    /// Creates an engine with the built-in English and Russian strings.
    pub fn builtin() -> Self {
        let mut locales = HashMap::new();
        for (lang, raw) in [("en", BUILTIN_EN), ("ru", BUILTIN_RU)] {
            // The built-in files are part of the source tree; a parse failure
            // leaves that locale absent and lookups fall back to the key.
            if let Ok(data) = serde_json::from_str::<Value>(raw) {
                locales.insert(lang.to_string(), data);
            }
        }
        Self {
            current_locale: DEFAULT_LOCALE.to_string(),
            locales,
        }
    }

    /// Looks up a nested key in a JSON value using dot notation.
    /// For example, "tabs.home" looks up `value["tabs"]["home"]`.
    fn lookup_key<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
        key.split('.').try_fold(data, |current, part| current.get(part))
    }

    /// Replaces `{param_name}` placeholders in a string with values from the params map.
    fn interpolate(template: &str, params: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in params {
            let placeholder = format!("{{{}}}", key);
            result = result.replace(&placeholder, value);
        }
        result
    }

    /// Determines the Russian plural form for a given count.
    fn russian_plural_form(count: u64) -> &'static str {
        let mod10 = count % 10;
        let mod100 = count % 100;

        if mod10 == 1 && mod100 != 11 {
            "one"
        } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
            "few"
        } else if mod10 == 0 || (5..=9).contains(&mod10) || (11..=14).contains(&mod100) {
            "many"
        } else {
            "other"
        }
    }

    fn english_plural_form(count: u64) -> &'static str {
        if count == 1 {
            "one"
        } else {
            "other"
        }
    }

    fn get_plural_form(&self, count: u64) -> &'static str {
        match self.current_locale.as_str() {
            "ru" => Self::russian_plural_form(count),
            _ => Self::english_plural_form(count),
        }
    }
}

impl Default for LocalizationEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LocalizationEngineTrait for LocalizationEngine {
    fn set_locale(&mut self, lang: &str) -> Result<(), LocaleError> {
        if !SUPPORTED_LOCALES.contains(&lang) {
            return Err(LocaleError::UnsupportedLocale(lang.to_string()));
        }
        if !self.locales.contains_key(lang) {
            return Err(LocaleError::FileNotFound(format!("Locale '{}' not loaded", lang)));
        }
        self.current_locale = lang.to_string();
        Ok(())
    }

    fn get_locale(&self) -> &str {
        &self.current_locale
    }

    /// Looks up a translation key and optionally interpolates parameters.
    /// Returns the key itself if the translation is not found.
    fn t(&self, key: &str, params: Option<&HashMap<String, String>>) -> String {
        let text = self
            .locales
            .get(&self.current_locale)
            .and_then(|data| Self::lookup_key(data, key))
            .and_then(Value::as_str);

        match (text, params) {
            (Some(text), Some(p)) => Self::interpolate(text, p),
            (Some(text), None) => text.to_string(),
            (None, _) => key.to_string(),
        }
    }

    /// Looks up `{key}_{form}` for the count's plural form, falling back to
    /// `{key}_other`. A `{count}` parameter is added automatically.
    fn plural(&self, key: &str, count: u64, params: Option<&HashMap<String, String>>) -> String {
        let plural_key = format!("{}_{}", key, self.get_plural_form(count));

        let mut merged_params = params.cloned().unwrap_or_default();
        merged_params
            .entry("count".to_string())
            .or_insert_with(|| count.to_string());

        let result = self.t(&plural_key, Some(&merged_params));
        if result != plural_key {
            return result;
        }

        let other_key = format!("{}_other", key);
        let other_result = self.t(&other_key, Some(&merged_params));
        if other_result == other_key {
            return key.to_string();
        }
        other_result
    }

    /// Detects the system locale from `LANG` (e.g. "ru_RU.UTF-8" → "ru").
    fn detect_system_locale(&self) -> String {
        let lang = std::env::var("LANG").unwrap_or_default();
        let lang_code = lang
            .split('_')
            .next()
            .unwrap_or("")
            .split('.')
            .next()
            .unwrap_or("");

        if SUPPORTED_LOCALES.contains(&lang_code) {
            lang_code.to_string()
        } else {
            DEFAULT_LOCALE.to_string()
        }
    }

    fn get_available_locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.locales.keys().cloned().collect();
        locales.sort();
        locales
    }
}
