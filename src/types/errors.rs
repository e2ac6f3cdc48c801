use std::fmt;

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === LocaleError ===

/// Errors related to localization engine operations.
#[derive(Debug)]
pub enum LocaleError {
    /// The requested locale is not supported.
    UnsupportedLocale(String),
    /// The locale file was not found or could not be parsed.
    FileNotFound(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::UnsupportedLocale(locale) => {
                write!(f, "Unsupported locale: {}", locale)
            }
            LocaleError::FileNotFound(path) => write!(f, "Locale file not found: {}", path),
        }
    }
}

impl std::error::Error for LocaleError {}

// === IntentError ===

/// Errors raised while decoding a message posted by the page.
#[derive(Debug, PartialEq, Eq)]
pub enum IntentError {
    /// The message is not a JSON object with a `cmd` string.
    Malformed(String),
    /// The `cmd` value is not a known intent.
    UnknownCommand(String),
    /// A field required by the command is absent or not a string.
    MissingField(&'static str),
    /// The tab name is not one of home, bookmarks, history.
    UnknownTab(String),
}

impl fmt::Display for IntentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentError::Malformed(msg) => write!(f, "Malformed intent: {}", msg),
            IntentError::UnknownCommand(cmd) => write!(f, "Unknown intent command: {}", cmd),
            IntentError::MissingField(field) => write!(f, "Missing intent field: {}", field),
            IntentError::UnknownTab(tab) => write!(f, "Unknown tab: {}", tab),
        }
    }
}

impl std::error::Error for IntentError {}
