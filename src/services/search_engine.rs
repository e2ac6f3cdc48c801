//! Builds search result URLs from a `{query}` template.

use crate::types::settings::DEFAULT_SEARCH_TEMPLATE;

const QUERY_PLACEHOLDER: &str = "{query}";

/// A search URL template such as `https://www.google.com/search?q={query}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEngine {
    template: String,
}

impl SearchEngine {
    /// Uses `template` if it contains `{query}`, otherwise the default template.
    pub fn new(template: &str) -> Self {
        if template.contains(QUERY_PLACEHOLDER) {
            Self {
                template: template.to_string(),
            }
        } else {
            tracing::warn!(template, "search template has no {{query}} placeholder, using default");
            Self::default()
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the result URL for `query`, percent-encoded as UTF-8.
    ///
    /// The query is encoded as given; callers decide whether to trim.
    pub fn search_url(&self, query: &str) -> String {
        self.template
            .replace(QUERY_PLACEHOLDER, &urlencoding::encode(query))
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            template: DEFAULT_SEARCH_TEMPLATE.to_string(),
        }
    }
}
