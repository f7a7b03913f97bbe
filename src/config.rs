use serde::Deserialize;

use crate::error::DocsError;

/// Site-wide settings for the page enhancements.
///
/// Every field has a default matching the published Buildly docs site, so
/// an empty JSON object (or no config block at all) yields a working setup.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Path prefix the static site is served under (no trailing slash).
    pub base_path: String,
    /// Explicit search index location; derived from `base_path` when unset.
    pub search_index_path: Option<String>,
    /// Explicit documentation metadata location; derived from `base_path` when unset.
    pub metadata_path: Option<String>,
    /// Local storage key holding the theme preference.
    pub theme_storage_key: String,
    /// Attribute set on the document root to select the theme.
    pub theme_attribute: String,
    /// Queries shorter than this (in characters, after trimming) hide the results.
    pub min_query_chars: usize,
    /// Maximum number of search hits rendered.
    pub max_results: usize,
    /// Path fragment identifying the features listing page.
    pub features_path_marker: String,
    /// Delay before a toast is removed from the page.
    pub toast_duration_ms: u32,
    /// Maximum tracing level forwarded to the browser console.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: "/buildly-docs".to_string(),
            search_index_path: None,
            metadata_path: None,
            theme_storage_key: "theme".to_string(),
            theme_attribute: "data-theme".to_string(),
            min_query_chars: 2,
            max_results: 5,
            features_path_marker: "/features/".to_string(),
            toast_duration_ms: 5000,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse an inline JSON override block. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, DocsError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| DocsError::Config(e.to_string()))
    }

    fn base(&self) -> &str {
        self.base_path.trim_end_matches('/')
    }

    pub fn search_index_path(&self) -> String {
        self.search_index_path
            .clone()
            .unwrap_or_else(|| format!("{}/assets/data/search-index.json", self.base()))
    }

    pub fn metadata_path(&self) -> String {
        self.metadata_path
            .clone()
            .unwrap_or_else(|| format!("{}/buildly-documentation.json", self.base()))
    }

    /// Detail page for a single feature, keyed by its mapping key.
    pub fn feature_href(&self, key: &str) -> String {
        format!("{}/features/{}/", self.base(), key)
    }

    pub fn is_features_page(&self, path: &str) -> bool {
        path.contains(&self.features_path_marker)
    }
}
