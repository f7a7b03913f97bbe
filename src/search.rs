//! Client-side substring search over the pre-built index.

use std::cell::RefCell;

use crate::components::search_results::render_search_results;
use crate::config::SiteConfig;
use crate::dom::{Binding, Page};
use crate::error::DocsError;
use crate::fetch::{fetch_json, AssetFetcher};
use crate::models::search::SearchEntry;

/// What the results panel should show for a query.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Query too short; panel hidden, nothing filtered.
    Hidden,
    NoResults,
    Matches(Vec<SearchEntry>),
}

/// Trim and lower-case raw input the way matching expects it.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The in-memory search index.
///
/// Lifecycle: created empty at startup, filled once when the index fetch
/// completes, then only read by input handlers until the page unloads.
/// Queries arriving before the fetch resolves see an empty index.
#[derive(Debug, Default)]
pub struct SearchIndex {
    entries: RefCell<Vec<SearchEntry>>,
}

impl SearchIndex {
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        Self {
            entries: RefCell::new(entries),
        }
    }

    pub fn replace(&self, entries: Vec<SearchEntry>) {
        *self.entries.borrow_mut() = entries;
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// First `limit` matches in index order; no ranking.
    pub fn matching(&self, needle: &str, limit: usize) -> Vec<SearchEntry> {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.matches(needle))
            .take(limit)
            .cloned()
            .collect()
    }
}

/// The search box: index state plus the input and click handlers.
#[derive(Debug)]
pub struct SearchBox {
    index: SearchIndex,
    index_path: String,
    min_query_chars: usize,
    max_results: usize,
}

impl SearchBox {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            index: SearchIndex::default(),
            index_path: config.search_index_path(),
            min_query_chars: config.min_query_chars,
            max_results: config.max_results,
        }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Fetch the index into memory.
    pub async fn try_load_index(&self, fetcher: &dyn AssetFetcher) -> Result<usize, DocsError> {
        let entries: Vec<SearchEntry> = fetch_json(fetcher, &self.index_path).await?;
        let count = entries.len();
        self.index.replace(entries);
        Ok(count)
    }

    /// Fetch the index; failures leave the index empty and are only logged.
    pub async fn load_index(&self, fetcher: &dyn AssetFetcher) {
        match self.try_load_index(fetcher).await {
            Ok(count) => tracing::info!("Search index loaded with {count} entries"),
            Err(e) => tracing::warn!("Search index not available: {e}"),
        }
    }

    /// Evaluate a raw query without touching the page.
    pub fn evaluate(&self, raw: &str) -> SearchOutcome {
        let query = normalize_query(raw);
        if query.chars().count() < self.min_query_chars {
            return SearchOutcome::Hidden;
        }

        let results = self.index.matching(&query, self.max_results);
        if results.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Matches(results)
        }
    }

    /// Input handler: filter and render into the results panel.
    pub fn on_input(&self, page: &dyn Page, raw: &str) -> SearchOutcome {
        let outcome = self.evaluate(raw);
        match &outcome {
            SearchOutcome::Hidden => page.set_visible(Binding::SearchResults, false),
            SearchOutcome::NoResults => {
                page.set_inner_html(Binding::SearchResults, &render_search_results(Vec::new()));
                page.set_visible(Binding::SearchResults, true);
            }
            SearchOutcome::Matches(results) => {
                page.set_inner_html(Binding::SearchResults, &render_search_results(results.clone()));
                page.set_visible(Binding::SearchResults, true);
            }
        }
        outcome
    }

    /// Document-wide click handler: clicks outside the search container close the panel.
    pub fn on_document_click(&self, page: &dyn Page, inside_container: bool) {
        if !inside_container {
            page.set_visible(Binding::SearchResults, false);
        }
    }
}
