//! Startup orchestration and event entry points.

use std::rc::Rc;

use crate::config::SiteConfig;
use crate::dom::{Binding, Capabilities, Capability, Page};
use crate::error::DocsError;
use crate::fetch::AssetFetcher;
use crate::metadata;
use crate::models::theme::Theme;
use crate::navigation;
use crate::search::{SearchBox, SearchOutcome};
use crate::theme::{ThemeStore, ThemeToggle};
use crate::toast::Toaster;
use crate::toc;

/// All page enhancements and their page-lifetime state.
///
/// Built once when the document is ready. Event handlers share it by
/// reference; nothing is torn down before the page unloads.
#[derive(Debug)]
pub struct DocsSite {
    config: SiteConfig,
    capabilities: Capabilities,
    search: SearchBox,
    theme: ThemeToggle,
    toaster: Rc<Toaster>,
}

impl DocsSite {
    pub fn new(config: SiteConfig, capabilities: Capabilities) -> Self {
        Self {
            search: SearchBox::new(&config),
            theme: ThemeToggle::new(&config),
            toaster: Rc::new(Toaster::new()),
            config,
            capabilities,
        }
    }

    /// Share `toaster` with whatever else shows toasts on this page, so toast
    /// ids stay unique across sites built for the same document.
    pub fn with_toaster(mut self, toaster: Rc<Toaster>) -> Self {
        self.toaster = toaster;
        self
    }

    /// Read the inline config block, if the page has one.
    pub fn read_config(page: &dyn Page) -> Result<SiteConfig, DocsError> {
        match page.text_of(Binding::Config) {
            Some(raw) => SiteConfig::from_json(&raw),
            None => Ok(SiteConfig::default()),
        }
    }

    /// Probe the page and run the synchronous initializers: table of
    /// contents, stored theme and navigation highlighting.
    pub fn initialize(page: &dyn Page, store: &dyn ThemeStore, config: SiteConfig) -> Self {
        let capabilities = Capabilities::probe(page);
        let site = Self::new(config, capabilities);

        if site.has(Capability::TableOfContents) {
            toc::build_table_of_contents(page);
        }
        if site.has(Capability::Theme) {
            site.theme.initialize(page, store);
        }
        if site.has(Capability::Navigation) {
            navigation::highlight_active_links(page);
        }

        tracing::info!(
            "Docs enhancements ready: {:?}",
            site.capabilities.iter().collect::<Vec<_>>()
        );
        site
    }

    /// Load the search index and the documentation metadata.
    ///
    /// The two requests run concurrently and neither waits on the other;
    /// each one degrades on its own.
    pub async fn load_assets(&self, page: &dyn Page, fetcher: &dyn AssetFetcher) {
        let index = async {
            if self.has(Capability::Search) {
                self.search.load_index(fetcher).await;
            }
        };
        let documentation = async {
            if self.has(Capability::Metadata) {
                metadata::load_documentation_data(page, fetcher, &self.config, &self.capabilities)
                    .await;
            }
        };
        futures::join!(index, documentation);
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn search(&self) -> &SearchBox {
        &self.search
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    pub fn handle_search_input(&self, page: &dyn Page, raw: &str) -> Option<SearchOutcome> {
        self.has(Capability::Search)
            .then(|| self.search.on_input(page, raw))
    }

    pub fn handle_document_click(&self, page: &dyn Page, inside_search: bool) {
        if self.has(Capability::Search) {
            self.search.on_document_click(page, inside_search);
        }
    }

    pub fn handle_theme_toggle(&self, page: &dyn Page, store: &dyn ThemeStore) -> Option<Theme> {
        self.has(Capability::Theme)
            .then(|| self.theme.toggle(page, store))
    }

    pub fn handle_sidebar_toggle(&self, page: &dyn Page) {
        if self.has(Capability::SidebarToggle) {
            navigation::toggle_sidebar(page);
        }
    }
}
