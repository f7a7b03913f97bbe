use std::fmt;

use super::page::Page;

/// How a binding is located in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// `document.getElementById`
    Id(&'static str),
    /// `document.querySelector(All)`
    Query(&'static str),
}

impl Selector {
    /// CSS form of the selector, usable with `querySelector` and `closest`.
    pub fn css(&self) -> String {
        match self {
            Selector::Id(id) => format!("#{id}"),
            Selector::Query(query) => (*query).to_string(),
        }
    }
}

/// Every DOM hook the enhancements know about. All of them are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    SearchInput,
    SearchResults,
    SearchContainer,
    Toc,
    ThemeToggle,
    ThemeIcon,
    NavLinks,
    SidebarToggle,
    Sidebar,
    LastUpdated,
    Version,
    FeaturesGrid,
    /// Inline JSON block overriding [`crate::config::SiteConfig`].
    Config,
}

impl Binding {
    pub const ALL: [Binding; 13] = [
        Binding::SearchInput,
        Binding::SearchResults,
        Binding::SearchContainer,
        Binding::Toc,
        Binding::ThemeToggle,
        Binding::ThemeIcon,
        Binding::NavLinks,
        Binding::SidebarToggle,
        Binding::Sidebar,
        Binding::LastUpdated,
        Binding::Version,
        Binding::FeaturesGrid,
        Binding::Config,
    ];

    pub fn selector(self) -> Selector {
        match self {
            Binding::SearchInput => Selector::Id("search-input"),
            Binding::SearchResults => Selector::Id("search-results"),
            Binding::SearchContainer => Selector::Query(".search-container"),
            Binding::Toc => Selector::Id("toc"),
            Binding::ThemeToggle => Selector::Id("theme-toggle"),
            Binding::ThemeIcon => Selector::Id("theme-icon"),
            Binding::NavLinks => Selector::Query(".navbar-nav .nav-link"),
            Binding::SidebarToggle => Selector::Id("sidebar-toggle"),
            Binding::Sidebar => Selector::Query(".sidebar"),
            Binding::LastUpdated => Selector::Id("last-updated"),
            Binding::Version => Selector::Id("version"),
            Binding::FeaturesGrid => Selector::Id("features-grid"),
            Binding::Config => Selector::Id("docs-config"),
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector().css())
    }
}

/// A feature that can be switched on when its bindings are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Search,
    TableOfContents,
    Theme,
    Navigation,
    SidebarToggle,
    Metadata,
    FeaturesGrid,
}

/// Required bindings per capability. An empty list means always enabled;
/// the capability then checks its individual targets when it runs.
pub const CAPABILITY_BINDINGS: &[(Capability, &[Binding])] = &[
    (Capability::Search, &[Binding::SearchInput, Binding::SearchResults]),
    (Capability::TableOfContents, &[Binding::Toc]),
    (Capability::Theme, &[Binding::ThemeToggle]),
    (Capability::Navigation, &[]),
    (Capability::SidebarToggle, &[Binding::SidebarToggle, Binding::Sidebar]),
    (Capability::Metadata, &[]),
    (Capability::FeaturesGrid, &[Binding::FeaturesGrid]),
];

/// The capabilities enabled on the current page, probed once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    enabled: Vec<Capability>,
}

impl Capabilities {
    /// Evaluate [`CAPABILITY_BINDINGS`] against the page.
    pub fn probe(page: &dyn Page) -> Self {
        let mut enabled = Vec::new();
        for (capability, required) in CAPABILITY_BINDINGS {
            match required.iter().find(|binding| !page.exists(**binding)) {
                Some(missing) => {
                    tracing::debug!("{capability:?} disabled: {missing} not on page");
                }
                None => enabled.push(*capability),
            }
        }
        Self { enabled }
    }

    /// No capability enabled; used when enhancements run without a page.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.enabled.contains(&capability)
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.enabled.iter().copied()
    }
}
