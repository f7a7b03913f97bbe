//! Light/dark theme toggle persisted in local storage.

use crate::config::SiteConfig;
use crate::dom::{Binding, Page};
use crate::error::DocsError;
use crate::models::theme::Theme;

/// Key/value store holding the theme preference.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeStore {
    fn load(&self, key: &str) -> Result<Option<String>, DocsError>;
    fn save(&self, key: &str, value: &str) -> Result<(), DocsError>;
}

/// Two-state toggle: the root attribute is the source of truth, storage mirrors it.
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    storage_key: String,
    attribute: String,
}

impl ThemeToggle {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            storage_key: config.theme_storage_key.clone(),
            attribute: config.theme_attribute.clone(),
        }
    }

    /// Persisted preference, `light` when absent or unreadable.
    pub fn stored(&self, store: &dyn ThemeStore) -> Theme {
        match store.load(&self.storage_key) {
            Ok(Some(value)) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("{e}; falling back to light");
                Theme::Light
            }),
            Ok(None) => Theme::Light,
            Err(e) => {
                tracing::warn!("Could not read theme preference: {e}");
                Theme::Light
            }
        }
    }

    /// Theme currently displayed on the page.
    pub fn current(&self, page: &dyn Page) -> Theme {
        Theme::from_attribute(page.root_attribute(&self.attribute).as_deref())
    }

    /// Apply the stored preference at load.
    pub fn initialize(&self, page: &dyn Page, store: &dyn ThemeStore) -> Theme {
        let theme = self.stored(store);
        self.apply(page, theme);
        theme
    }

    /// Flip the displayed theme and persist the new value.
    pub fn toggle(&self, page: &dyn Page, store: &dyn ThemeStore) -> Theme {
        let theme = self.current(page).flipped();
        self.apply(page, theme);
        if let Err(e) = store.save(&self.storage_key, theme.as_str()) {
            tracing::warn!("Could not persist theme preference: {e}");
        }
        tracing::debug!("Theme switched to {theme}");
        theme
    }

    fn apply(&self, page: &dyn Page, theme: Theme) {
        page.set_root_attribute(&self.attribute, theme.as_str());
        page.set_class_name(Binding::ThemeIcon, theme.icon_class());
    }
}
