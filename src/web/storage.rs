use web_sys::Storage;

use crate::error::DocsError;
use crate::theme::ThemeStore;

/// [`ThemeStore`] over `window.localStorage`.
///
/// Storage can be unavailable (privacy modes, sandboxed frames); reads then
/// return nothing and writes fail with [`DocsError::Storage`].
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable; theme preference will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, DocsError> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        storage
            .get_item(key)
            .map_err(|e| DocsError::Storage(format!("Failed to read '{key}': {e:?}")))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), DocsError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| DocsError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| DocsError::Storage(format!("Failed to write '{key}': {e:?}")))
    }
}
