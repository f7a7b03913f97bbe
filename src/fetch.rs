use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::DocsError;

/// Read-only access to the site's static assets.
///
/// Abstracted as a trait so tests can serve canned, slow or failing
/// responses. Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait AssetFetcher {
    /// GET `path` and return the body. Non-2xx responses are errors.
    async fn get_text(&self, path: &str) -> Result<String, DocsError>;
}

/// GET `path` and deserialize the JSON body.
pub async fn fetch_json<T: DeserializeOwned>(
    fetcher: &dyn AssetFetcher,
    path: &str,
) -> Result<T, DocsError> {
    let body = fetcher.get_text(path).await?;
    serde_json::from_str(&body)
        .map_err(|e| DocsError::Parse(format!("Invalid JSON at {path}: {e}")))
}
