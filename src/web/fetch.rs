use async_trait::async_trait;
use gloo_net::http::Request;

use crate::error::DocsError;
use crate::fetch::AssetFetcher;

/// Same-origin GET through the browser's `fetch`.
pub struct GlooFetcher;

#[async_trait(?Send)]
impl AssetFetcher for GlooFetcher {
    async fn get_text(&self, path: &str) -> Result<String, DocsError> {
        let response = Request::get(path)
            .send()
            .await
            .map_err(|e| DocsError::Fetch(format!("GET {path} failed: {e}")))?;

        if !response.ok() {
            return Err(DocsError::Status {
                path: path.to_string(),
                status: response.status(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| DocsError::Fetch(format!("Failed to read {path}: {e}")))
    }
}
