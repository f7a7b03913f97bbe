//! Version, last-updated and features metadata loaded once per page.

use crate::config::SiteConfig;
use crate::dom::{Binding, Capabilities, Capability, Page};
use crate::error::DocsError;
use crate::features;
use crate::fetch::{fetch_json, AssetFetcher};
use crate::models::metadata::{parse_iso_date, DocumentationMetadata};

pub async fn fetch_metadata(
    fetcher: &dyn AssetFetcher,
    config: &SiteConfig,
) -> Result<DocumentationMetadata, DocsError> {
    fetch_json(fetcher, &config.metadata_path()).await
}

/// Populate the page from loaded metadata.
///
/// The features grid is only rendered when the probed capabilities include
/// [`Capability::FeaturesGrid`] and the current page is the features listing.
pub fn apply_metadata(
    page: &dyn Page,
    metadata: &DocumentationMetadata,
    config: &SiteConfig,
    capabilities: &Capabilities,
) {
    if page.exists(Binding::LastUpdated) {
        if let Some(raw) = metadata.last_updated.as_deref() {
            match parse_iso_date(raw) {
                Ok(date) => page.set_text(Binding::LastUpdated, &page.locale_date(date)),
                Err(e) => tracing::warn!("Ignoring last_updated: {e}"),
            }
        }
    }

    if page.exists(Binding::Version) {
        if let Some(version) = metadata.version.as_deref() {
            page.set_text(Binding::Version, version);
        }
    }

    if capabilities.contains(Capability::FeaturesGrid) && config.is_features_page(&page.current_path())
    {
        features::render_grid(page, metadata.features.as_ref(), config);
    }
}

/// Fetch and apply. Any failure is logged and the page is left untouched.
pub async fn load_documentation_data(
    page: &dyn Page,
    fetcher: &dyn AssetFetcher,
    config: &SiteConfig,
    capabilities: &Capabilities,
) {
    match fetch_metadata(fetcher, config).await {
        Ok(metadata) => apply_metadata(page, &metadata, config, capabilities),
        Err(e) => tracing::warn!("Could not load documentation data: {e}"),
    }
}
