//! Features grid on the features listing page.

use crate::components::features_grid::render_features_grid;
use crate::config::SiteConfig;
use crate::dom::{Binding, Page};
use crate::models::metadata::FeatureMap;

/// Replace the grid's contents with one card per feature.
///
/// Callers gate on [`Capability::FeaturesGrid`](crate::dom::Capability::FeaturesGrid).
/// Does nothing when the mapping is missing. Returns whether the grid was
/// rendered.
pub fn render_grid(page: &dyn Page, features: Option<&FeatureMap>, config: &SiteConfig) -> bool {
    let Some(features) = features else {
        return false;
    };

    page.set_inner_html(Binding::FeaturesGrid, &render_features_grid(features, config));
    tracing::debug!("Rendered {} feature cards", features.len());
    true
}
