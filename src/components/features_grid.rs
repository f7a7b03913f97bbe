use leptos::prelude::*;

use crate::components::finish;
use crate::config::SiteConfig;
use crate::models::metadata::{FeatureDescriptor, FeatureMap};

/// Card for one feature, linking to its detail page.
fn feature_card(feature: FeatureDescriptor, href: String) -> impl IntoView {
    view! {
        <div class="col-md-6 col-lg-4 mb-4">
            <div class="card h-100 feature-card">
                <div class="card-body">
                    <h5 class="card-title">{feature.title}</h5>
                    <p class="card-text">{feature.description}</p>
                    <div class="mb-2">
                        {feature.ai_powered.then(|| view! {
                            <span class="badge bg-success me-1"><i class="fas fa-robot"></i>" AI"</span>
                        })}
                        {feature.needs_documentation.then(|| view! {
                            <span class="badge bg-warning me-1">"Needs Docs"</span>
                        })}
                    </div>
                </div>
                <div class="card-footer">
                    <a href=href class="btn btn-primary btn-sm">"Learn More"</a>
                </div>
            </div>
        </div>
    }
}

pub fn features_grid(features: &FeatureMap, config: &SiteConfig) -> impl IntoView {
    features
        .iter()
        .map(|(key, feature)| feature_card(feature.clone(), config.feature_href(key)))
        .collect_view()
}

pub fn render_features_grid(features: &FeatureMap, config: &SiteConfig) -> String {
    finish(features_grid(features, config).to_html())
}
