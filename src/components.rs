//! Markup snippets injected into the static page.
//!
//! The views are plain functions rather than `#[component]`s: component
//! output only renders to a string with Leptos' `ssr` feature, which the
//! browser build does not enable.

pub mod features_grid;
pub mod search_results;
pub mod toast;
pub mod toc;

/// Hydration markers Leptos leaves between dynamic children.
const HYDRATION_MARKER: &str = "<!>";

/// Drop the hydration markers from rendered HTML; nothing hydrates these
/// snippets. Escaped text never contains a literal `<`, so only markers match.
pub(crate) fn finish(html: String) -> String {
    if html.contains(HYDRATION_MARKER) {
        html.replace(HYDRATION_MARKER, "")
    } else {
        html
    }
}
