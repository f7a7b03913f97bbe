//! Active navigation link highlighting and the mobile sidebar toggle.

use crate::dom::{Binding, Page};

pub const ACTIVE_CLASS: &str = "active";
pub const SIDEBAR_OPEN_CLASS: &str = "show";

/// A link is active when its non-empty `href` occurs anywhere in the path.
///
/// Several links may match at once; all of them are marked.
pub fn is_active_link(href: &str, path: &str) -> bool {
    !href.is_empty() && path.contains(href)
}

/// Mark every matching primary navigation link. Returns how many were marked.
pub fn highlight_active_links(page: &dyn Page) -> usize {
    let path = page.current_path();
    let mut marked = 0;
    for (index, href) in page.nav_link_hrefs().into_iter().enumerate() {
        if href.as_deref().is_some_and(|href| is_active_link(href, &path)) {
            page.add_nav_link_class(index, ACTIVE_CLASS);
            marked += 1;
        }
    }
    tracing::debug!("{marked} navigation links active for {path}");
    marked
}

pub fn toggle_sidebar(page: &dyn Page) {
    page.toggle_class(Binding::Sidebar, SIDEBAR_OPEN_CLASS);
}
