use chrono::NaiveDate;

use super::bindings::Binding;

/// A heading element as seen when the page was scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 2 to 6, from the tag name.
    pub level: u8,
    /// Existing `id` attribute, if any.
    pub id: Option<String>,
    pub text: String,
}

/// The subset of the document the enhancements read and write.
///
/// Every write is a silent no-op when the bound element is absent. Methods
/// take `&self`: the browser document is a shared handle and event handlers
/// only ever hold shared references to it.
pub trait Page {
    fn exists(&self, binding: Binding) -> bool;

    /// Text content of the bound element.
    fn text_of(&self, binding: Binding) -> Option<String>;

    fn set_inner_html(&self, binding: Binding, html: &str);

    fn set_text(&self, binding: Binding, text: &str);

    /// Show (`display: block`) or hide (`display: none`) the element.
    fn set_visible(&self, binding: Binding, visible: bool);

    /// Replace the element's whole `class` attribute.
    fn set_class_name(&self, binding: Binding, class_name: &str);

    fn toggle_class(&self, binding: Binding, class: &str);

    /// Attribute on the document root (`<html>`).
    fn root_attribute(&self, name: &str) -> Option<String>;

    fn set_root_attribute(&self, name: &str, value: &str);

    /// All `h2`..`h6` elements in document order.
    fn headings(&self) -> Vec<Heading>;

    /// Set the `id` of the heading at `index` in [`Page::headings`] order.
    fn set_heading_id(&self, index: usize, id: &str);

    /// `href` attribute of every primary navigation link, in document order.
    fn nav_link_hrefs(&self) -> Vec<Option<String>>;

    fn add_nav_link_class(&self, index: usize, class: &str);

    /// Path component of the current URL.
    fn current_path(&self) -> String;

    /// Render a calendar date for the reader. The browser uses its locale;
    /// the default is US-style `M/D/YYYY`.
    fn locale_date(&self, date: NaiveDate) -> String {
        date.format("%-m/%-d/%Y").to_string()
    }
}
