use chrono::{Datelike, NaiveDate};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom::{Binding, Heading, Page, Selector};

const HEADINGS: &str = "h2, h3, h4, h5, h6";

/// [`Page`] over the live browser document.
#[derive(Clone)]
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn element(&self, binding: Binding) -> Option<Element> {
        match binding.selector() {
            Selector::Id(id) => self.document.get_element_by_id(id),
            Selector::Query(query) => self.document.query_selector(query).ok().flatten(),
        }
    }

    fn html_element(&self, binding: Binding) -> Option<HtmlElement> {
        self.element(binding)?.dyn_into::<HtmlElement>().ok()
    }

    fn all(&self, query: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(query) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn nav_links(&self) -> Vec<Element> {
        self.all(&Binding::NavLinks.selector().css())
    }
}

impl Page for BrowserPage {
    fn exists(&self, binding: Binding) -> bool {
        self.element(binding).is_some()
    }

    fn text_of(&self, binding: Binding) -> Option<String> {
        self.element(binding)?.text_content()
    }

    fn set_inner_html(&self, binding: Binding, html: &str) {
        if let Some(el) = self.element(binding) {
            el.set_inner_html(html);
        }
    }

    fn set_text(&self, binding: Binding, text: &str) {
        if let Some(el) = self.element(binding) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(&self, binding: Binding, visible: bool) {
        if let Some(el) = self.html_element(binding) {
            let display = if visible { "block" } else { "none" };
            if let Err(e) = el.style().set_property("display", display) {
                tracing::warn!("Could not set display on {binding}: {e:?}");
            }
        }
    }

    fn set_class_name(&self, binding: Binding, class_name: &str) {
        if let Some(el) = self.element(binding) {
            el.set_class_name(class_name);
        }
    }

    fn toggle_class(&self, binding: Binding, class: &str) {
        if let Some(el) = self.element(binding) {
            if let Err(e) = el.class_list().toggle(class) {
                tracing::warn!("Could not toggle {class} on {binding}: {e:?}");
            }
        }
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document.document_element()?.get_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        if let Some(root) = self.document.document_element() {
            if let Err(e) = root.set_attribute(name, value) {
                tracing::warn!("Could not set {name} on document root: {e:?}");
            }
        }
    }

    fn headings(&self) -> Vec<Heading> {
        self.all(HEADINGS)
            .into_iter()
            .filter_map(|el| {
                let level = el.tag_name().get(1..)?.parse::<u8>().ok()?;
                let id = Some(el.id()).filter(|id| !id.is_empty());
                Some(Heading {
                    level,
                    id,
                    text: el.text_content().unwrap_or_default(),
                })
            })
            .collect()
    }

    fn set_heading_id(&self, index: usize, id: &str) {
        if let Some(el) = self.all(HEADINGS).get(index) {
            el.set_id(id);
        }
    }

    fn nav_link_hrefs(&self) -> Vec<Option<String>> {
        self.nav_links()
            .iter()
            .map(|link| link.get_attribute("href"))
            .collect()
    }

    fn add_nav_link_class(&self, index: usize, class: &str) {
        if let Some(link) = self.nav_links().get(index) {
            if let Err(e) = link.class_list().add_1(class) {
                tracing::warn!("Could not mark navigation link: {e:?}");
            }
        }
    }

    fn current_path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn locale_date(&self, date: NaiveDate) -> String {
        // Local midnight, so the reader sees the published calendar day.
        let local = js_sys::Date::new_with_year_month_day(
            date.year() as u32,
            date.month0() as i32,
            date.day() as i32,
        );
        local
            .to_locale_date_string("default", &JsValue::UNDEFINED)
            .into()
    }
}
