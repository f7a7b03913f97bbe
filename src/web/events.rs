use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};

use super::page::BrowserPage;
use super::storage::LocalStore;
use crate::dom::{Binding, Capability};
use crate::site::DocsSite;
use crate::toc;

/// Attach the listeners for every enabled capability.
pub fn bind(site: Rc<DocsSite>, page: Rc<BrowserPage>, store: Rc<LocalStore>) {
    if site.has(Capability::Search) {
        bind_search(&site, &page);
    }
    if site.has(Capability::TableOfContents) {
        bind_toc(&page);
    }
    if site.has(Capability::Theme) {
        if let Some(toggle) = page.element(Binding::ThemeToggle) {
            let (site, page) = (site.clone(), page.clone());
            listen(&toggle, "click", move |_| {
                site.handle_theme_toggle(page.as_ref(), store.as_ref());
            });
        }
    }
    if site.has(Capability::SidebarToggle) {
        if let Some(toggle) = page.element(Binding::SidebarToggle) {
            let (site, page) = (site.clone(), page.clone());
            listen(&toggle, "click", move |_| site.handle_sidebar_toggle(page.as_ref()));
        }
    }
}

fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        tracing::warn!("Could not listen for {event}: {e:?}");
    }
    // Listeners stay registered until the page unloads.
    closure.forget();
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn closest(event: &Event, selector: &str) -> Option<Element> {
    event_element(event)?.closest(selector).ok().flatten()
}

fn bind_search(site: &Rc<DocsSite>, page: &Rc<BrowserPage>) {
    if let Some(input) = page.element(Binding::SearchInput) {
        let (site, page) = (site.clone(), page.clone());
        listen(&input, "input", move |event| {
            let value = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
                .unwrap_or_default();
            site.handle_search_input(page.as_ref(), &value);
        });
    }

    if let Some(results) = page.element(Binding::SearchResults) {
        let window = page.window().clone();
        listen(&results, "click", move |event| {
            let Some(url) = closest(&event, ".search-result[data-url]")
                .and_then(|hit| hit.get_attribute("data-url"))
            else {
                return;
            };
            if let Err(e) = window.location().set_href(&url) {
                tracing::warn!("Could not navigate to {url}: {e:?}");
            }
        });
    }

    let container = Binding::SearchContainer.selector().css();
    let (site, page) = (site.clone(), page.clone());
    let document = page.document().clone();
    listen(&document, "click", move |event| {
        let inside = closest(&event, &container).is_some();
        site.handle_document_click(page.as_ref(), inside);
    });
}

fn bind_toc(page: &Rc<BrowserPage>) {
    let Some(toc_element) = page.element(Binding::Toc) else {
        return;
    };
    let document = page.document().clone();

    listen(&toc_element, "click", move |event| {
        let Some(href) = closest(&event, "a").and_then(|link| link.get_attribute("href")) else {
            return;
        };
        let Some(id) = toc::anchor_target(&href) else {
            return;
        };
        event.prevent_default();

        if let Some(target) = document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });
}
