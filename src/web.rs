//! Browser bindings for the page enhancements (`hydrate` feature).

pub mod clipboard;
pub mod events;
pub mod fetch;
pub mod logging;
pub mod page;
pub mod storage;
pub mod toast;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::SiteConfig;
use crate::dom::Capabilities;
use crate::site::DocsSite;
use crate::toast::Toaster;

thread_local! {
    /// The running site, set once by [`boot`] and kept for the page's lifetime.
    static SITE: RefCell<Option<Rc<DocsSite>>> = const { RefCell::new(None) };

    /// Outlives the inert pre-boot site so toast ids never repeat on a page.
    static TOASTER: Rc<Toaster> = Rc::new(Toaster::new());
}

fn shared_toaster() -> Rc<Toaster> {
    TOASTER.with(Rc::clone)
}

/// The running site, or an inert default when called before boot
/// (e.g. `showToast` from an inline script).
pub(crate) fn current_site() -> Rc<DocsSite> {
    SITE.with(|site| {
        site.borrow_mut()
            .get_or_insert_with(|| {
                Rc::new(
                    DocsSite::new(SiteConfig::default(), Capabilities::none())
                        .with_toaster(shared_toaster()),
                )
            })
            .clone()
    })
}

/// Run [`boot`] now, or on `DOMContentLoaded` while the document is still loading.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        boot();
        return;
    }

    let on_ready = Closure::once_into_js(boot);
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        web_sys::console::warn_1(&e);
    }
}

fn boot() {
    let Some(page) = page::BrowserPage::new().map(Rc::new) else {
        return;
    };

    let config = DocsSite::read_config(page.as_ref());
    let level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| SiteConfig::default().log_level);
    logging::init(&level);
    let config = config.unwrap_or_else(|e| {
        tracing::warn!("Ignoring inline docs config: {e}");
        SiteConfig::default()
    });

    let store = Rc::new(storage::LocalStore::new());
    let site = Rc::new(
        DocsSite::initialize(page.as_ref(), store.as_ref(), config).with_toaster(shared_toaster()),
    );
    SITE.with(|slot| *slot.borrow_mut() = Some(site.clone()));

    events::bind(site.clone(), page.clone(), store);

    wasm_bindgen_futures::spawn_local(async move {
        site.load_assets(page.as_ref(), &fetch::GlooFetcher).await;
    });
}
