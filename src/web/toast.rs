use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use super::current_site;
use crate::toast::{ToastHost, ToastId, ToastKind};

/// Toasts appended to `document.body` and shown through Bootstrap when loaded.
pub struct BrowserToastHost {
    window: Window,
    document: Document,
}

impl BrowserToastHost {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn find(&self, id: ToastId) -> Option<Element> {
        self.document.get_element_by_id(&id.dom_id())
    }
}

fn show_with_bootstrap(window: &Window, element: &Element) -> Result<(), JsValue> {
    let bootstrap = Reflect::get(window, &JsValue::from_str("bootstrap"))?;
    let constructor: Function = Reflect::get(&bootstrap, &JsValue::from_str("Toast"))?.dyn_into()?;
    let toast = Reflect::construct(&constructor, &Array::of1(element))?;
    let show: Function = Reflect::get(&toast, &JsValue::from_str("show"))?.dyn_into()?;
    show.call0(&toast)?;
    Ok(())
}

impl ToastHost for BrowserToastHost {
    fn attach(&self, _id: ToastId, markup: &str) {
        let Some(body) = self.document.body() else {
            return;
        };
        let Ok(holder) = self.document.create_element("div") else {
            return;
        };
        holder.set_inner_html(markup);
        if let Some(toast) = holder.first_element_child() {
            if let Err(e) = body.append_child(&toast) {
                tracing::warn!("Could not attach toast: {e:?}");
            }
        }
    }

    fn show(&self, id: ToastId) {
        let Some(element) = self.find(id) else {
            return;
        };
        if let Err(e) = show_with_bootstrap(&self.window, &element) {
            tracing::debug!("Bootstrap toast unavailable ({e:?}), showing directly");
            if let Err(e) = element.class_list().add_1("show") {
                tracing::warn!("Could not show toast {}: {e:?}", id.0);
            }
        }
    }

    fn is_attached(&self, id: ToastId) -> bool {
        self.find(id).is_some()
    }

    fn detach(&self, id: ToastId) {
        if let Some(element) = self.find(id) {
            element.remove();
        }
    }
}

/// Show a transient notification. Exposed to page scripts; `kind` defaults to `success`.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: String, kind: Option<String>) {
    let kind = ToastKind::parse_or_default(kind.as_deref());
    let Some(host) = BrowserToastHost::new() else {
        return;
    };
    let site = current_site();

    wasm_bindgen_futures::spawn_local(async move {
        let delay = TimeoutFuture::new(site.config().toast_duration_ms);
        site.toaster().notify(&host, &message, kind, delay).await;
    });
}
