use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Navigator;

use super::current_site;
use super::toast::BrowserToastHost;
use crate::error::DocsError;
use crate::toast::{self, Clipboard};

/// `navigator.clipboard`, looked up at call time since insecure contexts lack it.
pub struct BrowserClipboard {
    navigator: Navigator,
}

impl BrowserClipboard {
    pub fn new() -> Option<Self> {
        Some(Self {
            navigator: web_sys::window()?.navigator(),
        })
    }
}

fn js_error(e: JsValue) -> DocsError {
    DocsError::Clipboard(format!("{e:?}"))
}

#[async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), DocsError> {
        let clipboard = Reflect::get(&self.navigator, &JsValue::from_str("clipboard")).map_err(js_error)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(DocsError::Clipboard("navigator.clipboard unavailable".into()));
        }

        let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| DocsError::Clipboard("writeText is not a function".into()))?;
        let pending: Promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| DocsError::Clipboard("writeText did not return a promise".into()))?;

        JsFuture::from(pending).await.map_err(js_error)?;
        Ok(())
    }
}

/// Copy `text` and confirm with a toast. Exposed to page scripts.
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String) {
    let (Some(clipboard), Some(host)) = (BrowserClipboard::new(), BrowserToastHost::new()) else {
        return;
    };
    let site = current_site();

    wasm_bindgen_futures::spawn_local(async move {
        let delay = TimeoutFuture::new(site.config().toast_duration_ms);
        if let Err(e) = toast::copy_to_clipboard(&clipboard, site.toaster(), &host, &text, delay).await {
            tracing::warn!("Copy to clipboard failed: {e}");
        }
    });
}
