pub mod config;
pub mod dom;
pub mod error;
pub mod features;
pub mod fetch;
pub mod metadata;
pub mod models {
    pub mod metadata;
    pub mod search;
    pub mod theme;
}
pub mod navigation;
pub mod search;
pub mod site;
pub mod theme;
pub mod toast;
pub mod toc;
pub mod components;

#[cfg(feature = "hydrate")]
pub mod web;

/// WASM entry point: enhances the static page once the document is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    web::start();
}
