use leptos::prelude::*;

use crate::components::finish;
use crate::toast::{ToastId, ToastKind};

pub fn toast(toast_id: ToastId, message: String, kind: ToastKind) -> impl IntoView {
    view! {
        <div
            id=toast_id.dom_id()
            class=format!("toast align-items-center text-white bg-{} border-0", kind.as_str())
            role="alert"
            aria-live="assertive"
            aria-atomic="true"
        >
            <div class="d-flex">
                <div class="toast-body">{message}</div>
                <button
                    type="button"
                    class="btn-close btn-close-white me-2 m-auto"
                    data-bs-dismiss="toast"
                    aria-label="Close"
                ></button>
            </div>
        </div>
    }
}

pub fn render_toast(id: ToastId, message: &str, kind: ToastKind) -> String {
    finish(toast(id, message.to_string(), kind).to_html())
}
