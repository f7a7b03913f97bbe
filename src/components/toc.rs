use leptos::prelude::*;

use crate::components::finish;
use crate::toc::TocEntry;

fn toc_list(entries: Vec<TocEntry>) -> impl IntoView {
    view! { <ul inner_html=render_items(entries)></ul> }
}

/// One outline item; children are rendered into a nested list inside it.
/// Gap items carry only the nested list.
fn toc_item(entry: TocEntry) -> impl IntoView {
    let nested = (!entry.children.is_empty())
        .then(|| render_items(entry.children))
        .map(|html| view! { <ul inner_html=html></ul> });
    let link = entry
        .link
        .map(|link| view! { <a href=format!("#{}", link.id)>{link.text}</a> });
    let gap = link.is_none();

    view! {
        <li class=("toc-gap", gap)>
            {link}
            {nested}
        </li>
    }
}

// Items go through a string so the recursive view type stays finite.
fn render_items(entries: Vec<TocEntry>) -> String {
    entries
        .into_iter()
        .map(|entry| finish(toc_item(entry).to_html()))
        .collect()
}

fn toc_placeholder() -> impl IntoView {
    view! { <p class="text-muted">"No headings found"</p> }
}

pub fn render_toc(entries: Vec<TocEntry>) -> String {
    if entries.is_empty() {
        return finish(toc_placeholder().to_html());
    }
    finish(toc_list(entries).to_html())
}
