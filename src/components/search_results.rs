use leptos::either::Either;
use leptos::prelude::*;

use crate::components::finish;
use crate::models::search::SearchEntry;

/// Dropdown contents for a search query of sufficient length.
///
/// Each hit carries its target in `data-url`; the results panel has a single
/// delegated click listener that navigates there.
pub fn search_results(results: Vec<SearchEntry>) -> impl IntoView {
    if results.is_empty() {
        return Either::Left(view! { <div class="search-result">"No results found"</div> });
    }

    Either::Right(
        results
            .into_iter()
            .map(|entry| {
                view! {
                    <div class="search-result" data-url=entry.url>
                        <h6>{entry.title}</h6>
                        <p class="mb-0 text-muted">{entry.excerpt}</p>
                    </div>
                }
            })
            .collect_view(),
    )
}

pub fn render_search_results(results: Vec<SearchEntry>) -> String {
    finish(search_results(results).to_html())
}
