mod common;

use std::time::Duration;

use buildly_docs::config::SiteConfig;
use buildly_docs::dom::Binding;
use buildly_docs::models::search::SearchEntry;
use buildly_docs::search::{SearchBox, SearchOutcome};
use common::{FakePage, Reply, ScriptedFetcher};
use serde_json::json;

const INDEX: &str = "/buildly-docs/assets/data/search-index.json";

fn index_json() -> serde_json::Value {
    json!([
        {"title": "Setup Guide", "content": "install steps", "tags": ["intro"], "url": "/a", "excerpt": "..."},
        {"title": "Deploying Services", "content": "ship it to the cluster", "url": "/b", "excerpt": "Deploy"},
        {"title": "API Reference", "content": "endpoints and payloads", "tags": ["api", "Guide"], "url": "/c", "excerpt": "Ref"}
    ])
}

fn search_page() -> FakePage {
    FakePage::new("/buildly-docs/")
        .with(Binding::SearchInput)
        .with(Binding::SearchResults)
        .with(Binding::SearchContainer)
}

async fn loaded_search_box() -> SearchBox {
    let search = SearchBox::new(&SiteConfig::default());
    let fetcher = ScriptedFetcher::default().json(INDEX, index_json());
    search.load_index(&fetcher).await;
    search
}

#[tokio::test]
async fn query_matches_title_case_insensitively() {
    let search = loaded_search_box().await;
    let page = FakePage::new("/").with(Binding::SearchResults);
    let single = SearchBox::new(&SiteConfig::default());
    single.index().replace(vec![SearchEntry {
        title: "Setup Guide".into(),
        content: "install steps".into(),
        tags: Some(vec!["intro".into()]),
        url: "/a".into(),
        excerpt: "...".into(),
    }]);

    match single.on_input(&page, "guide") {
        SearchOutcome::Matches(hits) => {
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].url, "/a");
        }
        other => panic!("expected one match, got {other:?}"),
    }
    assert!(page.html(Binding::SearchResults).contains("data-url=\"/a\""));
    assert_eq!(page.element(Binding::SearchResults).visible, Some(true));

    assert_eq!(single.on_input(&page, "zz"), SearchOutcome::NoResults);
    assert!(page.html(Binding::SearchResults).contains("No results found"));

    // Title on one entry, tag on another.
    match search.evaluate("GUIDE") {
        SearchOutcome::Matches(hits) => {
            let urls: Vec<&str> = hits.iter().map(|h| h.url.as_str()).collect();
            assert_eq!(urls, vec!["/a", "/c"]);
        }
        other => panic!("expected matches, got {other:?}"),
    }
}

#[tokio::test]
async fn short_query_hides_panel_without_rendering() {
    let search = loaded_search_box().await;
    let page = search_page();

    search.on_input(&page, "setup");
    let rendered = page.html(Binding::SearchResults);

    for query in ["", " ", "s", "  S  "] {
        assert_eq!(search.on_input(&page, query), SearchOutcome::Hidden);
        assert_eq!(page.element(Binding::SearchResults).visible, Some(false));
        assert_eq!(page.html(Binding::SearchResults), rendered);
    }
}

#[tokio::test]
async fn results_are_bounded_subset_of_index() {
    let search = loaded_search_box().await;
    let index: Vec<SearchEntry> = serde_json::from_value(index_json()).unwrap();

    for query in ["in", "de", "api", "steps", "e ", "xyz"] {
        let needle = query.trim().to_lowercase();
        if needle.chars().count() < 2 {
            assert_eq!(search.evaluate(query), SearchOutcome::Hidden);
            continue;
        }
        if let SearchOutcome::Matches(hits) = search.evaluate(query) {
            assert!(hits.len() <= 5);
            for hit in &hits {
                assert!(index.contains(hit), "{hit:?} not in index");
                assert!(hit.matches(&needle));
            }
        }
    }
}

#[tokio::test]
async fn index_failures_degrade_to_empty_index() {
    let replies = [
        Reply::Status(404),
        Reply::NetworkError,
        Reply::Body("<!doctype html><p>Not JSON</p>".into()),
        Reply::Body(r#"{"entries": []}"#.into()),
    ];

    for reply in replies {
        let search = SearchBox::new(&SiteConfig::default());
        let fetcher = ScriptedFetcher::default().reply(INDEX, reply.clone());

        assert!(search.try_load_index(&fetcher).await.is_err(), "{reply:?} should fail");
        search.load_index(&fetcher).await;

        assert!(search.index().is_empty());
        assert_eq!(search.evaluate("guide"), SearchOutcome::NoResults);
    }
}

#[tokio::test(start_paused = true)]
async fn keystroke_before_index_arrives_sees_empty_index() {
    let search = SearchBox::new(&SiteConfig::default());
    let fetcher = ScriptedFetcher::default().slow(
        INDEX,
        Reply::Body(index_json().to_string()),
        Duration::from_secs(2),
    );
    let page = search_page();

    let typing = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        let early = search.on_input(&page, "setup");
        tokio::time::sleep(Duration::from_secs(5)).await;
        let late = search.on_input(&page, "setup");
        (early, late)
    };

    let ((early, late), ()) = tokio::join!(typing, search.load_index(&fetcher));

    assert_eq!(early, SearchOutcome::NoResults);
    assert!(matches!(late, SearchOutcome::Matches(ref hits) if hits.len() == 1));
    assert_eq!(search.index().len(), 3);
}

#[tokio::test]
async fn outside_click_hides_results() {
    let search = loaded_search_box().await;
    let page = search_page();

    search.on_input(&page, "setup");
    search.on_document_click(&page, true);
    assert_eq!(page.element(Binding::SearchResults).visible, Some(true));

    search.on_document_click(&page, false);
    assert_eq!(page.element(Binding::SearchResults).visible, Some(false));
}

#[tokio::test]
async fn custom_limits_from_config() {
    let config = SiteConfig {
        min_query_chars: 3,
        max_results: 1,
        ..SiteConfig::default()
    };
    let search = SearchBox::new(&config);
    let fetcher = ScriptedFetcher::default().json(INDEX, index_json());
    search.load_index(&fetcher).await;

    assert_eq!(search.evaluate("gu"), SearchOutcome::Hidden);
    assert!(matches!(search.evaluate("gui"), SearchOutcome::Matches(ref h) if h.len() == 1));
}
