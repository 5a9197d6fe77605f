//! Fetching the artifact over HTTP from a loopback server.

#![cfg(feature = "http")]

use super::common::serve;
use gdoc_search::{AnySource, DataSource, HttpSource, IndexStatus, LoadError, QueryOutcome, SearchWidget, WidgetConfig};

const SITE_DATA: &str = r#"[
    {"id":1,"title":"Install","content":"setup steps","href":"/install","parent":"Guides"},
    {"id":2,"title":"Client","content":"setup a client","href":"/client","parent":"API"}
]"#;

fn data_url(base: &str) -> String {
    format!("{}/en.search-data.min.json", base)
}

#[tokio::test]
async fn test_server_error_settles_failed() {
    let base = serve(500, "").await;
    let mut widget = SearchWidget::new(WidgetConfig::default(), HttpSource::new(data_url(&base)));

    assert!(widget.on_focus());
    let status = widget.index().wait_settled().await;

    match status {
        IndexStatus::Failed(err) => {
            assert!(matches!(*err, LoadError::Status { status: 500, .. }));
        }
        other => panic!("expected failed, got {}", other.as_str()),
    }

    assert_eq!(widget.on_query_change("setup"), QueryOutcome::NotReady("failed"));
    assert!(!widget.has_hits());
    assert!(widget.results().children().is_empty());

    // No retry: a second focus doesn't restart the load.
    assert!(!widget.on_focus());
    assert!(!widget.index().initialize());
}

#[tokio::test]
async fn test_not_found_is_status_error() {
    let base = serve(404, "").await;
    let source = HttpSource::new(data_url(&base));
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_ok_response_builds_index() {
    let base = serve(200, SITE_DATA).await;
    let mut widget = SearchWidget::new(WidgetConfig::default(), HttpSource::new(data_url(&base)));

    assert_eq!(widget.on_query_change_when_ready("setup").await, QueryOutcome::Hits(2));
    assert_eq!(widget.results().children().len(), 2);
}

#[tokio::test]
async fn test_site_relative_path_resolves_against_base_url() {
    let base = serve(200, SITE_DATA).await;
    let source = AnySource::resolve("/en.search-data.min.json", Some(&base));
    assert_eq!(source.location(), data_url(&base));

    let mut widget = SearchWidget::new(WidgetConfig::default(), source);
    assert_eq!(widget.on_query_change_when_ready("client").await, QueryOutcome::Hits(1));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = HttpSource::new(format!("http://{}/en.search-data.min.json", addr))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Transport { .. }));
}
