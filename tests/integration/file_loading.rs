//! Loading the artifact from disk.

use super::common::{docs_site, records_json};
use gdoc_search::{FileSource, IndexStatus, LazyIndex, LoadError, QueryOutcome, SearchWidget, WidgetConfig};
use std::io::Write;

fn artifact(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_file_artifact_loads_and_reports_info() {
    let json = records_json(&docs_site());
    let file = artifact(&json);

    let lazy = LazyIndex::new(FileSource::new(file.path()));
    let IndexStatus::Ready(handle) = lazy.ensure_loaded().await else {
        panic!("expected ready");
    };

    let info = handle.artifact();
    assert_eq!(info.records, 5);
    assert_eq!(info.bytes, json.len());
    assert_eq!(info.crc32, crc32fast::hash(json.as_bytes()));
    assert_eq!(handle.index().parent_count(), 3);
}

#[tokio::test]
async fn test_truncated_artifact_never_becomes_ready() {
    let json = records_json(&docs_site());
    let file = artifact(&json[..json.len() / 2]);

    let mut widget = SearchWidget::new(WidgetConfig::default(), FileSource::new(file.path()));
    widget.on_focus();
    let status = widget.index().wait_settled().await;

    assert!(matches!(status, IndexStatus::Failed(ref err) if matches!(**err, LoadError::Parse(_))));
    assert_eq!(widget.on_query_change("setup"), QueryOutcome::NotReady("failed"));
    assert!(widget.results().children().is_empty());
}

#[tokio::test]
async fn test_missing_artifact_fails() {
    let lazy = LazyIndex::new(FileSource::new("/nonexistent/en.search-data.min.json"));
    let status = lazy.ensure_loaded().await;
    assert!(matches!(status, IndexStatus::Failed(ref err) if matches!(**err, LoadError::Io { .. })));
}

#[tokio::test]
async fn test_minimal_records_accepted() {
    // content and parent are optional; ids may be strings
    let file = artifact(r#"[{"id":"intro","title":"Intro","href":"/intro"},{"id":2,"title":"Usage","href":"/usage","content":"run it"}]"#);

    let mut widget = SearchWidget::new(WidgetConfig::default(), FileSource::new(file.path()));
    assert_eq!(widget.on_query_change_when_ready("intro").await, QueryOutcome::Hits(1));
    assert_eq!(widget.on_query_change("run"), QueryOutcome::Hits(1));
}

#[tokio::test]
async fn test_widgets_share_one_index() {
    let file = artifact(&records_json(&docs_site()));
    let lazy = LazyIndex::new(FileSource::new(file.path()));

    let mut first = SearchWidget::with_index(WidgetConfig::default(), lazy.clone());
    let mut second = SearchWidget::with_index(WidgetConfig::default(), lazy.clone());

    assert!(first.on_focus());
    assert!(!second.on_focus());
    lazy.wait_settled().await;

    assert_eq!(first.on_query_change("server"), QueryOutcome::Hits(1));
    assert_eq!(second.on_query_change("server"), QueryOutcome::Hits(1));
}

#[tokio::test]
async fn test_one_bad_record_does_not_sink_the_rest() {
    let file = artifact(
        r#"[
            {"id":1,"title":"Install","content":"setup steps","href":"/install","parent":"Guides"},
            {"id":2,"title":"Broken","content":"setup"},
            {"id":3,"title":"Upgrade","content":null,"href":"/upgrade","parent":"Guides"}
        ]"#,
    );

    let mut widget = SearchWidget::new(WidgetConfig::default(), FileSource::new(file.path()));
    assert_eq!(widget.on_query_change_when_ready("setup").await, QueryOutcome::Hits(1));
    assert_eq!(widget.on_query_change("upgrade"), QueryOutcome::Hits(1));
    assert_eq!(widget.on_query_change("broken"), QueryOutcome::NoHits);

    let handle = widget.index().handle().unwrap();
    assert_eq!(handle.artifact().records, 2);
    assert_eq!(handle.artifact().skipped, 1);
}
