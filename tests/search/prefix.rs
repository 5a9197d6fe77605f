//! Incremental typing: partial words match as prefixes.

use super::common::make_record;
use gdoc_search::SearchIndex;

fn titles(index: &SearchIndex, query: &str) -> Vec<String> {
    index.search(query, 10).into_iter().map(|m| m.title).collect()
}

#[test]
fn test_each_keystroke_narrows() {
    let index = SearchIndex::from_records(&[
        make_record(1, "Interceptor", "wraps every call"),
        make_record(2, "Installation", "download the binary"),
        make_record(3, "Instance", "one process"),
    ]);

    assert_eq!(titles(&index, "in").len(), 3);
    assert_eq!(titles(&index, "ins").len(), 2);
    assert_eq!(titles(&index, "inst"), vec!["Installation", "Instance"]);
    assert_eq!(titles(&index, "insta"), vec!["Installation", "Instance"]);
    assert_eq!(titles(&index, "instan"), vec!["Instance"]);
}

#[test]
fn test_whole_word_beats_longer_word() {
    let index = SearchIndex::from_records(&[
        make_record(1, "Configuration", "everything"),
        make_record(2, "Config", "everything"),
    ]);
    assert_eq!(titles(&index, "config"), vec!["Config", "Configuration"]);
}

#[test]
fn test_prefix_only_on_word_start() {
    let index = SearchIndex::from_records(&[make_record(1, "Reinstall", "again")]);
    assert!(titles(&index, "install").is_empty());
    assert_eq!(titles(&index, "rein"), vec!["Reinstall"]);
}

#[test]
fn test_last_term_partial_others_whole() {
    let index = SearchIndex::from_records(&[
        make_record(1, "Grpc Gateway", "http to grpc"),
        make_record(2, "Grpc Server", "listens"),
    ]);
    assert_eq!(titles(&index, "grpc gat"), vec!["Grpc Gateway"]);
}
