//! Unusual queries and records.

use super::common::{docs_site, make_record};
use gdoc_search::{DocumentRecord, RecordId, SearchIndex};

#[test]
fn test_case_and_diacritics_ignored() {
    let index = SearchIndex::from_records(&[make_record(1, "Café Setup", "Résumé builder")]);
    assert_eq!(index.search("CAFE", 10).len(), 1);
    assert_eq!(index.search("resume", 10).len(), 1);
    assert_eq!(index.search("résumé", 10).len(), 1);
}

#[test]
fn test_punctuation_only_query() {
    let index = SearchIndex::from_records(&docs_site());
    assert!(index.search("  -- ?!", 10).is_empty());
}

#[test]
fn test_punctuation_splits_terms() {
    let index = SearchIndex::from_records(&[make_record(1, "rk-boot", "boot.yaml reference")]);
    assert_eq!(index.search("boot", 10).len(), 1);
    assert_eq!(index.search("yaml", 10).len(), 1);
    assert_eq!(index.search("rk boot", 10).len(), 1);
}

#[test]
fn test_zero_limit() {
    let index = SearchIndex::from_records(&docs_site());
    assert!(index.search("setup", 0).is_empty());
}

#[test]
fn test_repeated_term_counts_once() {
    let index = SearchIndex::from_records(&docs_site());
    let once = index.search("server", 10);
    let twice = index.search("server server", 10);
    assert_eq!(once.len(), twice.len());
    assert_eq!(once[0].score, twice[0].score);
}

#[test]
fn test_empty_index() {
    let index = SearchIndex::from_records(&[]);
    assert!(index.is_empty());
    assert!(index.search("anything", 10).is_empty());
}

#[test]
fn test_numeric_and_string_ids_are_distinct() {
    let json = r#"[
        {"id":1,"title":"Numeric","href":"/n"},
        {"id":"1","title":"Textual","href":"/t"}
    ]"#;
    let records: Vec<DocumentRecord> = serde_json::from_str(json).unwrap();
    let index = SearchIndex::from_records(&records);

    assert_eq!(index.len(), 2);
    assert!(index.contains(&RecordId::Number(1)));
    assert!(index.contains(&RecordId::Text("1".to_string())));
}

#[test]
fn test_replacement_drops_old_terms() {
    let mut index = SearchIndex::from_records(&[make_record(1, "Legacy", "old words")]);
    index.add(&make_record(1, "Modern", "new words"));

    assert_eq!(index.len(), 1);
    assert!(index.search("legacy", 10).is_empty());
    assert_eq!(index.search("words", 10)[0].title, "Modern");
}

#[test]
fn test_content_is_not_returned() {
    let index = SearchIndex::from_records(&[make_record(1, "Install", "setup steps")]);
    let json = serde_json::to_value(&index.search("setup", 10)[0]).unwrap();
    assert!(json.get("content").is_none());
    assert_eq!(json["href"], "/install");
}
