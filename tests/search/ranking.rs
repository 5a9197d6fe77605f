//! Ranking order of matches.

use super::common::{docs_site, make_record, make_record_in};
use gdoc_search::{RecordId, SearchIndex};

fn ids(index: &SearchIndex, query: &str) -> Vec<RecordId> {
    index.search(query, 10).into_iter().map(|m| m.id).collect()
}

#[test]
fn test_title_hit_outranks_content_hits() {
    let index = SearchIndex::from_records(&[
        make_record(1, "Overview", "the server starts here"),
        make_record(2, "Logging", "server logs go to stderr"),
        make_record(3, "Server", "listens on a port"),
    ]);
    assert_eq!(ids(&index, "server")[0], RecordId::Number(3));
}

#[test]
fn test_earlier_position_ranks_higher() {
    let index = SearchIndex::from_records(&[
        make_record(1, "A", "one two three four interceptor"),
        make_record(2, "B", "interceptor one two three four"),
    ]);
    assert_eq!(ids(&index, "interceptor"), vec![RecordId::Number(2), RecordId::Number(1)]);
}

#[test]
fn test_equal_scores_keep_artifact_order() {
    let index = SearchIndex::from_records(&docs_site());
    let ranked = ids(&index, "setup");
    assert_eq!(
        ranked,
        vec![
            RecordId::Number(1),
            RecordId::Number(2),
            RecordId::Number(3),
            RecordId::Number(5)
        ]
    );
}

#[test]
fn test_scores_are_non_increasing() {
    let index = SearchIndex::from_records(&docs_site());
    let matches = index.search("s", 10);
    assert!(matches.len() > 1);
    for pair in matches.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_multi_term_scores_add_up() {
    let index = SearchIndex::from_records(&[
        make_record_in(1, "Client", "setup a client", "API"),
        make_record_in(2, "Client Setup", "setup a client", "API"),
    ]);
    let matches = index.search("client setup", 10);
    assert_eq!(matches[0].id, RecordId::Number(2));
    assert!(matches[0].score > matches[1].score);
}
