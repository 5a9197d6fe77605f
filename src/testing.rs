//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{DocumentRecord, Match, RecordId};

/// Slug used for generated hrefs: `"Getting Started"` → `"/getting-started"`.
fn href_for(title: &str) -> String {
    format!("/{}", title.to_lowercase().replace(' ', "-"))
}

/// Create a top-level record (no parent).
pub fn make_record(id: u64, title: &str, content: &str) -> DocumentRecord {
    DocumentRecord {
        id: RecordId::Number(id),
        title: title.to_string(),
        content: content.to_string(),
        href: href_for(title),
        parent: None,
    }
}

/// Create a record inside a parent section.
pub fn make_record_in(id: u64, title: &str, content: &str, parent: &str) -> DocumentRecord {
    DocumentRecord {
        parent: Some(parent.to_string()),
        ..make_record(id, title, content)
    }
}

/// Create a match the way the index would return it.
pub fn make_match(id: u64, title: &str, parent: Option<&str>) -> Match {
    Match {
        id: RecordId::Number(id),
        title: title.to_string(),
        href: href_for(title),
        parent: parent.map(str::to_string),
        score: 1.0,
    }
}

/// Serialize records as the JSON array a site generator would emit.
pub fn records_json(records: &[DocumentRecord]) -> String {
    serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
}
