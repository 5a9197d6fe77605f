// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the documentation search.
//!
//! A site generator emits one [`DocumentRecord`] per page section into a JSON
//! array. We index the searchable fields, keep a handful of stored fields
//! around for display, and hand back [`Match`]es that carry just enough to
//! render a link.
//!
//! # Invariants
//!
//! - **RecordId**: numeric and string ids are distinct keys. `1` and `"1"` are
//!   different records because the JSON artifact says so.
//! - **Match**: every field comes verbatim from the stored record. Nothing is
//!   re-derived at query time.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Document identifier as it appears in the data artifact.
///
/// Site generators disagree on whether ids are integers or strings, so we take
/// both and keep them apart. Negative integers get their own variant since
/// `u64` can't hold them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Signed(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Signed(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId::Number(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// One indexable unit of site content.
///
/// `title` and `content` are searched; `title`, `href` and `parent` are
/// stored and come back in every [`Match`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: RecordId,
    pub title: String,
    /// Absent and `null` both mean empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    pub href: String,
    /// Section label used for grouping. Top-level pages have none.
    #[serde(default)]
    pub parent: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Which indexed field a term came from.
///
/// Title matches beat content matches. See `scoring::core` for the gap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Title,
    Content,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Title => "title",
            FieldType::Content => "content",
        }
    }
}

/// A ranked search hit.
///
/// Carries the stored subset of a [`DocumentRecord`] plus the relevance score
/// the engine assigned. Scores are only comparable within one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: RecordId,
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub score: f64,
}
