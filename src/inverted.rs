// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index: term → postings.
//!
//! Terms live in a `BTreeMap` so a prefix lookup is a single range scan.
//! That's what makes incremental search work: "inst" walks straight to
//! "install", "installation" and "instance" without touching anything else.
//!
//! # INVARIANTS
//!
//! 1. **NON_EMPTY**: every term has at least one posting (empty lists are
//!    dropped when a slot is removed)
//! 2. **SLOT_ORDERED**: postings within a list are appended in slot order,
//!    so they stay sorted by `(slot, field, position)` as long as slots are
//!    only ever appended

use crate::types::{DocumentRecord, FieldType};
use crate::utils::tokenize;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::ops::Bound;

/// One occurrence of a term in a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    /// Storage slot of the record
    pub slot: usize,
    /// Field the term appeared in
    pub field_type: FieldType,
    /// Term index within that field
    pub position: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PostingList {
    pub postings: Vec<Posting>,
}

/// Terms of one record, tokenized per field.
///
/// Produced in the map phase (possibly in parallel), consumed by
/// [`InvertedIndex::insert`].
#[derive(Debug, Clone, Default)]
pub struct TokenizedRecord {
    pub title: Vec<String>,
    pub content: Vec<String>,
}

impl TokenizedRecord {
    pub fn from_record(record: &DocumentRecord) -> Self {
        TokenizedRecord {
            title: tokenize(&record.title),
            content: tokenize(&record.content),
        }
    }
}

/// Tokenize a batch of records. Order of the output matches the input.
#[cfg(feature = "parallel")]
pub fn tokenize_records(records: &[DocumentRecord]) -> Vec<TokenizedRecord> {
    records.par_iter().map(TokenizedRecord::from_record).collect()
}

#[cfg(not(feature = "parallel"))]
pub fn tokenize_records(records: &[DocumentRecord]) -> Vec<TokenizedRecord> {
    records.iter().map(TokenizedRecord::from_record).collect()
}

#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    terms: BTreeMap<String, PostingList>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every term of `tokens` under `slot`.
    pub fn insert(&mut self, slot: usize, tokens: &TokenizedRecord) {
        for (field_type, terms) in [
            (FieldType::Title, &tokens.title),
            (FieldType::Content, &tokens.content),
        ] {
            for (position, term) in terms.iter().enumerate() {
                self.terms
                    .entry(term.clone())
                    .or_default()
                    .postings
                    .push(Posting {
                        slot,
                        field_type,
                        position,
                    });
            }
        }
    }

    /// Drop every posting that points at `slot`.
    pub fn remove_slot(&mut self, slot: usize) {
        self.terms.retain(|_, list| {
            list.postings.retain(|p| p.slot != slot);
            !list.postings.is_empty()
        });
    }

    /// Exact term lookup.
    #[cfg(test)]
    pub fn get(&self, term: &str) -> Option<&PostingList> {
        self.terms.get(term)
    }

    /// All terms starting with `prefix` (including `prefix` itself), in
    /// lexicographic order.
    pub fn prefix_range<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a PostingList)> + 'a {
        self.terms
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(term, _)| term.starts_with(prefix))
            .map(|(term, list)| (term.as_str(), list))
    }

    /// Number of distinct terms.
    pub fn vocabulary_len(&self) -> usize {
        self.terms.len()
    }
}
