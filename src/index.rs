// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The full-text engine behind the search box.
//!
//! Records go in through [`SearchIndex::add`], queries come out of
//! [`SearchIndex::search`]. The document schema is fixed:
//!
//! | Role    | Fields                     |
//! |---------|----------------------------|
//! | id      | `id`                       |
//! | indexed | `title`, `content`         |
//! | stored  | `title`, `href`, `parent`  |
//!
//! `content` is never stored. Pages can be large and nothing renders it.
//!
//! # Query semantics
//!
//! The query is tokenized the same way as the records. Every query term must
//! hit the record (AND), either as a whole word or as a prefix of one. The
//! record's score is the sum of its best hit per term.
//!
//! # INVARIANTS
//!
//! 1. **ONE_SLOT_PER_ID**: `slots[id]` points at the only live slot for `id`
//! 2. **NO_DANGLING_POSTINGS**: every posting points at a live slot

use crate::inverted::{tokenize_records, InvertedIndex, TokenizedRecord};
use crate::scoring::ranking::{rank, Candidate};
use crate::scoring::term_score;
use crate::types::{DocumentRecord, FieldType, Match, RecordId};
use crate::utils::tokenize;
use std::collections::{HashMap, HashSet};

/// Stored subset of a record plus field lengths for the position bonus.
#[derive(Debug, Clone)]
struct StoredRecord {
    id: RecordId,
    title: String,
    href: String,
    parent: Option<String>,
    title_len: usize,
    content_len: usize,
}

impl StoredRecord {
    fn field_len(&self, field_type: FieldType) -> usize {
        match field_type {
            FieldType::Title => self.title_len,
            FieldType::Content => self.content_len,
        }
    }

    fn to_match(&self, score: f64) -> Match {
        Match {
            id: self.id.clone(),
            title: self.title.clone(),
            href: self.href.clone(),
            parent: self.parent.clone(),
            score,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    records: Vec<Option<StoredRecord>>,
    slots: HashMap<RecordId, usize>,
    inverted: InvertedIndex,
}

impl SearchIndex {
    pub fn new() -> Self {
        SearchIndex {
            records: Vec::new(),
            slots: HashMap::new(),
            inverted: InvertedIndex::new(),
        }
    }

    /// Build an index from a whole batch of records.
    ///
    /// Tokenization runs in parallel with the `parallel` feature; insertion is
    /// sequential and follows input order, so ranking ties resolve the same
    /// way regardless of thread count.
    pub fn from_records(records: &[DocumentRecord]) -> Self {
        let mut index = SearchIndex::new();
        let tokenized = tokenize_records(records);
        for (record, tokens) in records.iter().zip(&tokenized) {
            index.insert_tokenized(record, tokens);
        }
        index
    }

    /// Add one record. A record with an id already in the index replaces it.
    pub fn add(&mut self, record: &DocumentRecord) {
        let tokens = TokenizedRecord::from_record(record);
        self.insert_tokenized(record, &tokens);
    }

    fn insert_tokenized(&mut self, record: &DocumentRecord, tokens: &TokenizedRecord) {
        if let Some(old_slot) = self.slots.remove(&record.id) {
            self.inverted.remove_slot(old_slot);
            self.records[old_slot] = None;
        }

        let slot = self.records.len();
        self.records.push(Some(StoredRecord {
            id: record.id.clone(),
            title: record.title.clone(),
            href: record.href.clone(),
            parent: record.parent.clone(),
            title_len: tokens.title.len(),
            content_len: tokens.content.len(),
        }));
        self.slots.insert(record.id.clone(), slot);
        self.inverted.insert(slot, tokens);
    }

    /// Up to `limit` matches for `query`, best first.
    ///
    /// Returns an empty list for a query without terms.
    pub fn search(&self, query: &str, limit: usize) -> Vec<Match> {
        let mut seen = HashSet::new();
        let terms: Vec<String> = tokenize(query)
            .into_iter()
            .filter(|term| seen.insert(term.clone()))
            .collect();

        if terms.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut totals: Option<HashMap<usize, f64>> = None;
        for term in &terms {
            let hits = self.best_hits(term);
            let merged = match totals {
                None => hits,
                Some(previous) => previous
                    .into_iter()
                    .filter_map(|(slot, score)| hits.get(&slot).map(|hit| (slot, score + hit)))
                    .collect(),
            };
            if merged.is_empty() {
                return Vec::new();
            }
            totals = Some(merged);
        }

        let candidates = totals
            .unwrap_or_default()
            .into_iter()
            .map(|(slot, score)| Candidate { slot, score })
            .collect();

        rank(candidates, limit)
            .into_iter()
            .filter_map(|candidate| {
                self.records
                    .get(candidate.slot)
                    .and_then(Option::as_ref)
                    .map(|stored| stored.to_match(candidate.score))
            })
            .collect()
    }

    /// Best score per slot for one query term (whole-word or prefix hit).
    fn best_hits(&self, term: &str) -> HashMap<usize, f64> {
        let mut best: HashMap<usize, f64> = HashMap::new();
        for (indexed, list) in self.inverted.prefix_range(term) {
            let exact = indexed == term;
            for posting in &list.postings {
                let Some(stored) = self.records.get(posting.slot).and_then(Option::as_ref) else {
                    continue;
                };
                let score = term_score(
                    &posting.field_type,
                    posting.position,
                    stored.field_len(posting.field_type),
                    exact,
                );
                let entry = best.entry(posting.slot).or_insert(0.0);
                if score > *entry {
                    *entry = score;
                }
            }
        }
        best
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.slots.contains_key(id)
    }

    /// Distinct `parent` labels across live records (absent counts as one).
    pub fn parent_count(&self) -> usize {
        self.records
            .iter()
            .flatten()
            .map(|stored| stored.parent.as_deref())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Number of distinct indexed terms.
    pub fn vocabulary_len(&self) -> usize {
        self.inverted.vocabulary_len()
    }
}
