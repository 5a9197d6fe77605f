// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how candidates get sorted before the limit is applied.
//!
//! Sort order:
//! 1. **Score** - higher wins
//! 2. **Slot** - insertion order into the index, earlier wins
//!
//! The slot tiebreaker keeps results stable across runs and matches the
//! order of the data artifact when scores are equal.

use std::cmp::Ordering;

/// A scored reference to a stored record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub slot: usize,
    pub score: f64,
}

/// Compare two candidates for ranking (`Less` means `a` ranks first).
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.slot.cmp(&b.slot),
    }
}

/// Sort candidates best-first and keep at most `limit`.
pub fn rank(mut candidates: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    candidates.sort_by(compare_candidates);
    candidates.truncate(limit);
    candidates
}
