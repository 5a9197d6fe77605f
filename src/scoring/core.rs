// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! # Key Invariant: Field Type Dominance
//!
//! ```text
//! Title * PrefixFactor > Content + MaxBoost   (50.0 > 1.5)
//! ```
//!
//! A prefix hit in a title (the common case while the user is still typing)
//! must still outrank an exact hit buried in body text.
//!
//! | Constant             | Value | Role                                   |
//! |----------------------|-------|----------------------------------------|
//! | `TITLE_BASE_SCORE`   | 100.0 | Dominates content even as a prefix hit |
//! | `CONTENT_BASE_SCORE` | 1.0   | Baseline                               |
//! | `MAX_POSITION_BONUS` | 0.5   | Tiebreaker within a field              |
//! | `PREFIX_MATCH_FACTOR`| 0.5   | Partial words rank below whole words   |

use crate::types::FieldType;

/// Base score for Title field matches.
pub const TITLE_BASE_SCORE: f64 = 100.0;

/// Base score for Content field matches.
pub const CONTENT_BASE_SCORE: f64 = 1.0;

/// Maximum position bonus (first term of a field gets this bonus).
pub const MAX_POSITION_BONUS: f64 = 0.5;

/// Multiplier applied when the query term is only a prefix of the indexed term.
pub const PREFIX_MATCH_FACTOR: f64 = 0.5;

/// Base score by field type: Title (100) > Content (1).
pub fn field_type_score(field_type: &FieldType) -> f64 {
    match field_type {
        FieldType::Title => TITLE_BASE_SCORE,
        FieldType::Content => CONTENT_BASE_SCORE,
    }
}

/// Position bonus: terms near the start of a field score slightly higher.
///
/// Range is `[0, MAX_POSITION_BONUS]`, monotonically decreasing in `position`.
pub fn position_bonus(position: usize, field_len: usize) -> f64 {
    if field_len > 0 {
        MAX_POSITION_BONUS * (1.0 - (position as f64 / field_len as f64))
    } else {
        0.0
    }
}

/// Score for a single query term hitting a single indexed term occurrence.
pub fn term_score(field_type: &FieldType, position: usize, field_len: usize, exact: bool) -> f64 {
    let base = field_type_score(field_type) + position_bonus(position, field_len);
    if exact {
        base
    } else {
        base * PREFIX_MATCH_FACTOR
    }
}
