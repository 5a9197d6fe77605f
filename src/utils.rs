// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text folding shared by indexing and querying.
//!
//! Records and queries go through the same [`tokenize`], so "Café" in a
//! title and "cafe" typed into the box end up as the same term.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Case- and accent-insensitive form of `value`, single-spaced.
///
/// `"  Café  Naïve "` → `"cafe naive"`. Without the `unicode-normalization`
/// feature (browser builds) accents are kept.
pub fn normalize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for word in fold(value).split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(feature = "unicode-normalization")]
fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(not(feature = "unicode-normalization"))]
fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Split text into normalized terms.
///
/// Anything that isn't alphanumeric separates terms, so `"set-up_guide"`
/// yields `["set", "up", "guide"]`. Order is preserved; the index uses the
/// position of each term for its position bonus.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}
