// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Partition ranked matches by their `parent` section.
//!
//! **Invariants**:
//! - Total: every input match lands in exactly one group.
//! - Group order is the order in which each `parent` first shows up.
//! - Member order within a group is input (rank) order.
//!
//! A match without a parent is grouped under the absent key, not dropped.

use crate::types::Match;
use std::collections::HashMap;

/// One section of grouped results.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// The shared `parent` value, `None` for top-level pages.
    pub key: Option<String>,
    pub matches: Vec<Match>,
}

/// Matches partitioned by `parent`, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedResults {
    groups: Vec<Group>,
}

impl GroupedResults {
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Members of the group with `key`, if that group exists.
    pub fn get(&self, key: Option<&str>) -> Option<&[Match]> {
        self.groups
            .iter()
            .find(|group| group.key.as_deref() == key)
            .map(|group| group.matches.as_slice())
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of matches across all groups.
    pub fn match_count(&self) -> usize {
        self.groups.iter().map(|group| group.matches.len()).sum()
    }

    /// Group-then-member order.
    pub fn flatten(self) -> Vec<Match> {
        self.groups.into_iter().flat_map(|group| group.matches).collect()
    }
}

impl<'a> IntoIterator for &'a GroupedResults {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// The grouping capability handed out by the loader.
pub type GroupFn = fn(Vec<Match>) -> GroupedResults;

/// Group matches by `parent`, preserving first-appearance order.
pub fn group_by_parent(matches: Vec<Match>) -> GroupedResults {
    let mut groups: Vec<Group> = Vec::new();
    let mut positions: HashMap<Option<String>, usize> = HashMap::new();

    for m in matches {
        let position = *positions.entry(m.parent.clone()).or_insert_with(|| {
            groups.push(Group {
                key: m.parent.clone(),
                matches: Vec::new(),
            });
            groups.len() - 1
        });
        groups[position].matches.push(m);
    }

    GroupedResults { groups }
}
