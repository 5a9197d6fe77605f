// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turn matches into list items.
//!
//! Output shape, one `<li>` per section:
//!
//! ```text
//! <li>
//!   <span>Guides</span>
//!   <ul>
//!     <li><span class="flex"><a class="gdoc-search__entry" href="/install">Install</a></span></li>
//!   </ul>
//! </li>
//! ```
//!
//! The renderer only appends. Clearing the container is the query cycle's
//! job and has to happen before every render.

use crate::dom::Element;
use crate::group::{GroupFn, GroupedResults};
use crate::types::Match;

/// Class toggled on the results container when a query has matches.
pub const HAS_HITS_CLASS: &str = "has-hits";

/// Class on every result link.
pub const ENTRY_CLASS: &str = "gdoc-search__entry";

/// Section label for the ungrouped view.
pub const FLAT_LABEL: &str = "Results";

/// Section label for matches without a parent.
///
/// The grouping key for these matches is `None`. Stringifying that key would
/// give the heading `undefined`; this label replaces it deliberately.
/// Grouping is unaffected: all parentless matches still share one section,
/// placed where the first of them ranks.
pub const UNPARENTED_LABEL: &str = "Other";

/// What to render: sectioned by parent, or one flat list.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Grouped(GroupedResults),
    Flat(Vec<Match>),
}

impl ResultView {
    /// Pick the view for `matches`, grouping with `group` when `show_parent` is set.
    pub fn build(matches: Vec<Match>, show_parent: bool, group: GroupFn) -> Self {
        if show_parent {
            ResultView::Grouped(group(matches))
        } else {
            ResultView::Flat(matches)
        }
    }

    pub fn match_count(&self) -> usize {
        match self {
            ResultView::Grouped(grouped) => grouped.match_count(),
            ResultView::Flat(matches) => matches.len(),
        }
    }
}

/// Append the list items for `view` to `container`.
pub fn render(container: &mut Element, view: &ResultView) {
    let items: Vec<Element> = match view {
        ResultView::Grouped(grouped) => grouped
            .iter()
            .map(|group| {
                section_item(
                    group.key.as_deref().unwrap_or(UNPARENTED_LABEL),
                    &group.matches,
                )
            })
            .collect(),
        ResultView::Flat(matches) => vec![section_item(FLAT_LABEL, matches)],
    };

    for item in items {
        container.append_child(item);
    }
}

fn section_item(label: &str, matches: &[Match]) -> Element {
    let mut sub_list = Element::new("ul");
    create_links(matches, &mut sub_list);
    Element::new("li")
        .with_child(Element::new("span").with_text(label))
        .with_child(sub_list)
}

/// One `<li>` entry per match, appended to `target`.
fn create_links(matches: &[Match], target: &mut Element) {
    for page in matches {
        let anchor = Element::new("a")
            .with_attribute("href", &page.href)
            .with_class(ENTRY_CLASS)
            .with_text(&page.title);
        let entry = Element::new("span").with_class("flex").with_child(anchor);
        target.append_child(Element::new("li").with_child(entry));
    }
}
