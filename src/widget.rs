// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search box: focus to load, type to query.
//!
//! [`SearchWidget`] owns the results container and drives one query cycle
//! per input change:
//!
//! 1. clear every rendered node
//! 2. empty input → drop `has-hits`, stop
//! 3. index not ready → drop `has-hits`, stop
//! 4. query the index for up to `limit` matches
//! 5. no matches → drop `has-hits`, stop
//! 6. set `has-hits`, group (optionally), render
//!
//! Step 1 always runs first, so the renderer never has to clean up after a
//! previous cycle.

use crate::config::WidgetConfig;
use crate::dom::Element;
use crate::loader::{DataSource, IndexStatus, LazyIndex};
use crate::render::{render, ResultView, HAS_HITS_CLASS};

/// How a query cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Input was empty.
    Empty,
    /// The index is still loading, never started, or failed to load.
    NotReady(&'static str),
    /// The index has no match for the input.
    NoHits,
    /// This many matches were rendered.
    Hits(usize),
}

pub struct SearchWidget<S> {
    config: WidgetConfig,
    index: LazyIndex<S>,
    /// Focus handler still attached (detached after its first call).
    focus_armed: bool,
    /// The text box; its `value` attribute holds the current query.
    input: Element,
    results: Element,
}

impl<S: DataSource> SearchWidget<S> {
    pub fn new(config: WidgetConfig, source: S) -> Self {
        Self::with_index(config, LazyIndex::new(source))
    }

    /// Attach to an index that may be shared with other widgets.
    pub fn with_index(config: WidgetConfig, index: LazyIndex<S>) -> Self {
        let input = Element::new("input")
            .with_id(&config.input_id)
            .with_attribute("type", "search")
            .with_attribute("value", "");
        let results = Element::new("ul").with_id(&config.results_id);
        SearchWidget {
            config,
            index,
            focus_armed: true,
            input,
            results,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn index(&self) -> &LazyIndex<S> {
        &self.index
    }

    /// The input element.
    pub fn input(&self) -> &Element {
        &self.input
    }

    /// Current input value.
    pub fn query(&self) -> &str {
        self.input.attribute("value").unwrap_or_default()
    }

    /// The results container.
    pub fn results(&self) -> &Element {
        &self.results
    }

    pub fn has_hits(&self) -> bool {
        self.results.has_class(HAS_HITS_CLASS)
    }

    /// First focus starts loading the index in the background.
    ///
    /// The handler detaches itself: later focus events do nothing. Returns
    /// whether this call started a load. Must run inside a Tokio runtime.
    pub fn on_focus(&mut self) -> bool {
        if !self.focus_armed {
            return false;
        }
        self.focus_armed = false;
        self.index.initialize()
    }

    /// Run one query cycle for the new input value.
    pub fn on_query_change(&mut self, query: &str) -> QueryOutcome {
        self.input.set_attribute("value", query);
        self.results.clear_children();

        if query.is_empty() {
            self.results.remove_class(HAS_HITS_CLASS);
            return QueryOutcome::Empty;
        }

        let handle = match self.index.status() {
            IndexStatus::Ready(handle) => handle,
            other => {
                tracing::debug!(status = other.as_str(), "query before index ready");
                self.results.remove_class(HAS_HITS_CLASS);
                return QueryOutcome::NotReady(other.as_str());
            }
        };

        let matches = handle.search(query, self.config.limit);
        if matches.is_empty() {
            self.results.remove_class(HAS_HITS_CLASS);
            return QueryOutcome::NoHits;
        }

        self.results.add_class(HAS_HITS_CLASS);
        let count = matches.len();
        let view = ResultView::build(matches, self.config.show_parent, handle.group_fn());
        render(&mut self.results, &view);
        tracing::trace!(query, count, "rendered results");
        QueryOutcome::Hits(count)
    }

    /// Wait for the index, then run the query cycle.
    ///
    /// For callers that would rather hold a query than answer it with
    /// `NotReady`. Triggers the load if focus never did.
    pub async fn on_query_change_when_ready(&mut self, query: &str) -> QueryOutcome {
        self.focus_armed = false;
        self.index.ensure_loaded().await;
        self.on_query_change(query)
    }
}
