// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One index per page, built on first use.
//!
//! The search box shouldn't pay for the data artifact until someone actually
//! focuses it, and it must never query a half-built index. [`LazyIndex`]
//! handles both:
//!
//! ```text
//! Unloaded ──initialize()──▶ Loading ──fetch+build ok──▶ Ready(handle)
//!                               │
//!                               └──────fetch/parse err──▶ Failed(err)
//! ```
//!
//! The transition out of `Unloaded` happens exactly once. The finished index
//! is published in a single write, so readers see either no index or all of
//! it. Failures are logged and parked in `Failed`; there is no retry. A load
//! task that panics also ends in `Failed`, so waiters never hang.

use super::{fetch_index_data, DataSource};
use crate::error::LoadError;
use crate::group::{group_by_parent, GroupFn, GroupedResults};
use crate::index::SearchIndex;
use crate::types::Match;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::Notify;

/// What was loaded, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactInfo {
    pub location: String,
    pub bytes: usize,
    pub crc32: u32,
    pub records: usize,
    /// Array elements that weren't valid records.
    pub skipped: usize,
}

/// Capabilities of a ready search: the built index and the grouping function.
#[derive(Debug, Clone)]
pub struct SearchHandle {
    index: Arc<SearchIndex>,
    group: GroupFn,
    artifact: ArtifactInfo,
}

impl SearchHandle {
    pub fn new(index: SearchIndex, group: GroupFn, artifact: ArtifactInfo) -> Self {
        SearchHandle {
            index: Arc::new(index),
            group,
            artifact,
        }
    }

    pub fn search(&self, query: &str, limit: usize) -> Vec<Match> {
        self.index.search(query, limit)
    }

    pub fn group(&self, matches: Vec<Match>) -> GroupedResults {
        (self.group)(matches)
    }

    pub fn group_fn(&self) -> GroupFn {
        self.group
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn artifact(&self) -> &ArtifactInfo {
        &self.artifact
    }
}

/// Loader state as seen by callers.
#[derive(Debug, Clone)]
pub enum IndexStatus {
    Unloaded,
    Loading,
    Ready(SearchHandle),
    Failed(Arc<LoadError>),
}

impl IndexStatus {
    /// `Ready` or `Failed`: nothing will change anymore.
    pub fn is_settled(&self) -> bool {
        matches!(self, IndexStatus::Ready(_) | IndexStatus::Failed(_))
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, IndexStatus::Ready(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IndexStatus::Unloaded => "unloaded",
            IndexStatus::Loading => "loading",
            IndexStatus::Ready(_) => "ready",
            IndexStatus::Failed(_) => "failed",
        }
    }
}

struct Inner<S> {
    source: S,
    state: RwLock<IndexStatus>,
    settled: Notify,
}

impl<S: DataSource> Inner<S> {
    async fn run_load(&self) {
        let location = self.source.location();
        tracing::debug!(%location, "loading search data");

        // Grouping is resolved before any record is indexed.
        let group: GroupFn = group_by_parent;

        let status = match fetch_index_data(&self.source).await {
            Ok(data) => {
                let index = SearchIndex::from_records(&data.records);
                tracing::info!(
                    %location,
                    records = index.len(),
                    terms = index.vocabulary_len(),
                    "search index ready"
                );
                IndexStatus::Ready(SearchHandle::new(index, group, data.info))
            }
            Err(err) => {
                tracing::warn!(%location, error = %err, "search index unavailable");
                IndexStatus::Failed(Arc::new(err))
            }
        };

        self.settle(status);
    }

    fn settle(&self, status: IndexStatus) {
        *self.state.write() = status;
        self.settled.notify_waiters();
    }
}

/// Run the load on its own task and settle `Failed` if that task dies.
async fn load_guarded<S: DataSource>(inner: Arc<Inner<S>>) {
    let task = tokio::spawn({
        let inner = Arc::clone(&inner);
        async move { inner.run_load().await }
    });
    if let Err(err) = task.await {
        let location = inner.source.location();
        tracing::error!(%location, error = %err, "search index load task died");
        inner.settle(IndexStatus::Failed(Arc::new(LoadError::Aborted(
            err.to_string(),
        ))));
    }
}

/// Lazily built, shared search index.
pub struct LazyIndex<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for LazyIndex<S> {
    fn clone(&self) -> Self {
        LazyIndex {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: DataSource> LazyIndex<S> {
    pub fn new(source: S) -> Self {
        LazyIndex {
            inner: Arc::new(Inner {
                source,
                state: RwLock::new(IndexStatus::Unloaded),
                settled: Notify::new(),
            }),
        }
    }

    pub fn source(&self) -> &S {
        &self.inner.source
    }

    pub fn status(&self) -> IndexStatus {
        self.inner.state.read().clone()
    }

    /// The search capabilities, once the index is ready.
    pub fn handle(&self) -> Option<SearchHandle> {
        match &*self.inner.state.read() {
            IndexStatus::Ready(handle) => Some(handle.clone()),
            _ => None,
        }
    }

    /// Move `Unloaded → Loading`. Only the caller that wins this gets to load.
    fn claim(&self) -> bool {
        let mut state = self.inner.state.write();
        if matches!(*state, IndexStatus::Unloaded) {
            *state = IndexStatus::Loading;
            true
        } else {
            false
        }
    }

    /// Start loading in the background. Must be called inside a Tokio runtime.
    ///
    /// Returns `true` if this call started the load, `false` if a load was
    /// already started (or finished) earlier.
    pub fn initialize(&self) -> bool {
        if !self.claim() {
            return false;
        }
        tokio::spawn(load_guarded(Arc::clone(&self.inner)));
        true
    }

    /// Load on this task if nobody has started yet, then wait for the result.
    pub async fn ensure_loaded(&self) -> IndexStatus {
        if self.claim() {
            load_guarded(Arc::clone(&self.inner)).await;
        }
        self.wait_settled().await
    }

    /// Wait until the loader is `Ready` or `Failed`.
    ///
    /// Returns `Unloaded` right away if no load was ever started, since
    /// nothing would ever wake us.
    pub async fn wait_settled(&self) -> IndexStatus {
        loop {
            let notified = self.inner.settled.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            let status = self.status();
            if status.is_settled() || matches!(status, IndexStatus::Unloaded) {
                return status;
            }
            notified.await;
        }
    }
}
