// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incremental search for static documentation sites.
//!
//! The site generator emits a JSON array of page records. This crate loads it
//! lazily, builds an in-memory full-text index, answers each keystroke with
//! the top matches, groups them by section and renders them as list items.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌───────────┐   ┌───────────┐
//! │  loader    │──▶│  index     │──▶│  group    │──▶│  render   │
//! │ (LazyIndex,│   │(SearchIndex│   │(group_by_ │   │ (render,  │
//! │ DataSource)│   │  search)   │   │  parent)  │   │  Element) │
//! └────────────┘   └────────────┘   └───────────┘   └───────────┘
//!        ▲                                                 │
//!        └──────────────── widget (SearchWidget) ◀─────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use gdoc_search::{FileSource, QueryOutcome, SearchWidget, WidgetConfig};
//!
//! let mut widget = SearchWidget::new(WidgetConfig::default(), FileSource::new("public/en.search-data.min.json"));
//! widget.on_focus();                       // starts loading in the background
//! widget.index().wait_settled().await;
//! if let QueryOutcome::Hits(n) = widget.on_query_change("install") {
//!     println!("{} hits\n{}", n, widget.results().to_html());
//! }
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod group;
mod index;
mod inverted;
pub mod loader;
pub mod render;
pub mod scoring;
mod types;
mod utils;
pub mod widget;

pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::WidgetConfig;
pub use dom::Element;
pub use error::{ConfigError, LoadError};
pub use group::{group_by_parent, Group, GroupFn, GroupedResults};
pub use index::SearchIndex;
pub use loader::{
    fetch_index_data, records_from_values, AnySource, ArtifactInfo, DataSource, FileSource,
    IndexData, IndexStatus, LazyIndex, SearchHandle, StaticSource,
};
#[cfg(feature = "http")]
pub use loader::HttpSource;
pub use render::{render, ResultView, ENTRY_CLASS, HAS_HITS_CLASS};
pub use types::{DocumentRecord, FieldType, Match, RecordId};
pub use utils::{normalize, tokenize};
pub use widget::{QueryOutcome, SearchWidget};
