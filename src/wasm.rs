// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search box.
//!
//! The host page does the fetching (it already has `fetch`), then hands the
//! parsed document array to [`GdocSearch`]. Everything after that runs here:
//! indexing, ranking, grouping and building the result markup.

use crate::dom::Element;
use crate::group::group_by_parent;
use crate::index::SearchIndex;
use crate::render::{render, ResultView};
use crate::loader::records_from_values;
use crate::types::Match;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// One section of grouped results, for JavaScript consumers.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupOutput {
    parent: Option<String>,
    matches: Vec<Match>,
}

/// WASM-accessible search index.
#[wasm_bindgen]
pub struct GdocSearch {
    index: SearchIndex,
}

#[wasm_bindgen]
impl GdocSearch {
    /// Build the index from the document array (`en.search-data.min.json`).
    ///
    /// Fails only if `records` isn't an array; invalid entries are skipped.
    #[wasm_bindgen(constructor)]
    pub fn new(records: JsValue) -> Result<GdocSearch, JsValue> {
        let values: Vec<serde_json::Value> = from_value(records).map_err(|e| e.to_string())?;
        let records = records_from_values(values);
        Ok(GdocSearch {
            index: SearchIndex::from_records(&records),
        })
    }

    /// Number of indexed records.
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[wasm_bindgen(getter, js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Ranked matches as an array of `{id, title, href, parent, score}`.
    pub fn search(&self, query: &str, limit: usize) -> Result<JsValue, JsValue> {
        to_value(&self.index.search(query, limit)).map_err(|e| e.to_string().into())
    }

    /// Ranked matches grouped by parent: `[{parent, matches}]`.
    #[wasm_bindgen(js_name = searchGrouped)]
    pub fn search_grouped(&self, query: &str, limit: usize) -> Result<JsValue, JsValue> {
        let grouped: Vec<GroupOutput> = group_by_parent(self.index.search(query, limit))
            .iter()
            .map(|group| GroupOutput {
                parent: group.key.clone(),
                matches: group.matches.clone(),
            })
            .collect();
        to_value(&grouped).map_err(|e| e.to_string().into())
    }

    /// The `<li>` items for `query`, ready for `innerHTML`.
    ///
    /// Empty string when nothing matches; the caller toggles `has-hits`.
    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self, query: &str, limit: usize, show_parent: bool) -> String {
        let matches = self.index.search(query, limit);
        if matches.is_empty() {
            return String::new();
        }
        let mut container = Element::new("ul");
        render(
            &mut container,
            &ResultView::build(matches, show_parent, group_by_parent),
        );
        container
            .children()
            .iter()
            .map(Element::to_html)
            .collect()
    }
}
