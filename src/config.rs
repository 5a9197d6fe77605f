// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Widget configuration.
//!
//! Everything has a default that matches the stock documentation theme, so
//! an empty `{}` config file is valid. [`WidgetConfig::load`] reads a JSON
//! file; CLI flags are applied on top by the binary.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default path of the index data artifact, relative to the site root.
pub const DEFAULT_DATA_PATH: &str = "/en.search-data.min.json";

/// Default number of matches per query.
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Where to fetch the document array from (URL or file path).
    #[serde(default = "default_data_url")]
    pub data_url: String,
    /// Id of the text input element.
    #[serde(default = "default_input_id")]
    pub input_id: String,
    /// Id of the results container element.
    #[serde(default = "default_results_id")]
    pub results_id: String,
    /// Maximum matches per query.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Group results under their parent section.
    #[serde(default = "default_show_parent")]
    pub show_parent: bool,
}

fn default_data_url() -> String {
    DEFAULT_DATA_PATH.to_string()
}
fn default_input_id() -> String {
    "gdoc-search-input".to_string()
}
fn default_results_id() -> String {
    "gdoc-search-results".to_string()
}
fn default_limit() -> usize {
    DEFAULT_LIMIT
}
fn default_show_parent() -> bool {
    true
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            data_url: default_data_url(),
            input_id: default_input_id(),
            results_id: default_results_id(),
            limit: default_limit(),
            show_parent: default_show_parent(),
        }
    }
}

impl WidgetConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
