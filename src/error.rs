// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! The loader swallows [`LoadError`]s after logging them; they stay visible
//! through the loader status so callers can tell "still loading" from
//! "never going to load".

use std::path::PathBuf;
use thiserror::Error;

/// Failure on the fetch path of the index data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Connection refused, DNS failure, reset mid-body, ...
    #[error("transport error fetching {url}: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-2xx status.
    #[error("{url} returned HTTP {status}{}", reason.as_deref().map(|r| format!(" {}", r)).unwrap_or_default())]
    Status {
        url: String,
        status: u16,
        reason: Option<String>,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Body was not a JSON array.
    #[error("invalid search data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The load task died (panicked or was cancelled) before settling.
    #[error("search index build aborted: {0}")]
    Aborted(String),
}

/// Failure reading a widget configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
