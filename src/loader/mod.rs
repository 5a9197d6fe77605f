// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Getting the document array from wherever it lives.
//!
//! The site generator writes the data artifact next to the pages, so in
//! production it's an HTTP fetch. The CLI also reads it straight off disk,
//! and tests hand bytes over directly. All three go through [`DataSource`].
//!
//! A body that isn't a JSON array yields zero records, never a prefix of
//! them. Inside a well-formed array each record stands alone: one bad entry
//! is skipped, its neighbours are still indexed.

mod lazy;

pub use lazy::{ArtifactInfo, IndexStatus, LazyIndex, SearchHandle};

use crate::error::LoadError;
use crate::types::DocumentRecord;
use serde::Deserialize;
use serde_json::Value;
use std::future::Future;
use std::path::PathBuf;

/// Something that can produce the raw bytes of the data artifact.
pub trait DataSource: Send + Sync + 'static {
    /// Where the bytes come from, for logs.
    fn location(&self) -> String;

    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, LoadError>> + Send;
}

/// Raw artifact plus its parsed records.
#[derive(Debug, Clone)]
pub struct IndexData {
    pub records: Vec<DocumentRecord>,
    pub info: ArtifactInfo,
}

/// Fetch and parse the document array.
pub async fn fetch_index_data<S: DataSource>(source: &S) -> Result<IndexData, LoadError> {
    let bytes = source.fetch().await?;
    let values: Vec<Value> = serde_json::from_slice(&bytes)?;
    let total = values.len();
    let records = records_from_values(values);
    Ok(IndexData {
        info: ArtifactInfo {
            location: source.location(),
            bytes: bytes.len(),
            crc32: crc32fast::hash(&bytes),
            records: records.len(),
            skipped: total - records.len(),
        },
        records,
    })
}

/// Convert each array element on its own. Elements that aren't a valid
/// record are logged and skipped; the rest still get indexed.
pub fn records_from_values(values: Vec<Value>) -> Vec<DocumentRecord> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| {
            let id = value.get("id").map(Value::to_string).unwrap_or_default();
            match DocumentRecord::deserialize(value) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(position, %id, error = %err, "skipping search record");
                    None
                }
            }
        })
        .collect()
}

/// Reads the artifact from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Bytes already in memory (embedded data, tests, the WASM host).
#[derive(Debug, Clone)]
pub struct StaticSource {
    bytes: Vec<u8>,
}

impl StaticSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        StaticSource {
            bytes: bytes.into(),
        }
    }
}

impl DataSource for StaticSource {
    fn location(&self) -> String {
        format!("<memory: {} bytes>", self.bytes.len())
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        Ok(self.bytes.clone())
    }
}

/// `GET`s the artifact. Any non-2xx status is a failure.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        HttpSource {
            client,
            url: url.into(),
        }
    }

    fn transport_error(&self, err: &reqwest::Error) -> LoadError {
        LoadError::Transport {
            url: self.url.clone(),
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "http")]
impl DataSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
                reason: status.canonical_reason().map(str::to_string),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&e))?;
        Ok(body.to_vec())
    }
}

/// Source picked at runtime from a location string.
#[derive(Debug, Clone)]
pub enum AnySource {
    File(FileSource),
    Static(StaticSource),
    #[cfg(feature = "http")]
    Http(HttpSource),
}

impl AnySource {
    /// `http://` and `https://` locations are fetched; with a `base_url`,
    /// site-relative paths like `/en.search-data.min.json` are fetched from
    /// that site; everything else is a file path.
    #[cfg(feature = "http")]
    pub fn resolve(location: &str, base_url: Option<&str>) -> Self {
        if is_url(location) {
            return AnySource::Http(HttpSource::new(location));
        }
        match base_url {
            Some(base) => AnySource::Http(HttpSource::new(join_url(base, location))),
            None => AnySource::File(FileSource::new(location)),
        }
    }

    #[cfg(not(feature = "http"))]
    pub fn resolve(location: &str, _base_url: Option<&str>) -> Self {
        AnySource::File(FileSource::new(location))
    }
}

impl DataSource for AnySource {
    fn location(&self) -> String {
        match self {
            AnySource::File(source) => source.location(),
            AnySource::Static(source) => source.location(),
            #[cfg(feature = "http")]
            AnySource::Http(source) => source.location(),
        }
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        match self {
            AnySource::File(source) => source.fetch().await,
            AnySource::Static(source) => source.fetch().await,
            #[cfg(feature = "http")]
            AnySource::Http(source) => source.fetch().await,
        }
    }
}

pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Join a site base URL and a site-relative path with exactly one slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
