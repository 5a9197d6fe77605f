// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the gdoc-search command-line interface.
//!
//! Three subcommands: `search` runs one query cycle and prints what the
//! search box would render, `inspect` summarizes a data artifact, and
//! `interactive` replays stdin lines as successive inputs.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gdoc-search",
    about = "Incremental documentation search over a site's search data",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the search data lives and how results are shaped.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Search data location: file path, URL, or site path with --base-url
    ///
    /// Defaults to the config's dataUrl (/en.search-data.min.json).
    #[arg(short, long)]
    pub data: Option<String>,

    /// Site base URL that site-relative data paths are fetched from
    #[arg(long)]
    pub base_url: Option<String>,

    /// JSON widget config file (dataUrl, limit, showParent, ...)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum number of matches per query
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Render one flat "Results" list instead of grouping by parent
    #[arg(long)]
    pub flat: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one query and print the rendered results
    Search {
        /// Search query
        query: String,

        #[command(flatten)]
        data: DataArgs,

        /// Print the results container as HTML
        #[arg(long)]
        html: bool,

        /// Print the raw matches as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,
    },

    /// Summarize a search data artifact
    Inspect {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Read queries from stdin, one per line, and render each
    Interactive {
        #[command(flatten)]
        data: DataArgs,

        /// Print the results container as HTML
        #[arg(long)]
        html: bool,
    },
}
