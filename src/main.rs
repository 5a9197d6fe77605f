// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use gdoc_search::{
    AnySource, DataSource, IndexStatus, LazyIndex, QueryOutcome, SearchWidget, WidgetConfig,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{format_size, print_results, row, section_bot, section_top, status_label};
use cli::{Cli, Commands, DataArgs};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Search {
            query,
            data,
            html,
            json,
        } => run_search(&query, &data, html, json).await,
        Commands::Inspect { data } => run_inspect(&data).await,
        Commands::Interactive { data, html } => run_interactive(&data, html).await,
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| EnvFilter::new(format!("gdoc_search={}", default_level))),
        )
        .init();
}

/// Config file (or defaults) with command-line overrides applied.
fn widget_config(args: &DataArgs) -> Result<WidgetConfig, String> {
    let mut config = match &args.config {
        Some(path) => WidgetConfig::load(path).map_err(|e| e.to_string())?,
        None => WidgetConfig::default(),
    };
    if let Some(data) = &args.data {
        config.data_url = data.clone();
    }
    if let Some(limit) = args.limit {
        config.limit = limit;
    }
    if args.flat {
        config.show_parent = false;
    }
    Ok(config)
}

fn resolve_source(config: &WidgetConfig, args: &DataArgs) -> AnySource {
    AnySource::resolve(&config.data_url, args.base_url.as_deref())
}

/// Turn a settled loader status into the CLI's error convention.
fn require_ready(status: &IndexStatus, location: &str) -> Result<(), String> {
    match status {
        IndexStatus::Ready(_) => Ok(()),
        IndexStatus::Failed(err) => Err(format!("search data unavailable: {}", err)),
        other => Err(format!(
            "search data at {} is {}",
            location,
            other.as_str()
        )),
    }
}

async fn run_search(query: &str, args: &DataArgs, html: bool, json: bool) -> Result<(), String> {
    let config = widget_config(args)?;
    let source = resolve_source(&config, args);
    let location = source.location();
    let mut widget = SearchWidget::new(config, source);

    widget.on_focus();
    let status = widget.index().wait_settled().await;
    require_ready(&status, &location)?;

    if json {
        let handle = widget.index().handle().ok_or("search index vanished")?;
        let matches = handle.search(query, widget.config().limit);
        let out = serde_json::to_string_pretty(&matches).map_err(|e| e.to_string())?;
        println!("{}", out);
        return Ok(());
    }

    let outcome = widget.on_query_change(query);
    print_outcome(&widget, outcome, html);
    Ok(())
}

async fn run_inspect(args: &DataArgs) -> Result<(), String> {
    let config = widget_config(args)?;
    let source = resolve_source(&config, args);
    let location = source.location();
    let lazy = LazyIndex::new(source);

    let status = lazy.ensure_loaded().await;
    require_ready(&status, &location)?;
    let handle = lazy.handle().ok_or("search index vanished")?;
    let artifact = handle.artifact();
    let index = handle.index();

    section_top("Search data");
    row(&format!("  location   {}", artifact.location));
    row(&format!("  status     {}", status_label(status.as_str())));
    row(&format!("  size       {}", format_size(artifact.bytes)));
    row(&format!("  crc32      {:08x}", artifact.crc32));
    row(&format!(
        "  records    {} ({} unique ids, {} skipped)",
        artifact.records,
        index.len(),
        artifact.skipped
    ));
    row(&format!("  sections   {}", index.parent_count()));
    row(&format!("  terms      {}", index.vocabulary_len()));
    section_bot();
    Ok(())
}

async fn run_interactive(args: &DataArgs, html: bool) -> Result<(), String> {
    let config = widget_config(args)?;
    let source = resolve_source(&config, args);
    let mut widget = SearchWidget::new(config, source);

    // Focus first, like a user clicking into the box before typing.
    widget.on_focus();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.map_err(|e| e.to_string())? {
        let outcome = widget.on_query_change_when_ready(line.trim_end()).await;
        if let QueryOutcome::NotReady(state) = outcome {
            return Err(format!("search index {}", state));
        }
        print_outcome(&widget, outcome, html);
    }
    Ok(())
}

fn print_outcome<S: DataSource>(widget: &SearchWidget<S>, outcome: QueryOutcome, html: bool) {
    match outcome {
        QueryOutcome::Hits(count) => {
            if html {
                println!("{}", widget.results().to_html());
            } else {
                print_results(widget.results());
            }
            eprintln!("✅ {} hit{}", count, if count == 1 { "" } else { "s" });
        }
        QueryOutcome::NoHits => eprintln!("⚠️  no hits for {:?}", widget.query()),
        QueryOutcome::Empty => eprintln!("⚠️  empty query"),
        QueryOutcome::NotReady(state) => eprintln!("⚠️  search index {}", state),
    }
}
