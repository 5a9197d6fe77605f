//! Shared test utilities and fixtures.

#![allow(dead_code)]

use gdoc_search::{DocumentRecord, SearchWidget, StaticSource, WidgetConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// Re-export canonical test utilities from gdoc_search::testing
pub use gdoc_search::testing::{make_match, make_record, make_record_in, records_json};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small documentation site: two sections plus a top-level page.
pub fn docs_site() -> Vec<DocumentRecord> {
    vec![
        make_record_in(1, "Install", "setup steps for the toolkit", "Guides"),
        make_record_in(2, "Configuration", "setup options and defaults", "Guides"),
        make_record_in(3, "Client API", "setup a client connection", "API"),
        make_record_in(4, "Server API", "register services on a server", "API"),
        make_record(5, "Changelog", "release notes and setup changes"),
    ]
}

/// Widget over an in-memory artifact.
pub fn static_widget(records: &[DocumentRecord], show_parent: bool) -> SearchWidget<StaticSource> {
    let config = WidgetConfig {
        show_parent,
        ..WidgetConfig::default()
    };
    SearchWidget::new(config, StaticSource::new(records_json(records)))
}

/// (label, [(title, href)]) per rendered section, in document order.
pub fn rendered_sections(widget: &SearchWidget<StaticSource>) -> Vec<(String, Vec<(String, String)>)> {
    rendered_sections_of(widget.results())
}

pub fn rendered_sections_of(results: &gdoc_search::Element) -> Vec<(String, Vec<(String, String)>)> {
    results
        .children()
        .iter()
        .map(|section| {
            let label = section
                .children()
                .first()
                .and_then(|span| span.text())
                .unwrap_or_default()
                .to_string();
            let entries = section
                .anchors()
                .into_iter()
                .map(|a| {
                    (
                        a.text().unwrap_or_default().to_string(),
                        a.attribute("href").unwrap_or_default().to_string(),
                    )
                })
                .collect();
            (label, entries)
        })
        .collect()
}

// ============================================================================
// LOOPBACK HTTP
// ============================================================================

/// Serve `body` with `status` to every request on a loopback port.
///
/// Returns the base URL (`http://127.0.0.1:<port>`). The server task lives
/// as long as the test runtime.
pub async fn serve(status: u16, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let response = format!(
                    "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
