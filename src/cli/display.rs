// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the gdoc-search CLI.
//!
//! Two palettes: OneDark and One Light, picked from `GDOC_THEME` or the
//! terminal's `COLORFGBG`. Color is off for `NO_COLOR` and when stdout
//! isn't a TTY, so piped output stays plain.

use gdoc_search::{Element, ENTRY_CLASS};
use std::sync::OnceLock;

/// Inner width of result boxes, borders excluded.
pub const BOX_WIDTH: usize = 72;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Error,
    Pending,
    Link,
    Heading,
    Muted,
}

struct Palette {
    ok: (u8, u8, u8),
    error: (u8, u8, u8),
    pending: (u8, u8, u8),
    link: (u8, u8, u8),
    heading: (u8, u8, u8),
    muted: (u8, u8, u8),
}

const ONE_DARK: Palette = Palette {
    ok: (152, 195, 121),
    error: (224, 108, 117),
    pending: (229, 192, 123),
    link: (97, 175, 239),
    heading: (86, 182, 194),
    muted: (92, 99, 112),
};

const ONE_LIGHT: Palette = Palette {
    ok: (80, 161, 79),
    error: (228, 86, 73),
    pending: (193, 132, 1),
    link: (64, 120, 242),
    heading: (1, 132, 188),
    muted: (160, 161, 167),
};

impl Palette {
    fn rgb(&self, tone: Tone) -> (u8, u8, u8) {
        match tone {
            Tone::Ok => self.ok,
            Tone::Error => self.error,
            Tone::Pending => self.pending,
            Tone::Link => self.link,
            Tone::Heading => self.heading,
            Tone::Muted => self.muted,
        }
    }
}

/// Light background? `GDOC_THEME=light|dark` wins, then `COLORFGBG` ("fg;bg").
fn light_background(theme: Option<&str>, colorfgbg: Option<&str>) -> bool {
    match theme.map(str::to_ascii_lowercase).as_deref() {
        Some("light" | "l") => return true,
        Some("dark" | "d") => return false,
        _ => {}
    }
    colorfgbg
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.parse::<u8>().ok())
        .is_some_and(|bg| bg >= 7 && bg != 8)
}

fn palette() -> &'static Palette {
    static LIGHT: OnceLock<bool> = OnceLock::new();
    let light = *LIGHT.get_or_init(|| {
        light_background(
            std::env::var("GDOC_THEME").ok().as_deref(),
            std::env::var("COLORFGBG").ok().as_deref(),
        )
    });
    if light {
        &ONE_LIGHT
    } else {
        &ONE_DARK
    }
}

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn ansi(tone: Tone) -> String {
    let (r, g, b) = palette().rgb(tone);
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// `text` in `tone`, optionally bold. Plain when colors are off.
pub fn paint(tone: Tone, bold: bool, text: &str) -> String {
    if !colors_enabled() {
        return text.to_string();
    }
    format!("{}{}{}{}", if bold { BOLD } else { "" }, ansi(tone), text, RESET)
}

/// Printed width: ANSI escapes don't count.
pub fn visible_len(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    match bytes {
        0..=1023 => format!("{} B", bytes),
        1024..=1_048_575 => format!("{:.1} KB", b / KB),
        _ => format!("{:.1} MB", b / KB / KB),
    }
}

fn frame(piece: &str) -> String {
    if colors_enabled() {
        format!("{}{}{}", ansi(Tone::Muted), piece, RESET)
    } else {
        piece.to_string()
    }
}

/// `│ content │`
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", frame("│"), content, " ".repeat(pad), frame("│"));
}

/// `┌─ label ─────┐`
pub fn section_top(label: &str) {
    let head = format!("─ {} ", paint(Tone::Heading, true, label));
    let fill = BOX_WIDTH.saturating_sub(visible_len(&head));
    println!("{}{}{}", frame("┌"), head, frame(&format!("{}┐", "─".repeat(fill))));
}

/// `└─────────────┘`
pub fn section_bot() {
    println!("{}", frame(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// Loader status word, colored by outcome.
pub fn status_label(status: &str) -> String {
    match status {
        "ready" => paint(Tone::Ok, true, status),
        "failed" => paint(Tone::Error, true, status),
        "loading" => paint(Tone::Pending, false, status),
        _ => paint(Tone::Muted, false, status),
    }
}

/// Print a rendered results container, one box per section.
///
/// ```text
/// ┌─ Guides ──────────┐
/// │  Install  /install│
/// └───────────────────┘
/// ```
pub fn print_results(results: &Element) {
    if results.children().is_empty() {
        let text = "no results";
        if colors_enabled() {
            println!("{}{}{}", DIM, text, RESET);
        } else {
            println!("{}", text);
        }
        return;
    }
    for section in results.children() {
        let label = section
            .children()
            .first()
            .and_then(Element::text)
            .unwrap_or_default();
        section_top(label);
        for anchor in section
            .anchors()
            .into_iter()
            .filter(|a| a.has_class(ENTRY_CLASS))
        {
            row(&format!(
                "  {}  {}",
                paint(Tone::Link, true, anchor.text().unwrap_or_default()),
                paint(Tone::Muted, false, anchor.attribute("href").unwrap_or_default())
            ));
        }
        section_bot();
    }
}
