//! Color extraction from the HTML survey table.
//!
//! The survey page carries one table of rows shaped as
//! `<tr><td>day</td><td>RED, BLUE, GREEN</td></tr>`. Extraction scans the
//! `<tbody>` blocks with tolerant, case-insensitive regexes rather than a
//! strict HTML parser: attribute noise, odd whitespace, and markup nested
//! inside a cell must not break it. The second cell of each row is split on
//! commas and every fragment is normalized to an uppercase label.
//!
//! One known data-entry misspelling, `BLEW`, is corrected to `BLUE`.

use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;

lazy_static! {
    /// A `<tbody>...</tbody>` block, shortest match.
    static ref TBODY_BLOCK: Regex = Regex::new(r"(?is)<tbody[^>]*>(.*?)</tbody>").unwrap();
    /// A `<tr>...</tr>` block within a tbody.
    static ref TABLE_ROW: Regex = Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").unwrap();
    /// A `<td>...</td>` cell within a row.
    static ref TABLE_CELL: Regex = Regex::new(r"(?is)<td[^>]*>(.*?)</td>").unwrap();
    /// Any remaining tag inside a cell (e.g. `<span>`, `<br/>`).
    static ref INNER_TAG: Regex = Regex::new(r"(?s)<[^>]*>").unwrap();
}

/// Misspelling found in the recorded data.
const MISSPELLED_BLUE: &str = "BLEW";

/// Parse the color labels out of an HTML document on disk.
///
/// Returns the flat label sequence in document order. A document with no
/// `<tbody>` rows yields an empty vector; the caller decides how to report
/// that.
pub fn parse_colors<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<String>> {
    let html = fs::read_to_string(path.as_ref())?;
    Ok(parse_colors_from_str(&html))
}

/// Parse color labels from HTML text.
pub fn parse_colors_from_str(html: &str) -> Vec<String> {
    let mut labels = Vec::new();

    for tbody in TBODY_BLOCK.captures_iter(html) {
        for row in TABLE_ROW.captures_iter(&tbody[1]) {
            let cells: Vec<&str> = TABLE_CELL
                .captures_iter(&row[1])
                .map(|c| c.get(1).map_or("", |m| m.as_str()))
                .collect();

            // The color list lives in the second cell; shorter rows are
            // header or filler markup.
            let Some(color_cell) = cells.get(1) else {
                continue;
            };

            let text = cell_text(color_cell);
            labels.extend(text.split(',').filter_map(clean_label));
        }
    }

    labels
}

/// Strip nested tags and decode entities, leaving plain cell text.
fn cell_text(cell: &str) -> String {
    let stripped = INNER_TAG.replace_all(cell, " ");
    decode_entities(&stripped)
}

/// Decode the handful of entities that show up in the survey markup.
///
/// `&amp;` is decoded last so that double-escaped text stays escaped once.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Normalize one comma-separated fragment into a color label.
///
/// Trims, uppercases, and applies the misspelling fix. Empty fragments
/// (trailing commas, blank cells) yield `None`.
fn clean_label(fragment: &str) -> Option<String> {
    let label = fragment.trim().to_uppercase();
    if label.is_empty() {
        return None;
    }
    if label == MISSPELLED_BLUE {
        return Some("BLUE".to_string());
    }
    Some(label)
}
