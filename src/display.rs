//! Render device records as a text table for the log
//!
//! Columns are the union of field names across the records in the order first seen; records missing a field show `-`. Column widths use display width so wide characters in device names line up.
use colored::*;
use itertools::Itertools;
use unicode_width::UnicodeWidthStr;

use crate::types::DeviceRecord;

/// Value shown for a field a record does not have
const MISSING: &str = "-";

/// Settings used when rendering tables
#[derive(Debug, Clone)]
pub struct PrintSettings {
    /// Do not pad columns to equal width
    pub no_padding: bool,
    /// Colour headings and known columns
    pub colours: bool,
}

impl Default for PrintSettings {
    fn default() -> Self {
        PrintSettings {
            no_padding: false,
            colours: true,
        }
    }
}

/// Colour a cell based on the column heading, loosely typed on the names the listing tools use
fn colour(heading: &str, s: &str) -> ColoredString {
    match heading {
        "Device" | "FriendlyName" => s.bold().blue(),
        "Class" => s.purple(),
        "Status" => match s.trim() {
            "OK" => s.green(),
            "Unknown" => s.yellow(),
            _ => s.red(),
        },
        "InstanceId" => s.yellow(),
        _ => s.normal(),
    }
}

/// Column headings: union of field names in first seen order
pub fn headings(records: &[DeviceRecord]) -> Vec<&str> {
    records.iter().flat_map(|r| r.names()).unique().collect()
}

/// Widths needed for each heading
fn padding_required(headings: &[&str], records: &[DeviceRecord]) -> Vec<usize> {
    headings
        .iter()
        .map(|h| {
            records
                .iter()
                .map(|r| r.get(h).unwrap_or(MISSING).width())
                .chain(std::iter::once(h.width()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Pad `s` to `width` display columns; no-op if already wider
fn pad(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn render_row<'a, I>(
    cells: I,
    headings: &[&str],
    widths: &[usize],
    settings: &PrintSettings,
    heading_row: bool,
) -> String
where
    I: Iterator<Item = &'a str>,
{
    let rendered = cells
        .zip(headings.iter())
        .enumerate()
        .map(|(i, (cell, heading))| {
            let last = i + 1 == headings.len();
            let text = if settings.no_padding || last {
                cell.to_string()
            } else {
                pad(cell, widths[i])
            };
            if !settings.colours {
                text
            } else if heading_row {
                text.bold().to_string()
            } else {
                colour(heading, &text).to_string()
            }
        })
        .join(" ");

    // records keep listing lines verbatim; trailing spaces are trimmed for display only
    rendered.trim_end().to_string()
}

/// Render `records` as table lines, heading line first
///
/// Empty if there are no records.
pub fn render_lines(records: &[DeviceRecord], settings: &PrintSettings) -> Vec<String> {
    if records.is_empty() {
        return Vec::new();
    }

    let headings = headings(records);
    let widths = if settings.no_padding {
        Default::default()
    } else {
        padding_required(&headings, records)
    };
    log::trace!("Table headings {:?}, padding {:?}", headings, widths);

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(render_row(headings.iter().copied(), &headings, &widths, settings, true));
    for record in records {
        let cells = headings.iter().map(|h| record.get(h).unwrap_or(MISSING));
        lines.push(render_row(cells, &headings, &widths, settings, false));
    }

    lines
}

/// Render `records` as a single newline separated table
pub fn render_table(records: &[DeviceRecord], settings: &PrintSettings) -> String {
    render_lines(records, settings).join("\n")
}
