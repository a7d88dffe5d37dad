// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seating-export parsing.
//!
//! The export is a header-less, comma-separated, double-quoted record
//! format with inconsistent whitespace and embedded aggregate-count
//! records ("Stapelplätze"). Parsing is best-effort: malformed records
//! are skipped, never fatal, and the reason is kept for diagnostics.

use csv::{ReaderBuilder, StringRecord, Trim};
use once_cell::sync::Lazy;
use regex::Regex;
use ticketgen_domain::SeatDescriptor;
use tracing::debug;

#[allow(clippy::expect_used)]
static ROW_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Reihe\s+(\d+)").expect("row pattern is valid"));

#[allow(clippy::expect_used)]
static SEAT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Platz\s+(\d+)").expect("seat pattern is valid"));

#[allow(clippy::expect_used)]
static AGGREGATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\((\d+)\s+Stapelplätze\)").expect("aggregate pattern is valid"));

/// Why a record was rejected during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    /// The record has fewer than the three required fields.
    TooFewFields,
    /// Description, category field, or status is empty after trimming.
    EmptyEssentialField,
}

/// Parses seating data from raw export text.
///
/// Each surviving record yields one seat descriptor, except aggregate
/// records ("(N Stapelplätze)"), which yield N anonymous descriptors.
/// Input order is preserved. Malformed records are skipped silently;
/// blank or whitespace-only input yields an empty sequence.
///
/// # Arguments
///
/// * `raw` - The decoded export text
#[must_use]
pub fn parse_seating(raw: &str) -> Vec<SeatDescriptor> {
    let normalized: String = normalize(raw);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(normalized.as_bytes());

    let mut seats: Vec<SeatDescriptor> = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record: StringRecord = match result {
            Ok(record) => record,
            Err(err) => {
                debug!(line = index + 1, %err, "Skipping unreadable record");
                continue;
            }
        };

        match parse_record(&record) {
            Ok(mut parsed) => seats.append(&mut parsed),
            Err(reason) => {
                debug!(line = index + 1, ?reason, "Skipping malformed record");
            }
        }
    }

    seats
}

/// Removes NUL bytes and normalizes line endings to line feeds.
fn normalize(raw: &str) -> String {
    raw.replace('\u{0}', "")
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

/// Parses one record into its seat descriptors.
fn parse_record(record: &StringRecord) -> Result<Vec<SeatDescriptor>, SkipReason> {
    if record.len() < 3 {
        return Err(SkipReason::TooFewFields);
    }

    let description: &str = record.get(0).unwrap_or("");
    let category_field: &str = record.get(1).unwrap_or("");
    let status: &str = record.get(2).unwrap_or("");

    if description.is_empty() || category_field.is_empty() || status.is_empty() {
        return Err(SkipReason::EmptyEssentialField);
    }

    let category: String = extract_category(category_field);

    if let Some(count) = aggregate_count(description) {
        let seats: Vec<SeatDescriptor> = (0..count)
            .map(|_| {
                SeatDescriptor::new(None, None, None, category.clone(), String::from(status))
            })
            .collect();
        return Ok(seats);
    }

    let (area, row, seat_number) = decompose_description(description);
    Ok(vec![SeatDescriptor::new(
        area,
        row,
        seat_number,
        category,
        String::from(status),
    )])
}

/// Extracts the aggregate seat count from a "(N Stapelplätze)" description.
///
/// Returns `None` when the pattern does not match or the count does not
/// fit a `usize`; such records fall through to normal decomposition.
fn aggregate_count(description: &str) -> Option<usize> {
    AGGREGATE_PATTERN
        .captures(description)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<usize>().ok())
}

/// Extracts area, row, and seat number from a description.
///
/// Example: " Tribüne K  Reihe 8   Platz 1" → ("Tribüne K", "8", "1").
/// The area is everything before the Reihe match, with whitespace runs
/// collapsed; without a Reihe match there is no area.
fn decompose_description(description: &str) -> (Option<String>, Option<String>, Option<String>) {
    let trimmed: &str = description.trim();

    // A Stapelplätze mention without a parseable count stands for anonymous
    // stacked seats; Reihe/Platz matching does not apply to it.
    if trimmed.contains("Stapelplätze") {
        return (None, None, None);
    }

    let mut area: Option<String> = None;
    let mut row: Option<String> = None;

    if let Some(caps) = ROW_PATTERN.captures(trimmed) {
        row = caps.get(1).map(|m| m.as_str().to_string());
        if let Some(full) = caps.get(0) {
            let area_part: &str = &trimmed[..full.start()];
            let collapsed: String = area_part.split_whitespace().collect::<Vec<&str>>().join(" ");
            if !collapsed.is_empty() {
                area = Some(collapsed);
            }
        }
    }

    let seat_number: Option<String> = SEAT_PATTERN
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    (area, row, seat_number)
}

/// Extracts the category name from a category field.
///
/// Example: "1:Sitzplatz" → "Sitzplatz". A field without a colon is used
/// whole.
fn extract_category(category_field: &str) -> String {
    category_field.find(':').map_or_else(
        || category_field.trim().to_string(),
        |index| category_field[index + 1..].trim().to_string(),
    )
}
