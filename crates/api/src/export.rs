// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket manifest CSV export and import.
//!
//! The manifest is the box-office reconciliation record: one row per
//! generated ticket, in print order, with a fixed column set. Import
//! reads an exported manifest back by header name.

use crate::error::ApiError;
use csv::{ReaderBuilder, StringRecord, Trim, Writer};
use ticketgen_domain::TicketRecord;

/// Manifest columns, in their fixed order.
const CSV_HEADERS: [&str; 11] = [
    "ID",
    "Artist",
    "Date",
    "StartTime",
    "Venue",
    "Category",
    "Seat",
    "Area",
    "Row",
    "SeatNumber",
    "StaticText",
];

/// Exports ticket records as CSV text.
///
/// The header row is always present, even for an empty batch. Absent
/// optional fields are written as empty strings; values containing the
/// delimiter, quotes, or line breaks are quoted with internal quotes
/// doubled.
///
/// # Arguments
///
/// * `tickets` - The ticket records, in print order
///
/// # Errors
///
/// Returns `ApiError::CsvExport` if the writer fails.
pub fn export_tickets_csv(tickets: &[TicketRecord]) -> Result<String, ApiError> {
    let mut writer: Writer<Vec<u8>> = Writer::from_writer(Vec::new());

    writer.write_record(CSV_HEADERS).map_err(export_error)?;
    for ticket in tickets {
        writer
            .write_record([
                ticket.id.as_str(),
                ticket.artist.as_str(),
                ticket.date.as_str(),
                ticket.start_time.as_str(),
                ticket.venue.as_str(),
                ticket.category.as_str(),
                ticket.assignment.formatted_seat().unwrap_or(""),
                ticket.area.as_deref().unwrap_or(""),
                ticket.assignment.row().unwrap_or(""),
                ticket.assignment.seat_number().unwrap_or(""),
                ticket.static_text.as_str(),
            ])
            .map_err(export_error)?;
    }

    let bytes: Vec<u8> = writer.into_inner().map_err(|err| ApiError::CsvExport {
        message: err.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|err| ApiError::CsvExport {
        message: err.to_string(),
    })
}

fn export_error(err: csv::Error) -> ApiError {
    ApiError::CsvExport {
        message: err.to_string(),
    }
}

/// One row read back from an exported ticket manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedTicket {
    /// The ticket identifier.
    pub id: String,
    /// Artist or event name.
    pub artist: String,
    /// Event date display string.
    pub date: String,
    /// Start time display string.
    pub start_time: String,
    /// Venue name.
    pub venue: String,
    /// Seating category.
    pub category: String,
    /// Pre-joined seat display string.
    pub seat: Option<String>,
    /// Named section.
    pub area: Option<String>,
    /// Row label.
    pub row: Option<String>,
    /// Seat label.
    pub seat_number: Option<String>,
    /// Footer/legal text.
    pub static_text: String,
}

/// Imports ticket rows from manifest CSV text.
///
/// Columns are matched by header name, case-insensitively; unknown
/// columns are ignored and column order does not matter. Empty cells in
/// optional columns come back as absent.
///
/// # Arguments
///
/// * `text` - The manifest CSV text
///
/// # Errors
///
/// Returns `ApiError::CsvImport` if the text is not readable CSV or the
/// ID column is missing.
pub fn import_tickets_csv(text: &str) -> Result<Vec<ImportedTicket>, ApiError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(import_error)?
        .clone();
    let position = |name: &str| -> Option<usize> {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    };

    let id_index: usize = position("ID").ok_or_else(|| ApiError::CsvImport {
        message: String::from("Missing required header: ID"),
    })?;

    let mut tickets: Vec<ImportedTicket> = Vec::new();
    for result in reader.records() {
        let record: StringRecord = result.map_err(import_error)?;
        let field = |name: &str| -> String {
            position(name)
                .and_then(|index| record.get(index))
                .unwrap_or("")
                .to_string()
        };
        let optional = |name: &str| -> Option<String> {
            let value: String = field(name);
            if value.is_empty() { None } else { Some(value) }
        };

        tickets.push(ImportedTicket {
            id: record.get(id_index).unwrap_or("").to_string(),
            artist: field("Artist"),
            date: field("Date"),
            start_time: field("StartTime"),
            venue: field("Venue"),
            category: field("Category"),
            seat: optional("Seat"),
            area: optional("Area"),
            row: optional("Row"),
            seat_number: optional("SeatNumber"),
            static_text: field("StaticText"),
        });
    }

    Ok(tickets)
}

fn import_error(err: csv::Error) -> ApiError {
    ApiError::CsvImport {
        message: err.to_string(),
    }
}
