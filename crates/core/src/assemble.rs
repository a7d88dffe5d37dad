// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use ticketgen_domain::{SeatAssignment, SeatDescriptor, TicketConfig, TicketRecord};

/// Joins seat descriptors, identifiers, and the event configuration into
/// print-ready ticket records.
///
/// Identifiers pair with descriptors positionally, one per seat, in input
/// order. Event-level fields and the static text are copied verbatim into
/// every record. A seat's own category wins over the event-level default
/// when non-empty.
///
/// Manual seats (status "manual") repurpose the seat-number field as a
/// freeform second ticket line; their row/seat data is cleared. All other
/// seats get the pre-joined seat display string plus their raw fields.
///
/// # Arguments
///
/// * `seats` - The seat descriptors, in input order
/// * `ids` - One unique identifier per seat, in the same order
/// * `config` - The batch configuration
///
/// # Errors
///
/// Returns `CoreError::TicketIdMismatch` if the identifier count does not
/// match the seat count. Nothing is assembled in that case.
pub fn assemble_tickets(
    seats: &[SeatDescriptor],
    ids: Vec<String>,
    config: &TicketConfig,
) -> Result<Vec<TicketRecord>, CoreError> {
    if ids.len() != seats.len() {
        return Err(CoreError::TicketIdMismatch {
            seats: seats.len(),
            ids: ids.len(),
        });
    }

    let records: Vec<TicketRecord> = seats
        .iter()
        .zip(ids)
        .map(|(seat, id)| {
            let category: String = if seat.category().is_empty() {
                config.event.category.clone()
            } else {
                seat.category().to_string()
            };

            let assignment: SeatAssignment = if seat.is_manual() {
                SeatAssignment::Manual {
                    custom_line: seat.seat_number().map(String::from),
                }
            } else {
                SeatAssignment::Parsed {
                    formatted_seat: seat.formatted_seat(),
                    row: seat.row().map(String::from),
                    seat_number: seat.seat_number().map(String::from),
                }
            };

            TicketRecord {
                id,
                artist: config.event.artist.clone(),
                date: config.event.date.clone(),
                start_time: config.event.start_time.clone(),
                venue: config.event.venue.clone(),
                category,
                area: seat.area().map(String::from),
                assignment,
                static_text: config.static_text.clone(),
            }
        })
        .collect();

    Ok(records)
}
