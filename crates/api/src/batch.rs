// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The batch pipeline: seats in, documents and manifest out.

use crate::error::ApiError;
use crate::export::export_tickets_csv;
use crate::ids::allocate_ids;
use std::collections::HashMap;
use ticketgen::assemble_tickets;
use ticketgen_domain::{
    DomainError, SeatDescriptor, TicketConfig, TicketRecord, requires_default_category,
    validate_config,
};
use ticketgen_render::{QrImage, TicketDocument, paginate, render_qr_map};
use tracing::info;

/// The complete output of one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketBatch {
    /// The assembled ticket records, in print order.
    pub tickets: Vec<TicketRecord>,
    /// The generated ticket PDFs, up to 20 pages each.
    pub documents: Vec<TicketDocument>,
    /// The CSV manifest for box-office reconciliation.
    pub manifest_csv: String,
}

/// Builds the seat list for a manual batch.
///
/// All `count` seats are identical: line 1 and line 2 are carried on
/// every ticket, and the event-level default category applies.
#[must_use]
pub fn manual_seating(count: usize, line1: &str, line2: &str) -> Vec<SeatDescriptor> {
    (0..count)
        .map(|_| SeatDescriptor::manual(line1, line2))
        .collect()
}

/// Runs the full ticket pipeline over a seat list.
///
/// Identifier allocation, assembly, QR rendering, pagination, and the
/// manifest export happen in that order, all in seat order. The result
/// is a pure function of the inputs: nothing is retained across calls,
/// and an abandoned call leaves no partial state behind.
///
/// # Arguments
///
/// * `seats` - The seat descriptors, in input order
/// * `config` - The batch configuration
///
/// # Errors
///
/// Fatal, before any output is produced:
/// * `ApiError::InvalidConfiguration` for an incomplete configuration,
///   including a missing default category when some seat needs one
/// * `ApiError::EmptySeating` for an empty seat list
///
/// During generation:
/// * `ApiError::Render` if QR generation or a document encoding fails
/// * `ApiError::CsvExport` if the manifest cannot be written
pub fn generate_batch(
    seats: &[SeatDescriptor],
    config: &TicketConfig,
) -> Result<TicketBatch, ApiError> {
    validate_config(config)?;
    if seats.is_empty() {
        return Err(ApiError::EmptySeating);
    }
    if requires_default_category(seats) && config.event.category.trim().is_empty() {
        return Err(ApiError::InvalidConfiguration(
            DomainError::MissingEventField { field: "category" },
        ));
    }

    let ids: Vec<String> = allocate_ids(seats.len());
    let tickets: Vec<TicketRecord> = assemble_tickets(seats, ids, config)?;

    let qr_images: HashMap<String, QrImage> = if config.include_qr_code {
        let ticket_ids: Vec<String> = tickets.iter().map(|ticket| ticket.id.clone()).collect();
        render_qr_map(&ticket_ids)?
    } else {
        HashMap::new()
    };

    let documents: Vec<TicketDocument> = paginate(&tickets, &qr_images, config.include_qr_code)?;
    let manifest_csv: String = export_tickets_csv(&tickets)?;

    info!(
        tickets = tickets.len(),
        documents = documents.len(),
        "Generated ticket batch"
    );

    Ok(TicketBatch {
        tickets,
        documents,
        manifest_csv,
    })
}
