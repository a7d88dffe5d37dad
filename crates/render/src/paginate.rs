// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RenderError;
use crate::layout::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PageFonts, render_ticket_page};
use crate::qr::QrImage;
use printpdf::{BuiltinFont, Mm, PdfDocument, PdfLayerReference};
use std::collections::HashMap;
use std::io::BufWriter;
use ticketgen_domain::TicketRecord;
use tracing::warn;

/// Maximum number of ticket pages per generated document.
pub const MAX_TICKETS_PER_DOCUMENT: usize = 20;

/// One generated ticket PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDocument {
    bytes: Vec<u8>,
    page_count: usize,
}

impl TicketDocument {
    /// Returns the encoded PDF bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the document, returning the encoded PDF bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns the number of ticket pages in this document.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.page_count
    }
}

/// Partitions ticket records into documents of up to
/// [`MAX_TICKETS_PER_DOCUMENT`] pages each and renders them.
///
/// Records are grouped consecutively in input order; `ceil(N/20)`
/// documents are produced, one page per record, and no record spans two
/// documents. A ticket whose identifier has no QR image gets its page
/// rendered without the image (logged, never fatal).
///
/// # Arguments
///
/// * `records` - The ticket records, in print order
/// * `qr_images` - Rendered QR images keyed by ticket identifier
/// * `include_qr` - Whether pages should carry QR codes at all
///
/// # Errors
///
/// Returns `RenderError::DocumentEncoding` naming the group index if a
/// document fails to encode; other groups are unaffected by the failure.
pub fn paginate(
    records: &[TicketRecord],
    qr_images: &HashMap<String, QrImage>,
    include_qr: bool,
) -> Result<Vec<TicketDocument>, RenderError> {
    let mut documents: Vec<TicketDocument> = Vec::new();

    for (group_index, group) in records.chunks(MAX_TICKETS_PER_DOCUMENT).enumerate() {
        let document: TicketDocument = render_document(group, qr_images, include_qr)
            .map_err(|message| RenderError::DocumentEncoding {
                group: group_index,
                message,
            })?;
        documents.push(document);
    }

    Ok(documents)
}

/// Renders one group of tickets into a single PDF.
fn render_document(
    group: &[TicketRecord],
    qr_images: &HashMap<String, QrImage>,
    include_qr: bool,
) -> Result<TicketDocument, String> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Tickets",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Ticket",
    );

    let fonts: PageFonts = PageFonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|err| err.to_string())?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|err| err.to_string())?,
        oblique: doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(|err| err.to_string())?,
    };

    for (index, ticket) in group.iter().enumerate() {
        let layer: PdfLayerReference = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Ticket");
            doc.get_page(page).get_layer(layer)
        };

        let qr_image: Option<&QrImage> = if include_qr {
            let found: Option<&QrImage> = qr_images.get(&ticket.id);
            if found.is_none() {
                warn!(id = %ticket.id, "No QR image for ticket, rendering page without it");
            }
            found
        } else {
            None
        };

        render_ticket_page(&layer, &fonts, ticket, qr_image);
    }

    let page_count: usize = group.len();
    let mut buffer: BufWriter<Vec<u8>> = BufWriter::new(Vec::new());
    doc.save(&mut buffer).map_err(|err| err.to_string())?;
    let bytes: Vec<u8> = buffer.into_inner().map_err(|err| err.to_string())?;

    Ok(TicketDocument { bytes, page_count })
}
