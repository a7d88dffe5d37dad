// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-ticket page layout.
//!
//! A ticket page is a fixed vertical stack: the planned text lines, an
//! optional QR code, and the word-wrapped footer. Planning is separated
//! from drawing: [`plan_lines`] produces the ordered line list as plain
//! data, and the renderer folds it top-down with a running cursor.

use crate::qr::{QrImage, embed_qr_image};
use printpdf::{IndirectFontRef, Mm, PdfLayerReference};
use ticketgen_domain::TicketRecord;

/// Ticket page width (A7 portrait).
pub(crate) const PAGE_WIDTH_MM: f32 = 74.0;
/// Ticket page height (A7 portrait).
pub(crate) const PAGE_HEIGHT_MM: f32 = 105.0;

/// Left margin for text and the QR code.
const TEXT_MARGIN_MM: f32 = 7.0;
/// Distance from the page top to the first baseline.
const FIRST_BASELINE_MM: f32 = 18.5;
/// Vertical pitch between body lines.
const LINE_PITCH_MM: f32 = 5.6;
/// Rendered QR code edge length.
const QR_SIZE_MM: f32 = 21.0;
/// Gap between the QR code and the footer.
const FOOTER_GAP_MM: f32 = 3.5;
/// Vertical pitch between footer lines.
const FOOTER_PITCH_MM: f32 = 3.9;

const ARTIST_FONT_SIZE: f32 = 12.0;
const ARTIST_FONT_SIZE_REDUCED: f32 = 10.0;
/// Artist names longer than this drop to the reduced size.
const ARTIST_LENGTH_THRESHOLD: usize = 21;
const BODY_FONT_SIZE: f32 = 10.0;
const FOOTER_FONT_SIZE: f32 = 8.0;

/// Fixed separator between date and venue on their shared line.
const DATE_VENUE_SEPARATOR: &str = "     ";

/// Footer lines wrap at this many characters, which fills the printable
/// width at the footer size in Helvetica.
const FOOTER_WRAP_CHARS: usize = 42;

/// Which face a planned line uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    /// Helvetica.
    Regular,
    /// Helvetica-Bold.
    Bold,
}

/// One planned body line of a ticket page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedLine {
    /// The text to draw.
    pub text: String,
    /// Font size in points.
    pub size: f32,
    /// Font face.
    pub style: FontStyle,
}

/// The embedded fonts a document's pages draw with.
pub(crate) struct PageFonts {
    pub regular: IndirectFontRef,
    pub bold: IndirectFontRef,
    pub oblique: IndirectFontRef,
}

/// Plans the body lines of one ticket page, top to bottom.
///
/// Absent optional fields produce no line at all; the stack closes up
/// rather than leaving gaps. The custom line wins over row/seat data
/// whenever present (the two cannot coexist on a record).
#[must_use]
pub fn plan_lines(ticket: &TicketRecord) -> Vec<PlannedLine> {
    let artist_size: f32 = if ticket.artist.chars().count() > ARTIST_LENGTH_THRESHOLD {
        ARTIST_FONT_SIZE_REDUCED
    } else {
        ARTIST_FONT_SIZE
    };

    let mut lines: Vec<PlannedLine> = vec![
        PlannedLine {
            text: ticket.artist.clone(),
            size: artist_size,
            style: FontStyle::Bold,
        },
        PlannedLine {
            text: format!("{}{DATE_VENUE_SEPARATOR}{}", ticket.date, ticket.venue),
            size: BODY_FONT_SIZE,
            style: FontStyle::Regular,
        },
        PlannedLine {
            text: format!("{} Uhr", ticket.start_time),
            size: BODY_FONT_SIZE,
            style: FontStyle::Regular,
        },
        PlannedLine {
            text: ticket.category.clone(),
            size: BODY_FONT_SIZE,
            style: FontStyle::Regular,
        },
    ];

    if let Some(area) = &ticket.area {
        lines.push(PlannedLine {
            text: area.trim().to_string(),
            size: BODY_FONT_SIZE,
            style: FontStyle::Regular,
        });
    }

    if let Some(seat_line) = seat_line(ticket) {
        lines.push(PlannedLine {
            text: seat_line,
            size: BODY_FONT_SIZE,
            style: FontStyle::Regular,
        });
    }

    lines
}

/// Composes the row/seat line, or the manual custom line.
fn seat_line(ticket: &TicketRecord) -> Option<String> {
    if let Some(custom) = ticket.assignment.custom_line() {
        return Some(String::from(custom));
    }

    let mut parts: Vec<String> = Vec::new();
    if let Some(row) = ticket.assignment.row() {
        parts.push(format!("Reihe {row}"));
    }
    if let Some(seat) = ticket.assignment.seat_number() {
        parts.push(format!("Platz {seat}"));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Word-wraps text to lines of at most `max_chars` characters.
///
/// A single word longer than the limit stays whole on its own line.
#[must_use]
pub(crate) fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current: String = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty()
            && current.chars().count() + 1 + word.chars().count() > max_chars
        {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Draws one ticket onto a page layer.
///
/// The cursor starts at the first baseline and every drawn element moves
/// it down by its own pitch; nothing reserves space for absent fields.
pub(crate) fn render_ticket_page(
    layer: &PdfLayerReference,
    fonts: &PageFonts,
    ticket: &TicketRecord,
    qr_image: Option<&QrImage>,
) {
    let mut cursor_mm: f32 = PAGE_HEIGHT_MM - FIRST_BASELINE_MM;

    for line in plan_lines(ticket) {
        let font: &IndirectFontRef = match line.style {
            FontStyle::Regular => &fonts.regular,
            FontStyle::Bold => &fonts.bold,
        };
        layer.use_text(line.text, line.size, Mm(TEXT_MARGIN_MM), Mm(cursor_mm), font);
        cursor_mm -= LINE_PITCH_MM;
    }

    if let Some(qr) = qr_image {
        let qr_bottom_mm: f32 = cursor_mm - QR_SIZE_MM;
        embed_qr_image(layer, qr, TEXT_MARGIN_MM, qr_bottom_mm, QR_SIZE_MM);
        cursor_mm = qr_bottom_mm - FOOTER_GAP_MM;
    }

    for footer_line in wrap_words(&ticket.static_text, FOOTER_WRAP_CHARS) {
        layer.use_text(
            footer_line,
            FOOTER_FONT_SIZE,
            Mm(TEXT_MARGIN_MM),
            Mm(cursor_mm),
            &fonts.oblique,
        );
        cursor_mm -= FOOTER_PITCH_MM;
    }
}
