// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_tickets, empty_qr_map};
use crate::{RenderError, TicketDocument, compose_layout_test, paginate};
use lopdf::{Document, Object};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::io::BufWriter;

/// An A7 ticket page in PDF points.
const A7_WIDTH_PT: f32 = 209.76;
const A7_HEIGHT_PT: f32 = 297.64;

/// Builds a one-page PDF of the given size, standing in for a print-shop
/// template.
fn create_template(width_mm: f32, height_mm: f32) -> Vec<u8> {
    let (doc, page, layer) = PdfDocument::new("Template", Mm(width_mm), Mm(height_mm), "Template");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .expect("builtin font embeds");
    doc.get_page(page).get_layer(layer).use_text(
        "TEMPLATE",
        24.0,
        Mm(10.0),
        Mm(height_mm / 2.0),
        &font,
    );
    let mut buffer = BufWriter::new(Vec::new());
    doc.save(&mut buffer).expect("template saves");
    buffer.into_inner().expect("buffer flushes")
}

fn create_ticket_pdf() -> Vec<u8> {
    let tickets = create_test_tickets(1);
    let documents: Vec<TicketDocument> =
        paginate(&tickets, &empty_qr_map(), false).expect("batch renders");
    documents.into_iter().next().expect("one document").into_bytes()
}

/// Reads the first page's MediaBox dimensions from an encoded PDF.
fn first_page_size(bytes: &[u8]) -> (f32, f32) {
    let doc: Document = Document::load_mem(bytes).expect("output parses");
    let page_id = *doc.get_pages().values().next().expect("one page");
    let page = doc
        .get_object(page_id)
        .and_then(Object::as_dict)
        .expect("page dictionary");
    let rect = page
        .get(b"MediaBox")
        .and_then(Object::as_array)
        .expect("MediaBox");
    let number = |object: &Object| -> f32 {
        match object {
            Object::Integer(value) => *value as f32,
            Object::Real(value) => *value,
            _ => panic!("non-numeric MediaBox entry"),
        }
    };
    (
        number(&rect[2]) - number(&rect[0]),
        number(&rect[3]) - number(&rect[1]),
    )
}

#[test]
fn test_output_is_a_single_page_pdf() {
    let ticket_pdf: Vec<u8> = create_ticket_pdf();
    let template_pdf: Vec<u8> = create_template(210.0, 297.0);

    let overlay: Vec<u8> =
        compose_layout_test(&ticket_pdf, &template_pdf).expect("overlay composes");

    let doc: Document = Document::load_mem(&overlay).expect("output parses");
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn test_ticket_dimensions_govern_the_output_page() {
    let ticket_pdf: Vec<u8> = create_ticket_pdf();
    // A4 template, much larger than the A7 ticket.
    let template_pdf: Vec<u8> = create_template(210.0, 297.0);

    let overlay: Vec<u8> =
        compose_layout_test(&ticket_pdf, &template_pdf).expect("overlay composes");

    let (width, height) = first_page_size(&overlay);
    assert!((width - A7_WIDTH_PT).abs() < 0.5);
    assert!((height - A7_HEIGHT_PT).abs() < 0.5);
}

#[test]
fn test_smaller_template_also_composes() {
    let ticket_pdf: Vec<u8> = create_ticket_pdf();
    let template_pdf: Vec<u8> = create_template(50.0, 60.0);

    let overlay: Vec<u8> =
        compose_layout_test(&ticket_pdf, &template_pdf).expect("overlay composes");

    let (width, height) = first_page_size(&overlay);
    assert!((width - A7_WIDTH_PT).abs() < 0.5);
    assert!((height - A7_HEIGHT_PT).abs() < 0.5);
}

#[test]
fn test_unreadable_template_is_reported() {
    let ticket_pdf: Vec<u8> = create_ticket_pdf();
    let result: Result<Vec<u8>, RenderError> =
        compose_layout_test(&ticket_pdf, b"not a pdf at all");

    assert!(matches!(
        result,
        Err(RenderError::DocumentRead {
            which: "template",
            ..
        })
    ));
}

#[test]
fn test_unreadable_ticket_is_reported() {
    let template_pdf: Vec<u8> = create_template(210.0, 297.0);
    let result: Result<Vec<u8>, RenderError> =
        compose_layout_test(b"not a pdf at all", &template_pdf);

    assert!(matches!(
        result,
        Err(RenderError::DocumentRead {
            which: "ticket",
            ..
        })
    ));
}
