// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Template overlay composition.
//!
//! Superimposes the first page of a generated ticket PDF on the first
//! page of an externally supplied template PDF, for print-alignment
//! checking. The ticket's page dimensions govern the output page; the
//! template is drawn as a top-anchored, unscaled backdrop and the ticket
//! at full scale on top of it. Both pages are imported as Form XObjects
//! with their resource graphs deep-copied into the output document.

use crate::error::RenderError;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::collections::BTreeMap;

/// Composes the layout-test PDF from a ticket document and a template.
///
/// Only each document's first page is consulted. The output is a
/// single-page PDF sized to the ticket page; it is a calibration
/// artifact, never a deliverable ticket.
///
/// # Arguments
///
/// * `ticket_pdf` - An encoded ticket document
/// * `template_pdf` - The encoded template document
///
/// # Errors
///
/// Returns `RenderError::DocumentRead` if an input cannot be parsed,
/// `RenderError::EmptyDocument` if an input has no pages, and
/// `RenderError::OverlayComposition` if the output cannot be assembled.
pub fn compose_layout_test(
    ticket_pdf: &[u8],
    template_pdf: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let ticket: Document =
        Document::load_mem(ticket_pdf).map_err(|err| RenderError::DocumentRead {
            which: "ticket",
            message: err.to_string(),
        })?;
    let template: Document =
        Document::load_mem(template_pdf).map_err(|err| RenderError::DocumentRead {
            which: "template",
            message: err.to_string(),
        })?;

    let ticket_page: ObjectId = first_page(&ticket, "ticket")?;
    let template_page: ObjectId = first_page(&template, "template")?;

    let (ticket_width, ticket_height) = page_size(&ticket, ticket_page).map_err(compose_error)?;
    let (_, template_height) = page_size(&template, template_page).map_err(compose_error)?;

    let mut out: Document = Document::with_version("1.5");

    let template_xobject: ObjectId =
        import_page_xobject(&template, template_page, &mut out).map_err(compose_error)?;
    let ticket_xobject: ObjectId =
        import_page_xobject(&ticket, ticket_page, &mut out).map_err(compose_error)?;

    // Top edges align: shift the template by the height difference. The
    // ticket draws at the origin, undistorted, over the backdrop.
    let template_offset: f32 = ticket_height - template_height;
    let content: String = format!(
        "q\n1 0 0 1 0 {template_offset:.2} cm\n/Tpl Do\nQ\nq\n/Tkt Do\nQ\n"
    );
    let content_id: ObjectId = out.add_object(Object::Stream(Stream::new(
        Dictionary::new(),
        content.into_bytes(),
    )));

    let resources: Dictionary = dictionary! {
        "XObject" => dictionary! {
            "Tpl" => Object::Reference(template_xobject),
            "Tkt" => Object::Reference(ticket_xobject),
        },
    };

    let pages_id: ObjectId = out.new_object_id();
    let page_id: ObjectId = out.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(ticket_width),
            Object::Real(ticket_height),
        ],
        "Resources" => resources,
        "Contents" => Object::Reference(content_id),
    });
    out.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );
    let catalog_id: ObjectId = out.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    out.trailer.set("Root", catalog_id);
    out.compress();

    let mut bytes: Vec<u8> = Vec::new();
    out.save_to(&mut bytes)
        .map_err(|err| compose_error(err.to_string()))?;
    Ok(bytes)
}

fn compose_error(message: String) -> RenderError {
    RenderError::OverlayComposition { message }
}

/// Returns the first page of a document.
fn first_page(doc: &Document, which: &'static str) -> Result<ObjectId, RenderError> {
    doc.get_pages()
        .values()
        .next()
        .copied()
        .ok_or(RenderError::EmptyDocument { which })
}

/// Returns a page's width and height from its (possibly inherited) MediaBox.
fn page_size(doc: &Document, page_id: ObjectId) -> Result<(f32, f32), String> {
    let media_box: Object = inherited_page_entry(doc, page_id, b"MediaBox")
        .ok_or_else(|| String::from("page has no MediaBox"))?;
    let rect: &Vec<Object> = media_box.as_array().map_err(|err| err.to_string())?;
    if rect.len() != 4 {
        return Err(String::from("MediaBox is not a four-element rectangle"));
    }
    let values: Vec<f32> = rect
        .iter()
        .map(number)
        .collect::<Option<Vec<f32>>>()
        .ok_or_else(|| String::from("MediaBox contains a non-numeric entry"))?;
    Ok(((values[2] - values[0]).abs(), (values[3] - values[1]).abs()))
}

/// Reads a numeric PDF object.
#[allow(clippy::cast_precision_loss)]
fn number(object: &Object) -> Option<f32> {
    match object {
        Object::Integer(value) => Some(*value as f32),
        Object::Real(value) => Some(*value),
        _ => None,
    }
}

/// Looks up a page attribute, walking the Pages tree for inherited values.
///
/// References are resolved; the returned object is owned.
fn inherited_page_entry(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut current: ObjectId = page_id;
    loop {
        let dict: &Dictionary = doc.get_object(current).ok()?.as_dict().ok()?;
        if let Ok(value) = dict.get(key) {
            let resolved: Object = match value {
                Object::Reference(id) => doc.get_object(*id).ok()?.clone(),
                other => other.clone(),
            };
            return Some(resolved);
        }
        current = dict.get(b"Parent").ok()?.as_reference().ok()?;
    }
}

/// Imports a page from another document as a Form XObject.
///
/// The page's concatenated content stream becomes the form's content; its
/// MediaBox becomes the BBox; its resource dictionary is deep-copied so
/// every referenced object lands in the output document.
fn import_page_xobject(
    src: &Document,
    page_id: ObjectId,
    out: &mut Document,
) -> Result<ObjectId, String> {
    let content: Vec<u8> = src
        .get_page_content(page_id)
        .map_err(|err| err.to_string())?;
    let media_box: Object = inherited_page_entry(src, page_id, b"MediaBox")
        .ok_or_else(|| String::from("page has no MediaBox"))?;
    let resources: Object = inherited_page_entry(src, page_id, b"Resources")
        .unwrap_or_else(|| Object::Dictionary(Dictionary::new()));

    let mut id_map: BTreeMap<ObjectId, ObjectId> = BTreeMap::new();
    let resources: Object = import_object(src, &resources, out, &mut id_map)?;
    let media_box: Object = import_object(src, &media_box, out, &mut id_map)?;

    let mut dict: Dictionary = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Form",
        "FormType" => 1,
    };
    dict.set("BBox", media_box);
    dict.set("Resources", resources);

    Ok(out.add_object(Object::Stream(Stream::new(dict, content))))
}

/// Deep-copies an object graph between documents, remapping object ids.
///
/// Already-visited ids are reused from the map, so shared and cyclic
/// references stay shared and terminate.
fn import_object(
    src: &Document,
    object: &Object,
    out: &mut Document,
    id_map: &mut BTreeMap<ObjectId, ObjectId>,
) -> Result<Object, String> {
    match object {
        Object::Reference(id) => {
            if let Some(&mapped) = id_map.get(id) {
                return Ok(Object::Reference(mapped));
            }
            let new_id: ObjectId = out.new_object_id();
            id_map.insert(*id, new_id);
            let resolved: Object = src.get_object(*id).map_err(|err| err.to_string())?.clone();
            let copied: Object = import_object(src, &resolved, out, id_map)?;
            out.objects.insert(new_id, copied);
            Ok(Object::Reference(new_id))
        }
        Object::Array(items) => {
            let copied: Vec<Object> = items
                .iter()
                .map(|item| import_object(src, item, out, id_map))
                .collect::<Result<Vec<Object>, String>>()?;
            Ok(Object::Array(copied))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(import_dictionary(
            src, dict, out, id_map,
        )?)),
        Object::Stream(stream) => {
            let dict: Dictionary = import_dictionary(src, &stream.dict, out, id_map)?;
            Ok(Object::Stream(Stream::new(dict, stream.content.clone())))
        }
        other => Ok(other.clone()),
    }
}

/// Deep-copies a dictionary's values between documents.
fn import_dictionary(
    src: &Document,
    dict: &Dictionary,
    out: &mut Document,
    id_map: &mut BTreeMap<ObjectId, ObjectId>,
) -> Result<Dictionary, String> {
    let mut copied: Dictionary = Dictionary::new();
    for (key, value) in dict.iter() {
        copied.set(key.clone(), import_object(src, value, out, id_map)?);
    }
    Ok(copied)
}
