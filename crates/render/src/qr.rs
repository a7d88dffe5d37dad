// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RenderError;
use image::{DynamicImage, Luma};
use printpdf::{ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfLayerReference, Px};
use qrcode::QrCode;
use std::collections::HashMap;

/// Minimum rendered QR symbol edge in pixels.
const QR_MIN_PIXELS: u32 = 200;

/// One rendered QR symbol as an RGB8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl QrImage {
    /// Returns the image width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw RGB8 pixel data.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Renders a QR symbol encoding the given identifier.
///
/// # Arguments
///
/// * `id` - The ticket identifier to encode
///
/// # Errors
///
/// Returns `RenderError::QrGeneration` if the encoder rejects the data.
pub fn render_qr(id: &str) -> Result<QrImage, RenderError> {
    let code: QrCode = QrCode::new(id.as_bytes()).map_err(|err| RenderError::QrGeneration {
        id: String::from(id),
        message: err.to_string(),
    })?;

    let luma = code
        .render::<Luma<u8>>()
        .min_dimensions(QR_MIN_PIXELS, QR_MIN_PIXELS)
        .build();
    let rgb = DynamicImage::ImageLuma8(luma).to_rgb8();
    let (width, height) = rgb.dimensions();

    Ok(QrImage {
        width,
        height,
        pixels: rgb.into_raw(),
    })
}

/// Renders one QR image per identifier, keyed by identifier.
///
/// Identifiers are processed in input order and generation is fail-fast:
/// the first failure aborts the whole map.
///
/// # Arguments
///
/// * `ids` - The ticket identifiers to encode
///
/// # Errors
///
/// Returns `RenderError::QrGeneration` for the first identifier that
/// cannot be encoded.
pub fn render_qr_map(ids: &[String]) -> Result<HashMap<String, QrImage>, RenderError> {
    let mut images: HashMap<String, QrImage> = HashMap::with_capacity(ids.len());
    for id in ids {
        images.insert(id.clone(), render_qr(id)?);
    }
    Ok(images)
}

/// Draws a QR image onto a layer at the given position and physical size.
///
/// The DPI is derived from the pixel dimensions so the symbol comes out at
/// exactly `size_mm` on the page.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub(crate) fn embed_qr_image(
    layer: &PdfLayerReference,
    qr: &QrImage,
    x_mm: f32,
    y_mm: f32,
    size_mm: f32,
) {
    let image: Image = Image::from(ImageXObject {
        width: Px(qr.width as usize),
        height: Px(qr.height as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: false,
        image_data: qr.pixels.clone(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    });

    let dpi: f32 = (qr.width as f32) / (size_mm / 25.4);

    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x_mm)),
            translate_y: Some(Mm(y_mm)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );
}
