// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for PDF and QR rendering.

use thiserror::Error;

/// Rendering errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// QR symbol generation failed for an identifier.
    #[error("Failed to generate QR code for ticket {id}: {message}")]
    QrGeneration {
        /// The ticket identifier.
        id: String,
        /// The underlying encoder error.
        message: String,
    },

    /// One document of the batch failed to encode.
    ///
    /// The group index allows retrying just that document; the other
    /// documents of the batch are unaffected.
    #[error("Failed to encode ticket document {group}: {message}")]
    DocumentEncoding {
        /// Zero-based index of the failing group.
        group: usize,
        /// The underlying encoder error.
        message: String,
    },

    /// An input PDF could not be read.
    #[error("Failed to read {which} PDF: {message}")]
    DocumentRead {
        /// Which input failed ("ticket" or "template").
        which: &'static str,
        /// The underlying parser error.
        message: String,
    },

    /// An input PDF has no pages to overlay.
    #[error("The {which} PDF has no pages")]
    EmptyDocument {
        /// Which input was empty ("ticket" or "template").
        which: &'static str,
    },

    /// The overlay output could not be composed.
    #[error("Failed to compose layout test PDF: {message}")]
    OverlayComposition {
        /// A description of the failure.
        message: String,
    },
}
