// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the batch orchestration layer.

use ticketgen::CoreError;
use ticketgen_domain::DomainError;
use ticketgen_render::RenderError;

/// Batch-level errors.
///
/// These are fatal to the whole operation and surface as a single
/// human-readable message; per-record and per-image degradations never
/// reach this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The configuration is incomplete or invalid.
    InvalidConfiguration(DomainError),
    /// There are no seats to generate tickets for.
    EmptySeating,
    /// Ticket assembly failed.
    Assembly(CoreError),
    /// PDF or QR rendering failed.
    Render(RenderError),
    /// The CSV manifest could not be produced.
    CsvExport {
        /// The underlying writer error.
        message: String,
    },
    /// A ticket CSV could not be read back.
    CsvImport {
        /// The underlying reader error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(err) => write!(f, "Invalid configuration: {err}"),
            Self::EmptySeating => write!(f, "No seats to generate tickets for"),
            Self::Assembly(err) => write!(f, "Ticket assembly failed: {err}"),
            Self::Render(err) => write!(f, "Rendering failed: {err}"),
            Self::CsvExport { message } => write!(f, "CSV export failed: {message}"),
            Self::CsvImport { message } => write!(f, "CSV import failed: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::InvalidConfiguration(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::Assembly(err)
    }
}

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}
