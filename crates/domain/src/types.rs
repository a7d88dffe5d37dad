// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The status value that marks a manually specified seat.
///
/// Seats recovered from a seating export carry the export's own status
/// (e.g. "frei"); manually entered seats carry this sentinel instead, and
/// their seat-number field holds a freeform second ticket line.
pub const MANUAL_STATUS: &str = "manual";

/// One physical or logical seat.
///
/// Descriptors are produced once, by the seating parser or by the
/// manual-mode constructor, and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatDescriptor {
    /// Named section (e.g. "Tribüne K"). Absent for aggregate seats.
    area: Option<String>,
    /// Numeric-string row label.
    row: Option<String>,
    /// Numeric-string seat label within the row. Carries the freeform
    /// second ticket line in manual mode.
    seat_number: Option<String>,
    /// Seating-class label. Empty only for manual seats.
    category: String,
    /// Source availability status, preserved without interpretation.
    status: String,
}

impl SeatDescriptor {
    /// Creates a new `SeatDescriptor`.
    ///
    /// # Arguments
    ///
    /// * `area` - The named section, if any
    /// * `row` - The row label, if any
    /// * `seat_number` - The seat label, if any
    /// * `category` - The seating-class label
    /// * `status` - The source availability status
    #[must_use]
    pub const fn new(
        area: Option<String>,
        row: Option<String>,
        seat_number: Option<String>,
        category: String,
        status: String,
    ) -> Self {
        Self {
            area,
            row,
            seat_number,
            category,
            status,
        }
    }

    /// Creates a manually specified seat.
    ///
    /// Line 1 is carried in the area field and line 2 in the seat-number
    /// field; empty lines are stored as absent. The category is left empty
    /// so the event-level default applies during assembly.
    ///
    /// # Arguments
    ///
    /// * `line1` - The first freeform ticket line
    /// * `line2` - The second freeform ticket line
    #[must_use]
    pub fn manual(line1: &str, line2: &str) -> Self {
        let non_empty = |s: &str| {
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };
        Self {
            area: non_empty(line1),
            row: None,
            seat_number: non_empty(line2),
            category: String::new(),
            status: String::from(MANUAL_STATUS),
        }
    }

    /// Returns the named section, if any.
    #[must_use]
    pub fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }

    /// Returns the row label, if any.
    #[must_use]
    pub fn row(&self) -> Option<&str> {
        self.row.as_deref()
    }

    /// Returns the seat label, if any.
    #[must_use]
    pub fn seat_number(&self) -> Option<&str> {
        self.seat_number.as_deref()
    }

    /// Returns the seating-class label.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the source availability status.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns whether this seat was specified manually.
    #[must_use]
    pub fn is_manual(&self) -> bool {
        self.status == MANUAL_STATUS
    }

    /// Composes the human-readable seat description.
    ///
    /// Joins whichever of [area, "Reihe <row>", "Platz <seat>"] are present,
    /// in that fixed order, with ", ". Returns `None` when none are present.
    #[must_use]
    pub fn formatted_seat(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        if let Some(area) = &self.area {
            parts.push(area.clone());
        }
        if let Some(row) = &self.row {
            parts.push(format!("Reihe {row}"));
        }
        if let Some(seat) = &self.seat_number {
            parts.push(format!("Platz {seat}"));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// The seat-line content of one ticket.
///
/// The original export format reused the seat-number field as a freeform
/// text line for manual tickets, branching on the status string at render
/// time. The two shapes are kept apart here: a ticket carries either
/// parsed row/seat data or a manual custom line, never both. The area is
/// not part of the split (manual tickets use it for their first freeform
/// line), so it lives on [`TicketRecord`] directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatAssignment {
    /// Seat data recovered from a seating export.
    Parsed {
        /// Pre-joined "<area>, Reihe <row>, Platz <seat>" display string.
        formatted_seat: Option<String>,
        /// Row label.
        row: Option<String>,
        /// Seat label within the row.
        seat_number: Option<String>,
    },
    /// A manually entered ticket line.
    Manual {
        /// The freeform second ticket line.
        custom_line: Option<String>,
    },
}

impl SeatAssignment {
    /// Returns the manual custom line, if this is a manual assignment.
    #[must_use]
    pub fn custom_line(&self) -> Option<&str> {
        match self {
            Self::Manual { custom_line } => custom_line.as_deref(),
            Self::Parsed { .. } => None,
        }
    }

    /// Returns the pre-joined seat display string, if any.
    #[must_use]
    pub fn formatted_seat(&self) -> Option<&str> {
        match self {
            Self::Parsed { formatted_seat, .. } => formatted_seat.as_deref(),
            Self::Manual { .. } => None,
        }
    }

    /// Returns the row label, if any.
    #[must_use]
    pub fn row(&self) -> Option<&str> {
        match self {
            Self::Parsed { row, .. } => row.as_deref(),
            Self::Manual { .. } => None,
        }
    }

    /// Returns the seat label, if any.
    #[must_use]
    pub fn seat_number(&self) -> Option<&str> {
        match self {
            Self::Parsed { seat_number, .. } => seat_number.as_deref(),
            Self::Manual { .. } => None,
        }
    }

    /// Returns whether this is a manual assignment.
    #[must_use]
    pub const fn is_manual(&self) -> bool {
        matches!(self, Self::Manual { .. })
    }
}

/// One fully resolved, print-ready ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRecord {
    /// Opaque unique identifier, allocated one per seat in input order.
    pub id: String,
    /// Artist or event name, identical across a batch.
    pub artist: String,
    /// Event date display string, identical across a batch.
    pub date: String,
    /// Start time display string, identical across a batch.
    pub start_time: String,
    /// Venue name, identical across a batch.
    pub venue: String,
    /// The seat's own category, or the event-level default.
    pub category: String,
    /// Named section, or the first freeform line of a manual ticket.
    pub area: Option<String>,
    /// Row/seat data or the manual custom line.
    pub assignment: SeatAssignment,
    /// Fixed footer/legal text, identical across a batch.
    pub static_text: String,
}

/// Event-level ticket fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    /// Artist or event name.
    pub artist: String,
    /// Event date display string (copied verbatim onto every ticket).
    pub date: String,
    /// Start time display string.
    pub start_time: String,
    /// Venue name.
    pub venue: String,
    /// Default seating category, applied to seats without their own.
    pub category: String,
}

/// The complete ticket-batch configuration.
///
/// This is an immutable value: any change produces a new `TicketConfig`,
/// never a partial in-place update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketConfig {
    /// Event-level fields shared by every ticket of the batch.
    pub event: EventDetails,
    /// Fixed footer/legal text.
    pub static_text: String,
    /// Whether to render a QR code on each ticket.
    pub include_qr_code: bool,
}
