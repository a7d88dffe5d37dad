// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{SeatDescriptor, TicketConfig};

/// The maximum number of tickets a manual batch may request.
pub const MAX_MANUAL_TICKETS: usize = 1000;

/// Validates that a ticket configuration is complete.
///
/// Every event field and the static footer text must be non-empty. The
/// default category is exempt: a batch whose seats all carry their own
/// category does not need one (see [`requires_default_category`]).
///
/// # Arguments
///
/// * `config` - The configuration to validate
///
/// # Errors
///
/// Returns `DomainError::MissingEventField` naming the first empty field.
pub fn validate_config(config: &TicketConfig) -> Result<(), DomainError> {
    let required: [(&'static str, &str); 5] = [
        ("artist", &config.event.artist),
        ("date", &config.event.date),
        ("startTime", &config.event.start_time),
        ("venue", &config.event.venue),
        ("staticText", &config.static_text),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(DomainError::MissingEventField { field });
        }
    }

    Ok(())
}

/// Returns whether a seat list needs the event-level default category.
///
/// True when at least one seat carries an empty category of its own.
/// Manual seats always do.
#[must_use]
pub fn requires_default_category(seats: &[SeatDescriptor]) -> bool {
    seats.iter().any(|seat| seat.category().is_empty())
}

/// Validates a manual ticket count.
///
/// # Arguments
///
/// * `count` - The requested number of tickets
///
/// # Errors
///
/// Returns `DomainError::InvalidTicketCount` if the count is zero or
/// exceeds [`MAX_MANUAL_TICKETS`].
pub fn validate_ticket_count(count: usize) -> Result<(), DomainError> {
    if count == 0 || count > MAX_MANUAL_TICKETS {
        return Err(DomainError::InvalidTicketCount { count });
    }
    Ok(())
}
