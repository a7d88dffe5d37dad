// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ticketgen_domain::DomainError;

/// Errors that can occur while assembling tickets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The number of allocated identifiers does not match the seat count.
    ///
    /// Identifiers pair with seats positionally, so a mismatch is a caller
    /// error and nothing is assembled.
    TicketIdMismatch {
        /// The number of seat descriptors.
        seats: usize,
        /// The number of identifiers.
        ids: usize,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::TicketIdMismatch { seats, ids } => {
                write!(
                    f,
                    "Identifier count {ids} does not match seat count {seats}"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
