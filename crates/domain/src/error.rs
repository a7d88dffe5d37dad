// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required configuration field is empty.
    MissingEventField {
        /// The name of the missing field.
        field: &'static str,
    },
    /// The requested manual ticket count is outside the allowed range.
    InvalidTicketCount {
        /// The invalid count value.
        count: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEventField { field } => {
                write!(f, "Required configuration field '{field}' is empty")
            }
            Self::InvalidTicketCount { count } => {
                write!(
                    f,
                    "Invalid ticket count: {count}. Must be between 1 and 1000"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
