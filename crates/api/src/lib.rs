// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod batch;
mod error;
mod export;
mod ids;
mod input;

#[cfg(test)]
mod tests;

pub use batch::{TicketBatch, generate_batch, manual_seating};
pub use error::ApiError;
pub use export::{ImportedTicket, export_tickets_csv, import_tickets_csv};
pub use ids::allocate_ids;
pub use input::decode_seating_bytes;
