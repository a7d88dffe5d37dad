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

mod error;
mod layout;
mod overlay;
mod paginate;
mod qr;

#[cfg(test)]
mod tests;

pub use error::RenderError;
pub use layout::{FontStyle, PlannedLine, plan_lines};
pub use overlay::compose_layout_test;
pub use paginate::{MAX_TICKETS_PER_DOCUMENT, TicketDocument, paginate};
pub use qr::{QrImage, render_qr, render_qr_map};
