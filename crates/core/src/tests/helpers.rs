// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ticketgen_domain::{EventDetails, TicketConfig};

/// A representative two-seat export snippet.
pub const SAMPLE_EXPORT: &str = concat!(
    "\" Tribüne K  Reihe 8   Platz 1\",\"1:Sitzplatz\",\"frei\",\"-\",\"-\"\n",
    "\" Tribüne K  Reihe 8   Platz 2\",\"1:Sitzplatz\",\"frei\",\"-\",\"-\"\n",
);

pub fn create_test_config() -> TicketConfig {
    TicketConfig {
        event: EventDetails {
            artist: String::from("Adele"),
            date: String::from("25.12.2026"),
            start_time: String::from("20:00"),
            venue: String::from("Stadthalle"),
            category: String::from("Sitzplatz"),
        },
        static_text: String::from("Kein Einlass ohne gültiges Ticket."),
        include_qr_code: true,
    }
}

pub fn sequential_ids(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("id-{i:04}")).collect()
}
