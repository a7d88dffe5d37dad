// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ticketgen_domain::{EventDetails, SeatAssignment, TicketConfig, TicketRecord};

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
        include_qr_code: false,
    }
}

pub fn create_test_ticket(id: &str) -> TicketRecord {
    TicketRecord {
        id: String::from(id),
        artist: String::from("Adele"),
        date: String::from("25.12.2026"),
        start_time: String::from("20:00"),
        venue: String::from("Stadthalle"),
        category: String::from("Sitzplatz"),
        area: Some(String::from("Tribüne K")),
        assignment: SeatAssignment::Parsed {
            formatted_seat: Some(String::from("Tribüne K, Reihe 8, Platz 1")),
            row: Some(String::from("8")),
            seat_number: Some(String::from("1")),
        },
        static_text: String::from("Kein Einlass ohne gültiges Ticket."),
    }
}
