// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, EventDetails, SeatDescriptor, TicketConfig, requires_default_category,
    validate_config, validate_ticket_count,
};

fn create_test_config() -> TicketConfig {
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

#[test]
fn test_validate_config_accepts_complete_config() {
    let config: TicketConfig = create_test_config();
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_validate_config_rejects_empty_artist() {
    let mut config: TicketConfig = create_test_config();
    config.event.artist = String::new();
    assert_eq!(
        validate_config(&config),
        Err(DomainError::MissingEventField { field: "artist" })
    );
}

#[test]
fn test_validate_config_rejects_whitespace_venue() {
    let mut config: TicketConfig = create_test_config();
    config.event.venue = String::from("   ");
    assert_eq!(
        validate_config(&config),
        Err(DomainError::MissingEventField { field: "venue" })
    );
}

#[test]
fn test_validate_config_rejects_empty_static_text() {
    let mut config: TicketConfig = create_test_config();
    config.static_text = String::new();
    assert_eq!(
        validate_config(&config),
        Err(DomainError::MissingEventField {
            field: "staticText"
        })
    );
}

#[test]
fn test_validate_config_allows_empty_default_category() {
    let mut config: TicketConfig = create_test_config();
    config.event.category = String::new();
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_requires_default_category_for_manual_seats() {
    let seats: Vec<SeatDescriptor> = vec![SeatDescriptor::manual("Stehplatz", "")];
    assert!(requires_default_category(&seats));
}

#[test]
fn test_requires_no_default_category_when_all_seats_carry_one() {
    let seats: Vec<SeatDescriptor> = vec![SeatDescriptor::new(
        None,
        None,
        None,
        String::from("Stehplatz Innenraum"),
        String::from("frei"),
    )];
    assert!(!requires_default_category(&seats));
}

#[test]
fn test_validate_ticket_count_accepts_bounds() {
    assert!(validate_ticket_count(1).is_ok());
    assert!(validate_ticket_count(1000).is_ok());
}

#[test]
fn test_validate_ticket_count_rejects_zero() {
    assert_eq!(
        validate_ticket_count(0),
        Err(DomainError::InvalidTicketCount { count: 0 })
    );
}

#[test]
fn test_validate_ticket_count_rejects_excessive_count() {
    assert_eq!(
        validate_ticket_count(1001),
        Err(DomainError::InvalidTicketCount { count: 1001 })
    );
}
