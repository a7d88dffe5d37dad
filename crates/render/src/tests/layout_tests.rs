// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::layout::wrap_words;
use crate::tests::helpers::create_test_ticket;
use crate::{FontStyle, PlannedLine, plan_lines};
use ticketgen_domain::{SeatAssignment, TicketRecord};

#[test]
fn test_plans_full_ticket_line_stack() {
    let ticket: TicketRecord = create_test_ticket("id-0001");
    let lines: Vec<PlannedLine> = plan_lines(&ticket);

    let texts: Vec<&str> = lines.iter().map(|line| line.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Adele",
            "25.12.2026     Stadthalle",
            "20:00 Uhr",
            "Sitzplatz",
            "Tribüne K",
            "Reihe 8, Platz 1",
        ]
    );
}

#[test]
fn test_artist_line_is_bold() {
    let ticket: TicketRecord = create_test_ticket("id-0001");
    let lines: Vec<PlannedLine> = plan_lines(&ticket);

    assert_eq!(lines[0].style, FontStyle::Bold);
    for line in &lines[1..] {
        assert_eq!(line.style, FontStyle::Regular);
    }
}

#[test]
fn test_short_artist_uses_full_size() {
    let ticket: TicketRecord = create_test_ticket("id-0001");
    let lines: Vec<PlannedLine> = plan_lines(&ticket);
    assert!((lines[0].size - 12.0).abs() < f32::EPSILON);
}

#[test]
fn test_long_artist_drops_to_reduced_size() {
    let mut ticket: TicketRecord = create_test_ticket("id-0001");
    ticket.artist = String::from("The Fantastic Travelling Orchestra");
    let lines: Vec<PlannedLine> = plan_lines(&ticket);
    assert!((lines[0].size - 10.0).abs() < f32::EPSILON);
}

#[test]
fn test_artist_at_threshold_keeps_full_size() {
    let mut ticket: TicketRecord = create_test_ticket("id-0001");
    ticket.artist = "a".repeat(21);
    let lines: Vec<PlannedLine> = plan_lines(&ticket);
    assert!((lines[0].size - 12.0).abs() < f32::EPSILON);
}

#[test]
fn test_absent_area_produces_no_line() {
    let mut ticket: TicketRecord = create_test_ticket("id-0001");
    ticket.area = None;
    let lines: Vec<PlannedLine> = plan_lines(&ticket);

    let texts: Vec<&str> = lines.iter().map(|line| line.text.as_str()).collect();
    assert!(!texts.contains(&"Tribüne K"));
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_row_only_seat_line() {
    let mut ticket: TicketRecord = create_test_ticket("id-0001");
    ticket.assignment = SeatAssignment::Parsed {
        formatted_seat: Some(String::from("Reihe 8")),
        row: Some(String::from("8")),
        seat_number: None,
    };
    let lines: Vec<PlannedLine> = plan_lines(&ticket);
    assert_eq!(lines.last().map(|line| line.text.as_str()), Some("Reihe 8"));
}

#[test]
fn test_aggregate_seat_has_no_seat_lines() {
    let mut ticket: TicketRecord = create_test_ticket("id-0001");
    ticket.area = None;
    ticket.assignment = SeatAssignment::Parsed {
        formatted_seat: None,
        row: None,
        seat_number: None,
    };
    let lines: Vec<PlannedLine> = plan_lines(&ticket);

    // Artist, date/venue, time, and category only.
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_custom_line_is_rendered_verbatim() {
    let mut ticket: TicketRecord = create_test_ticket("id-0001");
    ticket.area = Some(String::from("Stehplatz"));
    ticket.assignment = SeatAssignment::Manual {
        custom_line: Some(String::from("Einlass ab 18 Uhr")),
    };
    let lines: Vec<PlannedLine> = plan_lines(&ticket);
    assert_eq!(
        lines.last().map(|line| line.text.as_str()),
        Some("Einlass ab 18 Uhr")
    );
}

#[test]
fn test_area_line_is_trimmed() {
    let mut ticket: TicketRecord = create_test_ticket("id-0001");
    ticket.area = Some(String::from("  Tribüne K "));
    let lines: Vec<PlannedLine> = plan_lines(&ticket);
    assert!(lines.iter().any(|line| line.text == "Tribüne K"));
}

#[test]
fn test_wrap_words_keeps_short_text_on_one_line() {
    let lines: Vec<String> = wrap_words("Kein Einlass", 42);
    assert_eq!(lines, vec![String::from("Kein Einlass")]);
}

#[test]
fn test_wrap_words_breaks_at_limit() {
    let lines: Vec<String> =
        wrap_words("Kein Einlass ohne gültiges Ticket und gültigen Lichtbildausweis", 20);

    assert!(lines.len() > 1);
    for line in &lines {
        // A single over-long word may exceed the limit; these do not.
        assert!(line.chars().count() <= 20);
    }
}

#[test]
fn test_wrap_words_empty_text_produces_no_lines() {
    assert!(wrap_words("", 42).is_empty());
}
