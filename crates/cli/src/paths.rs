// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Output path naming.

/// Replaces filesystem-hostile characters and whitespace with
/// underscores, collapsing runs to a single underscore.
#[must_use]
pub fn sanitize_folder_name(name: &str) -> String {
    let mut sanitized: String = String::with_capacity(name.len());
    let mut previous_underscore: bool = false;

    for character in name.trim().chars() {
        let mapped: char = if matches!(
            character,
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*'
        ) || character.is_whitespace()
        {
            '_'
        } else {
            character
        };

        if mapped == '_' {
            if previous_underscore {
                continue;
            }
            previous_underscore = true;
        } else {
            previous_underscore = false;
        }
        sanitized.push(mapped);
    }

    sanitized
}

/// Builds the per-batch output folder name from artist and date.
#[must_use]
pub fn output_folder_name(artist: &str, date: &str) -> String {
    format!(
        "{}_{}",
        sanitize_folder_name(artist),
        sanitize_folder_name(date)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_pass_through() {
        assert_eq!(sanitize_folder_name("Adele"), "Adele");
        assert_eq!(sanitize_folder_name("25.12.2026"), "25.12.2026");
    }

    #[test]
    fn test_whitespace_becomes_single_underscore() {
        assert_eq!(
            sanitize_folder_name("The  Fantastic   Band"),
            "The_Fantastic_Band"
        );
    }

    #[test]
    fn test_invalid_characters_are_replaced() {
        assert_eq!(sanitize_folder_name("AC/DC: Live?"), "AC_DC_Live_");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(sanitize_folder_name("  Adele  "), "Adele");
    }

    #[test]
    fn test_output_folder_name_joins_artist_and_date() {
        assert_eq!(
            output_folder_name("Adele", "25.12.2026"),
            "Adele_25.12.2026"
        );
    }
}
