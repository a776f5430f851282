//! Integration tests for coordinate validation

use voicemove::domain::coordinate::{coordinates, validate, BoardCoordinate};

#[test]
fn every_board_square_parses() {
    for file in 'A'..='H' {
        for rank in 1..=8u8 {
            let token = format!("{file}{rank}");
            let parsed = BoardCoordinate::parse(&token)
                .unwrap_or_else(|| panic!("{token} should parse"));
            assert_eq!(parsed.file(), file);
            assert_eq!(parsed.rank(), rank);
            assert!(validate(&token).is_valid, "{token} should validate");
        }
    }
}

#[test]
fn spacing_does_not_change_the_verdict() {
    for input in ["A3 B5", "A3B5", "A 3 B 5", "A 3B5", "  A3   B5  "] {
        let result = validate(input);
        assert!(result.is_valid, "{input:?} should be valid");
    }
}

#[test]
fn lowercase_input_is_accepted() {
    let coords = coordinates("a3 b5").unwrap();
    assert_eq!(coords.len(), 2);
    assert_eq!(coords[0].to_string(), "A3");
    assert_eq!(coords[1].to_string(), "B5");
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    for input in ["A9", "A0", "I3", "Z1", "J9"] {
        assert!(!validate(input).is_valid, "{input:?} should be invalid");
    }
}

#[test]
fn malformed_input_is_rejected() {
    for input in ["", "   ", "A", "3", "3A", "A33", "AB", "35", "A3X", "hello"] {
        assert!(!validate(input).is_valid, "{input:?} should be invalid");
    }
}

#[test]
fn long_move_chains_are_supported() {
    let coords = coordinates("A3B5C7D8").unwrap();
    let rendered: Vec<String> = coords.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["A3", "B5", "C7", "D8"]);
}

#[test]
fn mixed_spacing_reconstructs_the_same_coordinates() {
    let tight = coordinates("A3B5C7").unwrap();
    let spaced = coordinates("A3 B5 C7").unwrap();
    let exploded = coordinates("A 3 B 5 C 7").unwrap();
    assert_eq!(tight, spaced);
    assert_eq!(spaced, exploded);
}

#[test]
fn digit_pairs_never_validate() {
    assert!(!validate("3535").is_valid);
    assert!(!validate("35 35").is_valid);
}

#[test]
fn validation_is_idempotent_on_normalized_text() {
    let first = validate("a3  b5");
    assert!(first.is_valid);
    let second = validate(&first.normalized_text);
    assert!(second.is_valid);
    assert_eq!(first.normalized_text, second.normalized_text);
}
