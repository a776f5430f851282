//! Space-ambiguous coordinate validation
//!
//! The upstream speech engine is unreliable about whitespace placement:
//! "A3 B5" may arrive as "A3B5", "A 3 B 5", or anything in between. The
//! validator accepts an input iff some re-spacing of its character stream
//! splits into back-to-back well-formed tokens.
//!
//! The algorithm is a deliberate brute force: strip spaces, then enumerate
//! every binary choice of inserting a space after each odd-indexed character,
//! and accept as soon as one reconstruction splits into all-valid tokens.
//! This is O(2^(n/2)) in the stripped length. Transcripts are short (one or
//! two spoken coordinates, ~6 characters), so the cost is irrelevant, and the
//! brute-force acceptance set is the contract: do not replace this with a
//! linear tokenizer whose acceptance set might differ.

use super::board::BoardCoordinate;

/// Verdict for one transcript. Ephemeral; superseded by the next
/// recognition event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// The original input, unmodified. No canonicalization is asserted
    /// beyond validity itself.
    pub normalized_text: String,
}

/// Validate a raw transcript against the coordinate grammar.
///
/// Pure function: same input, same verdict, no hidden state.
pub fn validate(text: &str) -> ValidationResult {
    ValidationResult {
        is_valid: coordinates(text).is_some(),
        normalized_text: text.to_string(),
    }
}

/// Parse a raw transcript into board coordinates, taking the first
/// satisfying reconstruction. `None` when no reconstruction is all-tokens,
/// including the empty string and odd-length character streams.
pub fn coordinates(text: &str) -> Option<Vec<BoardCoordinate>> {
    let stream: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    let mut current = String::with_capacity(stream.len() * 2);
    search(&stream, 0, &mut current)
}

/// Depth-first enumeration of reconstructions, returning on first success.
fn search(stream: &[char], index: usize, current: &mut String) -> Option<Vec<BoardCoordinate>> {
    if index == stream.len() {
        return parse_segments(current);
    }

    current.push(stream[index]);

    // Without a space after this character
    if let Some(found) = search(stream, index + 1, current) {
        current.pop();
        return Some(found);
    }

    // With a space, allowed only after odd-indexed characters so tokens
    // stay aligned to pairs
    if index % 2 == 1 && index + 1 < stream.len() {
        current.push(' ');
        let found = search(stream, index + 1, current);
        current.pop();
        if found.is_some() {
            current.pop();
            return found;
        }
    }

    current.pop();
    None
}

/// A reconstruction satisfies the grammar iff every space-separated segment
/// is exactly one well-formed token. A trailing single character leaves an
/// unparsable segment, so odd-length streams fall out naturally rather than
/// being rejected up front.
fn parse_segments(reconstruction: &str) -> Option<Vec<BoardCoordinate>> {
    reconstruction
        .split(' ')
        .map(BoardCoordinate::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token_is_valid() {
        assert!(validate("A3").is_valid);
        assert!(validate("h8").is_valid);
    }

    #[test]
    fn spacing_variants_are_equivalent() {
        assert!(validate("A3 B5").is_valid);
        assert!(validate("A3B5").is_valid);
        assert!(validate("A 3 B 5").is_valid);
    }

    #[test]
    fn malformed_tokens_are_invalid() {
        assert!(!validate("A9").is_valid);
        assert!(!validate("I3").is_valid);
        assert!(!validate("33").is_valid);
    }

    #[test]
    fn empty_and_short_inputs_are_invalid() {
        assert!(!validate("").is_valid);
        assert!(!validate("A").is_valid);
        assert!(!validate(" ").is_valid);
    }

    #[test]
    fn odd_length_stream_is_invalid() {
        assert!(!validate("A3B").is_valid);
        assert!(!validate("A 3 B").is_valid);
    }

    #[test]
    fn one_bad_token_spoils_the_input() {
        assert!(!validate("A3 Z5").is_valid);
        assert!(!validate("A3Z5").is_valid);
    }

    #[test]
    fn three_coordinates_parse() {
        let coords = coordinates("A3B5C7").unwrap();
        let rendered: Vec<String> = coords.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["A3", "B5", "C7"]);
    }

    #[test]
    fn normalized_text_is_the_original() {
        let result = validate("a3 b5");
        assert!(result.is_valid);
        assert_eq!(result.normalized_text, "a3 b5");
    }

    #[test]
    fn verdict_is_idempotent() {
        let first = validate("A3B5");
        let second = validate("A3B5");
        assert_eq!(first, second);
    }
}
