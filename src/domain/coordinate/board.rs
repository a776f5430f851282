//! Board coordinate value object

use std::fmt;

/// A single checkerboard square: file `A`-`H` plus rank `1`-`8`.
/// Immutable and validated on creation; any value in circulation
/// is known to be on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardCoordinate {
    file: char,
    rank: u8,
}

impl BoardCoordinate {
    /// Parse a single two-character token: one file letter followed by one
    /// rank digit. The file letter is case-insensitive and normalized to
    /// uppercase.
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let file = chars.next()?.to_ascii_uppercase();
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if !('A'..='H').contains(&file) {
            return None;
        }
        let rank = rank.to_digit(10)?;
        if !(1..=8).contains(&rank) {
            return None;
        }
        Some(Self {
            file,
            rank: rank as u8,
        })
    }

    /// File letter, always uppercase
    pub const fn file(&self) -> char {
        self.file
    }

    /// Rank digit, 1 through 8
    pub const fn rank(&self) -> u8 {
        self.rank
    }
}

impl fmt::Display for BoardCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_token() {
        let coord = BoardCoordinate::parse("A3").unwrap();
        assert_eq!(coord.file(), 'A');
        assert_eq!(coord.rank(), 3);
    }

    #[test]
    fn parse_normalizes_lowercase_file() {
        let coord = BoardCoordinate::parse("h8").unwrap();
        assert_eq!(coord.file(), 'H');
        assert_eq!(coord.rank(), 8);
    }

    #[test]
    fn parse_rejects_file_out_of_range() {
        assert!(BoardCoordinate::parse("I3").is_none());
        assert!(BoardCoordinate::parse("33").is_none());
    }

    #[test]
    fn parse_rejects_rank_out_of_range() {
        assert!(BoardCoordinate::parse("A9").is_none());
        assert!(BoardCoordinate::parse("A0").is_none());
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(BoardCoordinate::parse("").is_none());
        assert!(BoardCoordinate::parse("A").is_none());
        assert!(BoardCoordinate::parse("A33").is_none());
    }

    #[test]
    fn display_round_trips() {
        let coord = BoardCoordinate::parse("b5").unwrap();
        assert_eq!(coord.to_string(), "B5");
    }
}
