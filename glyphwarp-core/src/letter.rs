//! The supported glyph identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// One of the six parametric block letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Letter {
    A,
    B,
    C,
    F,
    X,
    W,
}

impl Letter {
    /// Every letter, in table order.
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::F, Self::X, Self::W];

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::F => 'F',
            Self::X => 'X',
            Self::W => 'W',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Letter {
    type Err = CoreError;

    /// Parse a single letter, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "F" => Ok(Self::F),
            "X" => Ok(Self::X),
            "W" => Ok(Self::W),
            _ => Err(CoreError::UnsupportedLetter(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("a".parse::<Letter>().unwrap(), Letter::A);
        assert_eq!(" W ".parse::<Letter>().unwrap(), Letter::W);
    }

    #[test]
    fn parse_rejects_others() {
        for bad in ["", "D", "AB", "z"] {
            assert!(matches!(
                bad.parse::<Letter>(),
                Err(CoreError::UnsupportedLetter(_))
            ));
        }
    }

    #[test]
    fn display_roundtrip() {
        for l in Letter::ALL {
            assert_eq!(l.to_string().parse::<Letter>().unwrap(), l);
        }
    }
}
