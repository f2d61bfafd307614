//! Defines the representation of a move.

use std::fmt;
use std::str::FromStr;

use crate::square::Square;

/// A single move from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// The same piece travelling back.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Parses coordinate notation such as `h2e2`.
impl FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 4 || !s.is_ascii() {
            return Err(format!("'{s}' is not a move like 'h2e2'"));
        }
        let from = s[0..2].parse()?;
        let to = s[2..4].parse()?;
        Ok(Move { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_coordinate_notation() {
        let mv: Move = "h2e2".parse().unwrap();
        assert_eq!(mv.from, Square::new(7, 7).unwrap());
        assert_eq!(mv.to, Square::new(4, 7).unwrap());
        assert_eq!(mv.to_string(), "h2e2");
        assert_eq!(mv.reversed().to_string(), "e2h2");
    }

    #[test]
    fn rejects_malformed_moves() {
        assert!("h2e".parse::<Move>().is_err());
        assert!("h2z2".parse::<Move>().is_err());
        assert!("帅帅".parse::<Move>().is_err());
    }
}
