//! Board coordinates.

use std::fmt;
use std::str::FromStr;

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::error::{Result, RulesError};

/// A coordinate that is known to lie on the board.
///
/// Columns run 0..=8 from left to right, rows 0..=9 from Black's back rank
/// down to Red's. In notation a column is a letter `a..=i` and a row is
/// printed as the rank `9 - row`, so Red's back rank reads as rank 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: i8,
    col: i8,
}

pub const fn sq_to_idx(row: usize, col: usize) -> usize {
    row * BOARD_WIDTH + col
}

pub fn is_in_board(col: i32, row: i32) -> bool {
    (0..BOARD_WIDTH as i32).contains(&col) && (0..BOARD_HEIGHT as i32).contains(&row)
}

impl Square {
    /// Black's left corner, `a9`.
    pub const ORIGIN: Square = Square { row: 0, col: 0 };

    pub fn new(col: i32, row: i32) -> Result<Self> {
        if !is_in_board(col, row) {
            return Err(RulesError::OutOfBounds { col, row });
        }
        Ok(Self {
            col: col as i8,
            row: row as i8,
        })
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= BOARD_WIDTH * BOARD_HEIGHT {
            return None;
        }
        Some(Self {
            col: (index % BOARD_WIDTH) as i8,
            row: (index / BOARD_WIDTH) as i8,
        })
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_WIDTH * BOARD_HEIGHT).filter_map(Square::from_index)
    }

    pub fn col(&self) -> i8 {
        self.col
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn index(&self) -> usize {
        sq_to_idx(self.row as usize, self.col as usize)
    }

    /// The square `dc` columns and `dr` rows away, if it is on the board.
    pub fn offset(&self, dc: i8, dr: i8) -> Option<Self> {
        let (col, row) = (self.col as i32 + dc as i32, self.row as i32 + dr as i32);
        Square::new(col, row).ok()
    }

    /// Point reflection through the board centre.
    pub fn rotated(&self) -> Self {
        Self {
            col: BOARD_WIDTH as i8 - 1 - self.col,
            row: BOARD_HEIGHT as i8 - 1 - self.row,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col as u8) as char, 9 - self.row)
    }
}

impl FromStr for Square {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(format!("'{s}' is not a square like 'e3'"));
        }
        let col = bytes[0].to_ascii_lowercase() as i32 - b'a' as i32;
        let rank = bytes[1] as i32 - b'0' as i32;
        Square::new(col, 9 - rank).map_err(|e| format!("'{s}': {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_coordinates_are_refused() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(8, 9).is_ok());
        assert_eq!(Square::new(9, 0), Err(RulesError::OutOfBounds { col: 9, row: 0 }));
        assert_eq!(Square::new(0, 10), Err(RulesError::OutOfBounds { col: 0, row: 10 }));
        assert_eq!(Square::new(-1, 3), Err(RulesError::OutOfBounds { col: -1, row: 3 }));
    }

    #[test]
    fn offsets_stop_at_the_edge() {
        let corner = Square::new(0, 9).unwrap();
        assert_eq!(corner.offset(1, -1), Some(Square::new(1, 8).unwrap()));
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, 1), None);
    }

    #[test]
    fn notation_uses_rank_from_reds_side() {
        let sq = Square::new(7, 7).unwrap();
        assert_eq!(sq.to_string(), "h2");
        assert_eq!("h2".parse::<Square>(), Ok(sq));
        assert_eq!("a9".parse::<Square>(), Ok(Square::new(0, 0).unwrap()));
        assert!("j0".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn index_round_trips() {
        for sq in Square::all() {
            assert_eq!(Square::from_index(sq.index()), Some(sq));
        }
        assert_eq!(Square::all().count(), 90);
        assert_eq!(Square::from_index(90), None);
    }
}
