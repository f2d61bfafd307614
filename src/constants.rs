//! Constants and piece types used by the rules engine.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{Result, RulesError};

pub const BOARD_WIDTH: usize = 9;
pub const BOARD_HEIGHT: usize = 10;
pub const BOARD_SQUARES: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Columns of both palaces.
pub const PALACE_COLS: RangeInclusive<i8> = 3..=5;

/// The standard opening setup, indexed `[row][col]`.
/// Row 0 is Black's back rank, row 9 is Red's.
pub const INITIAL_LAYOUT: [[i8; BOARD_WIDTH]; BOARD_HEIGHT] = [
    [-3, -4, -5, -6, -7, -6, -5, -4, -3],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, -2, 0, 0, 0, 0, 0, -2, 0],
    [-1, 0, -1, 0, -1, 0, -1, 0, -1],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 0, 1, 0, 1, 0, 1, 0, 1],
    [0, 2, 0, 0, 0, 0, 0, 2, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 4, 5, 6, 7, 6, 5, 4, 3],
];

// Positive codes for Red, negative for Black, magnitude picks the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum PieceKind {
    Soldier = 1,
    Cannon = 2,
    Chariot = 3,
    Horse = 4,
    Elephant = 5,
    Advisor = 6,
    General = 7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Side {
    Red = 1,
    Black = -1,
}

/// Piece label script, English letters or Chinese characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

/// A piece on the board: what it is and who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl PieceKind {
    pub fn from_magnitude(val: u8) -> Option<Self> {
        match val {
            1 => Some(PieceKind::Soldier),
            2 => Some(PieceKind::Cannon),
            3 => Some(PieceKind::Chariot),
            4 => Some(PieceKind::Horse),
            5 => Some(PieceKind::Elephant),
            6 => Some(PieceKind::Advisor),
            7 => Some(PieceKind::General),
            _ => None,
        }
    }
}

impl Side {
    /// Get the opponent of the current side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Row delta of a soldier's forward step.
    pub fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    /// The three back rows holding this side's palace.
    pub fn palace_rows(self) -> RangeInclusive<i8> {
        match self {
            Side::Red => 7..=9,
            Side::Black => 0..=2,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Black => write!(f, "Black"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ch" | "zh" | "chinese" => Ok(Language::Chinese),
            other => Err(format!("unknown label language '{other}'")),
        }
    }
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// Decodes a signed cell code; `Ok(None)` is an empty cell.
    pub fn from_code(code: i8) -> Result<Option<Piece>> {
        if code == 0 {
            return Ok(None);
        }
        let kind =
            PieceKind::from_magnitude(code.unsigned_abs()).ok_or(RulesError::InvalidPieceCode(code))?;
        let side = if code > 0 { Side::Red } else { Side::Black };
        Ok(Some(Piece::new(kind, side)))
    }

    /// The signed cell code of this piece.
    pub fn code(self) -> i8 {
        self.kind as i8 * self.side as i8
    }

    pub fn is_ally(self, other: Piece) -> bool {
        self.side == other.side
    }

    pub fn label(self, language: Language) -> char {
        match language {
            Language::English => {
                let c = match self.kind {
                    PieceKind::General => 'k',
                    PieceKind::Advisor => 'a',
                    PieceKind::Elephant => 'b',
                    PieceKind::Horse => 'n',
                    PieceKind::Chariot => 'r',
                    PieceKind::Cannon => 'c',
                    PieceKind::Soldier => 'p',
                };
                if self.side == Side::Red {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            }
            Language::Chinese => match (self.side, self.kind) {
                (Side::Red, PieceKind::General) => '帅',
                (Side::Red, PieceKind::Advisor) => '仕',
                (Side::Red, PieceKind::Elephant) => '相',
                (Side::Red, PieceKind::Horse) => '傌',
                (Side::Red, PieceKind::Chariot) => '俥',
                (Side::Red, PieceKind::Cannon) => '炮',
                (Side::Red, PieceKind::Soldier) => '兵',
                (Side::Black, PieceKind::General) => '将',
                (Side::Black, PieceKind::Advisor) => '士',
                (Side::Black, PieceKind::Elephant) => '象',
                (Side::Black, PieceKind::Horse) => '馬',
                (Side::Black, PieceKind::Chariot) => '車',
                (Side::Black, PieceKind::Cannon) => '砲',
                (Side::Black, PieceKind::Soldier) => '卒',
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_decode_to_kind_and_side() {
        assert_eq!(Piece::from_code(0), Ok(None));
        assert_eq!(
            Piece::from_code(4),
            Ok(Some(Piece::new(PieceKind::Horse, Side::Red)))
        );
        assert_eq!(
            Piece::from_code(-7),
            Ok(Some(Piece::new(PieceKind::General, Side::Black)))
        );
        assert_eq!(Piece::from_code(8), Err(RulesError::InvalidPieceCode(8)));
        assert_eq!(Piece::from_code(-9), Err(RulesError::InvalidPieceCode(-9)));
    }

    #[test]
    fn every_piece_survives_its_code() {
        for kind in (1..=7).filter_map(PieceKind::from_magnitude) {
            for side in [Side::Red, Side::Black] {
                let piece = Piece::new(kind, side);
                assert_eq!(Piece::from_code(piece.code()), Ok(Some(piece)));
            }
        }
    }

    #[test]
    fn labels_follow_language() {
        let red_general = Piece::new(PieceKind::General, Side::Red);
        let black_horse = Piece::new(PieceKind::Horse, Side::Black);
        assert_eq!(red_general.label(Language::English), 'K');
        assert_eq!(black_horse.label(Language::English), 'n');
        assert_eq!(red_general.label(Language::Chinese), '帅');
        assert_eq!(black_horse.label(Language::Chinese), '馬');
        assert_eq!("ch".parse::<Language>(), Ok(Language::Chinese));
        assert!("fr".parse::<Language>().is_err());
    }
}
