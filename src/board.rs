//! The board representation: occupancy and the side to move.
//!
//! The board answers questions about the position; it knows nothing about
//! how pieces move. Rules live in `move_gen`.

use std::fmt;
use std::ops::Index;

use crate::constants::{Piece, Side, BOARD_HEIGHT, BOARD_SQUARES, BOARD_WIDTH, INITIAL_LAYOUT};
use crate::error::Result;
use crate::square::{self, Square};

/// Cell codes laid out `[row][col]`, as handed to renderers.
pub type Snapshot = [[i8; BOARD_WIDTH]; BOARD_HEIGHT];

/// Represents the state of the Xiangqi board at any point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; BOARD_SQUARES],
    side_to_move: Side,
}

impl Board {
    /// The standard opening position with Red to move.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// A board with no pieces on it and Red to move.
    pub fn empty() -> Self {
        Self {
            cells: [None; BOARD_SQUARES],
            side_to_move: Side::Red,
        }
    }

    /// Builds a position from signed cell codes.
    pub fn from_codes(codes: &Snapshot) -> Result<Self> {
        let mut board = Self::empty();
        for (r, row) in codes.iter().enumerate() {
            for (c, &code) in row.iter().enumerate() {
                board.cells[square::sq_to_idx(r, c)] = Piece::from_code(code)?;
            }
        }
        Ok(board)
    }

    /// Restores the opening layout and hands the move to Red.
    pub fn reset(&mut self) {
        for (r, row) in INITIAL_LAYOUT.iter().enumerate() {
            for (c, &code) in row.iter().enumerate() {
                // The layout table only holds valid codes.
                self.cells[square::sq_to_idx(r, c)] = Piece::from_code(code).ok().flatten();
            }
        }
        self.side_to_move = Side::Red;
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, side: Side) {
        self.side_to_move = side;
    }

    /// The piece at a raw coordinate. Coordinates off the board are refused.
    pub fn piece_at(&self, col: i32, row: i32) -> Result<Option<Piece>> {
        let sq = Square::new(col, row)?;
        Ok(self[sq])
    }

    /// The signed cell code at a raw coordinate, `0` for empty.
    pub fn code_at(&self, col: i32, row: i32) -> Result<i8> {
        Ok(self.piece_at(col, row)?.map_or(0, Piece::code))
    }

    pub fn is_in_board(col: i32, row: i32) -> bool {
        square::is_in_board(col, row)
    }

    /// True iff both cells are occupied by the same side.
    pub fn is_ally(a: Option<Piece>, b: Option<Piece>) -> bool {
        matches!((a, b), (Some(a), Some(b)) if a.is_ally(b))
    }

    /// True iff `row` lies on `side`'s half, i.e. a piece of that side
    /// standing there has not crossed the river.
    pub fn is_own_side(side: Side, row: i8) -> bool {
        match side {
            Side::Red => row > 4,
            Side::Black => row < 5,
        }
    }

    /// Puts `piece` on `sq` (or clears it) and returns whatever was there.
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.cells[sq.index()], piece)
    }

    /// Moves whatever stands on `from` to `to`, overwriting the target, and
    /// passes the turn. No rule is checked here.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving_piece = self.cells[from.index()].take();
        let captured_piece = std::mem::replace(&mut self.cells[to.index()], moving_piece);
        self.side_to_move = self.side_to_move.opponent();
        captured_piece
    }

    /// Every occupied square with its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self[sq].map(|piece| (sq, piece)))
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut codes = [[0; BOARD_WIDTH]; BOARD_HEIGHT];
        for (sq, piece) in self.pieces() {
            codes[sq.row() as usize][sq.col() as usize] = piece.code();
        }
        codes
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.cells[sq.index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "(Side to move: {})", self.side_to_move)?;
        writeln!(f, "  +-------------------+")?;
        for r in 0..BOARD_HEIGHT {
            write!(f, "{} | ", 9 - r)?;
            for c in 0..BOARD_WIDTH {
                let label = match self.cells[square::sq_to_idx(r, c)] {
                    Some(piece) => piece.label(crate::constants::Language::English),
                    None => '.',
                };
                write!(f, "{} ", label)?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-------------------+")?;
        writeln!(f, "    a b c d e f g h i")
    }
}
