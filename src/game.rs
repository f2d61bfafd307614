//! The game engine: a board, whose turn it is, and what the player has
//! picked up.
//!
//! Selection follows a two-state machine. From `Idle`, selecting a piece of
//! the side to move enters `PieceSelected` with that piece's destinations
//! cached. Selecting the same square again drops back to `Idle`, selecting
//! another own piece swaps the selection, and choosing a cached destination
//! plays the move and returns to `Idle`.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Snapshot};
use crate::config::Config;
use crate::constants::{Piece, Side};
use crate::error::{Result, RulesError};
use crate::move_gen;
use crate::movelist::MoveList;
use crate::r#move::Move;
use crate::square::Square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    PieceSelected { square: Square, moves: MoveList },
}

/// One independent game. Every operation runs to completion before it
/// returns; callers feed input one event at a time.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    selection: SelectionState,
    config: Config,
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let mut game = Self {
            board: Board::empty(),
            selection: SelectionState::Idle,
            config,
        };
        game.reset();
        game
    }

    /// Starts from an arbitrary position instead of the opening.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            selection: SelectionState::Idle,
            config: Config::default(),
        }
    }

    /// Back to the opening layout, first side to move, nothing selected.
    pub fn reset(&mut self) {
        self.board.reset();
        self.board.set_side_to_move(self.config.first_to_move);
        self.selection = SelectionState::Idle;
        debug!("game reset, {} to move", self.config.first_to_move);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn side_to_move(&self) -> Side {
        self.board.side_to_move()
    }

    pub fn piece_at(&self, col: i32, row: i32) -> Result<Option<Piece>> {
        self.board.piece_at(col, row)
    }

    pub fn board_snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    /// Destinations of whatever stands on the square; empty for an empty
    /// square. Works for either side regardless of the turn.
    pub fn legal_moves(&self, col: i32, row: i32) -> Result<MoveList> {
        let from = Square::new(col, row)?;
        Ok(move_gen::legal_moves(&self.board, from))
    }

    pub fn all_legal_moves(&self) -> Vec<Move> {
        move_gen::all_legal_moves(&self.board)
    }

    /// A uniformly chosen legal move of the side to move, if it has any.
    pub fn random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Move> {
        self.all_legal_moves().choose(rng).copied()
    }

    pub fn select(&mut self, col: i32, row: i32) -> Result<SelectionState> {
        let sq = Square::new(col, row)?;

        if matches!(self.selection, SelectionState::PieceSelected { square, .. } if square == sq) {
            debug!("deselected {sq}");
            self.selection = SelectionState::Idle;
            return Ok(SelectionState::Idle);
        }

        match self.board[sq] {
            None => Err(RulesError::EmptyCellSelected(sq)),
            Some(piece) if piece.side != self.side_to_move() => Err(RulesError::NotSideToMove(sq)),
            Some(piece) => {
                let moves = move_gen::legal_moves(&self.board, sq);
                debug!("selected {:?} on {sq}, {} destinations", piece.kind, moves.len());
                self.selection = SelectionState::PieceSelected { square: sq, moves };
                Ok(self.selection.clone())
            }
        }
    }

    /// Plays the selected piece to `(col, row)`.
    ///
    /// Choosing a square held by an own piece re-selects instead. Anything
    /// outside the cached destinations is refused and the selection stays.
    pub fn choose_destination(&mut self, col: i32, row: i32) -> Result<SelectionState> {
        let to = Square::new(col, row)?;
        let SelectionState::PieceSelected { square: from, moves } = &self.selection else {
            return Err(RulesError::NothingSelected);
        };
        let from = *from;

        if moves.contains(to) {
            move_gen::apply_move(&mut self.board, Move::new(from, to))?;
            self.selection = SelectionState::Idle;
            return Ok(SelectionState::Idle);
        }
        if Board::is_ally(self.board[from], self.board[to]) {
            return self.select(col, row);
        }
        Err(RulesError::IllegalDestination { from, to })
    }

    /// The single entry point a pointer-driven front end needs: select when
    /// nothing is selected, otherwise treat the square as a destination.
    pub fn click(&mut self, col: i32, row: i32) -> Result<SelectionState> {
        match self.selection {
            SelectionState::Idle => self.select(col, row),
            SelectionState::PieceSelected { .. } => self.choose_destination(col, row),
        }
    }

    /// Validates and plays a move given as raw coordinates, returning the
    /// captured piece. Only the side to move may move.
    pub fn apply_move(&mut self, from_col: i32, from_row: i32, to_col: i32, to_row: i32) -> Result<Option<Piece>> {
        let mv = Move::new(Square::new(from_col, from_row)?, Square::new(to_col, to_row)?);
        self.play(mv)
    }

    pub fn play(&mut self, mv: Move) -> Result<Option<Piece>> {
        if let Some(piece) = self.board[mv.from] {
            if piece.side != self.side_to_move() {
                return Err(RulesError::NotSideToMove(mv.from));
            }
        }
        let captured = move_gen::apply_move(&mut self.board, mv)?;
        self.selection = SelectionState::Idle;
        Ok(captured)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
