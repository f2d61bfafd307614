//! Move generation: per-piece destination rules and move application.
//!
//! Every piece handler walks the same pre-computed direction tables. The
//! tables are built once by rotating a base offset through 90 degrees.

use log::{debug, trace};
use once_cell::sync::Lazy;

use crate::board::Board;
use crate::constants::{Piece, PieceKind, Side, PALACE_COLS};
use crate::error::{Result, RulesError};
use crate::movelist::MoveList;
use crate::r#move::Move;
use crate::square::Square;

/// `(dc, dr)` column and row deltas.
pub type Offset = (i8, i8);

/// A horse step: the orthogonal leg next to the origin, and the two
/// destinations reachable through it.
#[derive(Debug, Clone, Copy)]
pub struct HorseJump {
    pub leg: Offset,
    pub targets: [Offset; 2],
}

/// Direction vectors shared by every piece handler.
pub struct DirectionTables {
    pub orthogonal: [Offset; 4],
    pub diagonal: [Offset; 4],
    pub horse: [HorseJump; 4],
    /// The five points of each palace's diagonal lattice, `[side][point]`.
    pub advisor_points: [Vec<Square>; 2],
}

fn rotate((dc, dr): Offset) -> Offset {
    (-dr, dc)
}

fn rotations(base: Offset) -> [Offset; 4] {
    let mut out = [base; 4];
    for i in 1..4 {
        out[i] = rotate(out[i - 1]);
    }
    out
}

fn side_idx(side: Side) -> usize {
    match side {
        Side::Red => 0,
        Side::Black => 1,
    }
}

impl DirectionTables {
    fn new() -> Self {
        let orthogonal = rotations((0, -1));
        let diagonal = rotations((1, -1));

        let mut horse = [HorseJump {
            leg: (0, -1),
            targets: [(-1, -2), (1, -2)],
        }; 4];
        for i in 1..4 {
            let prev = horse[i - 1];
            horse[i] = HorseJump {
                leg: rotate(prev.leg),
                targets: [rotate(prev.targets[0]), rotate(prev.targets[1])],
            };
        }

        let advisor_points = [Side::Red, Side::Black].map(|side| {
            let rows = side.palace_rows();
            let centre_row = (rows.start() + rows.end()) / 2;
            let mut points = Vec::with_capacity(5);
            for row in rows {
                for col in PALACE_COLS {
                    if (col - 4).abs() == (row - centre_row).abs() {
                        if let Ok(sq) = Square::new(col as i32, row as i32) {
                            points.push(sq);
                        }
                    }
                }
            }
            points
        });

        Self {
            orthogonal,
            diagonal,
            horse,
            advisor_points,
        }
    }
}

// Initialised on first use and shared read-only afterwards.
pub static DIRECTIONS: Lazy<DirectionTables> = Lazy::new(DirectionTables::new);

/// All legal destinations of the piece on `from`. An empty square has none.
///
/// Destinations never hold an allied piece. The order is fixed for a given
/// position: directions in table order, nearest squares first.
pub fn legal_moves(board: &Board, from: Square) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board[from] else {
        return moves;
    };

    match piece.kind {
        PieceKind::Soldier => soldier_moves(board, from, piece, &mut moves),
        PieceKind::Cannon => cannon_moves(board, from, piece, &mut moves),
        PieceKind::Chariot => chariot_moves(board, from, piece, &mut moves),
        PieceKind::Horse => horse_moves(board, from, piece, &mut moves),
        PieceKind::Elephant => elephant_moves(board, from, piece, &mut moves),
        PieceKind::Advisor => advisor_moves(board, from, piece, &mut moves),
        PieceKind::General => general_moves(board, from, piece, &mut moves),
    }

    trace!("{:?} on {} has {} destinations", piece.kind, from, moves.len());
    moves
}

/// Every legal move of the side to move, grouped by origin square.
pub fn all_legal_moves(board: &Board) -> Vec<Move> {
    let side = board.side_to_move();
    let mut moves = Vec::with_capacity(64);
    for (from, _) in board.pieces().filter(|(_, piece)| piece.side == side) {
        moves.extend(legal_moves(board, from).iter().map(|&to| Move::new(from, to)));
    }
    moves
}

/// Validates `mv` against the mover's legal destinations and plays it.
/// Returns the captured piece, if any. A rejected move leaves the board
/// untouched.
pub fn apply_move(board: &mut Board, mv: Move) -> Result<Option<Piece>> {
    let Some(piece) = board[mv.from] else {
        return Err(RulesError::EmptyCellSelected(mv.from));
    };
    if Board::is_ally(Some(piece), board[mv.to]) {
        return Err(RulesError::AlliedDestination {
            from: mv.from,
            to: mv.to,
        });
    }
    if !legal_moves(board, mv.from).contains(mv.to) {
        return Err(RulesError::IllegalDestination {
            from: mv.from,
            to: mv.to,
        });
    }

    let captured = board.move_piece(mv.from, mv.to);
    match captured {
        Some(victim) => debug!("{} {:?} {} captures {:?}", piece.side, piece.kind, mv, victim.kind),
        None => debug!("{} {:?} {}", piece.side, piece.kind, mv),
    }
    Ok(captured)
}

fn add_unless_ally(board: &Board, piece: Piece, to: Square, moves: &mut MoveList) {
    if !Board::is_ally(Some(piece), board[to]) {
        moves.add(to);
    }
}

fn soldier_moves(board: &Board, from: Square, piece: Piece, moves: &mut MoveList) {
    if let Some(to) = from.offset(0, piece.side.forward()) {
        add_unless_ally(board, piece, to, moves);
    }
    // Sideways steps only once across the river.
    if !Board::is_own_side(piece.side, from.row()) {
        for dc in [-1, 1] {
            if let Some(to) = from.offset(dc, 0) {
                add_unless_ally(board, piece, to, moves);
            }
        }
    }
}

fn cannon_moves(board: &Board, from: Square, piece: Piece, moves: &mut MoveList) {
    for &(dc, dr) in &DIRECTIONS.orthogonal {
        let mut screened = false;
        let mut cur = from;
        while let Some(next) = cur.offset(dc, dr) {
            cur = next;
            match board[next] {
                None if !screened => moves.add(next),
                None => {}
                Some(_) if !screened => screened = true,
                Some(target) => {
                    if !target.is_ally(piece) {
                        moves.add(next);
                    }
                    break;
                }
            }
        }
    }
}

fn chariot_moves(board: &Board, from: Square, piece: Piece, moves: &mut MoveList) {
    for &(dc, dr) in &DIRECTIONS.orthogonal {
        let mut cur = from;
        while let Some(next) = cur.offset(dc, dr) {
            cur = next;
            match board[next] {
                None => moves.add(next),
                Some(target) => {
                    if !target.is_ally(piece) {
                        moves.add(next);
                    }
                    break;
                }
            }
        }
    }
}

fn horse_moves(board: &Board, from: Square, piece: Piece, moves: &mut MoveList) {
    for jump in &DIRECTIONS.horse {
        let Some(leg) = from.offset(jump.leg.0, jump.leg.1) else {
            continue;
        };
        if board[leg].is_some() {
            continue;
        }
        for &(dc, dr) in &jump.targets {
            if let Some(to) = from.offset(dc, dr) {
                add_unless_ally(board, piece, to, moves);
            }
        }
    }
}

fn elephant_moves(board: &Board, from: Square, piece: Piece, moves: &mut MoveList) {
    for &(dc, dr) in &DIRECTIONS.diagonal {
        let Some(eye) = from.offset(dc, dr) else {
            continue;
        };
        if Board::is_ally(Some(piece), board[eye]) || !Board::is_own_side(piece.side, eye.row()) {
            continue;
        }
        if let Some(to) = from.offset(2 * dc, 2 * dr) {
            if Board::is_own_side(piece.side, to.row()) {
                add_unless_ally(board, piece, to, moves);
            }
        }
    }
}

fn advisor_moves(board: &Board, from: Square, piece: Piece, moves: &mut MoveList) {
    let lattice = &DIRECTIONS.advisor_points[side_idx(piece.side)];
    for &(dc, dr) in &DIRECTIONS.diagonal {
        if let Some(to) = from.offset(dc, dr) {
            if lattice.contains(&to) {
                add_unless_ally(board, piece, to, moves);
            }
        }
    }
}

fn general_moves(board: &Board, from: Square, piece: Piece, moves: &mut MoveList) {
    for &(dc, dr) in &DIRECTIONS.orthogonal {
        if let Some(to) = from.offset(dc, dr) {
            if PALACE_COLS.contains(&to.col()) && piece.side.palace_rows().contains(&to.row()) {
                add_unless_ally(board, piece, to, moves);
            }
        }
    }
}
