pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod move_gen;
pub mod movelist;
pub mod r#move;
pub mod square;

pub use board::{Board, Snapshot};
pub use config::Config;
pub use constants::{Language, Piece, PieceKind, Side};
pub use error::{Result, RulesError};
pub use game::{Game, SelectionState};
pub use movelist::MoveList;
pub use r#move::Move;
pub use square::Square;

#[cfg(test)]
mod tests {
    use super::board::Board;
    use super::move_gen;

    #[test]
    fn test_make_move() {
        let mut board = Board::new();
        let moves = move_gen::all_legal_moves(&board);
        let first_move = moves[0];
        let moving_piece = board[first_move.from];

        move_gen::apply_move(&mut board, first_move).unwrap();

        assert_eq!(board[first_move.to], moving_piece);
        assert_eq!(board[first_move.from], None);
    }

    #[test]
    fn test_unmake_move() {
        let mut board = Board::new();
        let before = board.snapshot();
        let moves = move_gen::all_legal_moves(&board);
        let quiet = moves
            .iter()
            .copied()
            .find(|mv| board[mv.to].is_none())
            .unwrap();

        let captured = move_gen::apply_move(&mut board, quiet).unwrap();
        let back = quiet.reversed();
        let restored = board.move_piece(back.from, back.to);

        assert_eq!(captured, None);
        assert_eq!(restored, None);
        assert_eq!(board.snapshot(), before);
    }
}
