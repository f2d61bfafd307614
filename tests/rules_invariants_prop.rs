//! Property tests for move generation and the selection state machine.
//!
//! Positions are random scatters of pieces, not necessarily reachable in a
//! real game; the rules must hold for them all the same.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use xiangqi_rules::move_gen::{all_legal_moves, legal_moves};
use xiangqi_rules::{Board, Game, Piece, RulesError, SelectionState, Snapshot, Square};

fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    let cell = prop_oneof![5 => Just(0i8), 1 => -7i8..=7];
    prop::collection::vec(cell, 90).prop_map(|cells| {
        let mut codes = [[0i8; 9]; 10];
        for (i, code) in cells.into_iter().enumerate() {
            codes[i / 9][i % 9] = code;
        }
        codes
    })
}

fn rotate_and_negate(codes: &Snapshot) -> Snapshot {
    let mut out = [[0i8; 9]; 10];
    for row in 0..10 {
        for col in 0..9 {
            out[9 - row][8 - col] = -codes[row][col];
        }
    }
    out
}

proptest! {
    #[test]
    fn destinations_are_on_board_and_never_allied(codes in snapshot_strategy()) {
        let board = Board::from_codes(&codes).unwrap();
        for (from, piece) in board.pieces() {
            let moves = legal_moves(&board, from);
            let unique: BTreeSet<Square> = moves.iter().copied().collect();
            prop_assert_eq!(unique.len(), moves.len());
            for &to in &moves {
                prop_assert!(Board::is_in_board(to.col() as i32, to.row() as i32));
                prop_assert_ne!(to, from);
                prop_assert!(!Board::is_ally(Some(piece), board[to]));
            }
        }
    }

    #[test]
    fn generation_is_deterministic(codes in snapshot_strategy()) {
        let board = Board::from_codes(&codes).unwrap();
        let copy = board.clone();
        for sq in Square::all() {
            prop_assert_eq!(legal_moves(&board, sq), legal_moves(&copy, sq));
        }
    }

    #[test]
    fn rules_mirror_between_the_sides(codes in snapshot_strategy()) {
        let board = Board::from_codes(&codes).unwrap();
        let mirror = Board::from_codes(&rotate_and_negate(&codes)).unwrap();
        for (from, _) in board.pieces() {
            let expected: BTreeSet<Square> =
                legal_moves(&board, from).iter().map(|sq| sq.rotated()).collect();
            let actual: BTreeSet<Square> =
                legal_moves(&mirror, from.rotated()).iter().copied().collect();
            prop_assert_eq!(expected, actual, "piece on {}", from);
        }
    }

    #[test]
    fn rejected_calls_leave_the_game_untouched(codes in snapshot_strategy(), col in 0i32..9, row in 0i32..10) {
        let mut game = Game::from_board(Board::from_codes(&codes).unwrap());
        let before = game.board_snapshot();
        let side = game.side_to_move();

        match game.select(col, row) {
            Ok(SelectionState::PieceSelected { .. }) => {
                prop_assert_eq!(game.select(col, row), Ok(SelectionState::Idle));
            }
            Ok(SelectionState::Idle) => prop_assert!(false, "fresh select cannot deselect"),
            Err(RulesError::EmptyCellSelected(_)) => prop_assert_eq!(codes[row as usize][col as usize], 0),
            Err(RulesError::NotSideToMove(_)) => {
                let piece = Piece::from_code(codes[row as usize][col as usize]).unwrap().unwrap();
                prop_assert_ne!(piece.side, side);
            }
            Err(other) => prop_assert!(false, "unexpected {other}"),
        }
        prop_assert_eq!(game.selection(), &SelectionState::Idle);
        prop_assert_eq!(game.board_snapshot(), before);
        prop_assert_eq!(game.side_to_move(), side);
    }

    #[test]
    fn quiet_moves_undo_exactly(seed in any::<u64>(), plies in 1usize..60) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();
        for _ in 0..plies {
            let Some(mv) = game.random_move(&mut rng) else { break };
            let before = game.board().clone();

            let captured = game.play(mv).unwrap();
            prop_assert_eq!(captured, before[mv.to]);
            prop_assert_eq!(game.side_to_move(), before.side_to_move().opponent());
            prop_assert_eq!(game.board()[mv.to], before[mv.from]);
            prop_assert_eq!(game.board()[mv.from], None);

            if captured.is_none() {
                let back = mv.reversed();
                let mut undone = game.board().clone();
                undone.move_piece(back.from, back.to);
                prop_assert_eq!(undone, before);
            }
        }
    }
}

#[test]
fn every_opening_move_is_selectable_and_playable() {
    let opening = Game::new();
    for mv in all_legal_moves(opening.board()) {
        let mut game = opening.clone();
        game.select(mv.from.col() as i32, mv.from.row() as i32).unwrap();
        assert_eq!(
            game.choose_destination(mv.to.col() as i32, mv.to.row() as i32),
            Ok(SelectionState::Idle),
            "{mv}"
        );
        assert_ne!(game.board_snapshot(), opening.board_snapshot());
    }
}
