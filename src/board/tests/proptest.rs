//! Property-based tests using proptest.

use crate::board::{Board, Color, Move, Piece, PositionStatus, Square};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the start position.
fn random_position(seed: u64, num_moves: usize) -> Board {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.make_move(mv);
    }
    board
}

fn captures_king(board: &Board, mv: &Move) -> bool {
    board.piece_on(mv.to) == Some(Piece::King)
}

proptest! {
    /// Property: legal moves are always legal (no self-check)
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = random_position(seed, num_moves);
        let mover = board.side_to_move();

        for mv in board.legal_moves() {
            prop_assert!(!captures_king(&board, &mv), "king capture generated: {}", mv);
            let mut child = board.clone();
            child.make_move(mv);
            prop_assert!(!child.is_in_check(mover),
                "Legal move left king in check: {} in {}", mv, board.to_fen());
        }
    }

    /// Property: generation and status evaluation never change the board
    #[test]
    fn prop_queries_restore_board(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = random_position(seed, num_moves);
        let before = board.clone();

        let _ = board.legal_moves();
        let _ = board.status();
        for color in Color::BOTH {
            let _ = board.has_legal_moves(color);
        }
        for from in Square::all() {
            let _ = board.legal_destinations(from);
        }

        prop_assert_eq!(board, before);
    }

    /// Property: the king cache always agrees with a board scan
    #[test]
    fn prop_king_cache_matches_scan(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_position(seed, num_moves);
        for color in Color::BOTH {
            prop_assert_eq!(board.king_square(color), board.find_king(color));
        }
    }

    /// Property: status agrees with check and move availability
    #[test]
    fn prop_status_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = random_position(seed, num_moves);
        let color = board.side_to_move();
        let in_check = board.is_in_check(color);
        let no_moves = board.legal_moves().is_empty();

        let expected = PositionStatus::from_flags(in_check, !no_moves);
        prop_assert_eq!(board.status(), expected);
    }

    /// Property: SAN of every legal move parses back to the same move
    #[test]
    fn prop_san_round_trip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = random_position(seed, num_moves);

        for mv in board.legal_moves() {
            let san = board.move_to_san(&mv);
            prop_assert!(san.is_some());
            let san = san.unwrap_or_default();
            let parsed = board.parse_san(&san);
            prop_assert_eq!(parsed, Ok(mv), "SAN {} did not round-trip", san);
        }
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_position(seed, num_moves);
        let fen = board.to_fen();
        let restored = Board::try_from_fen(&fen);
        prop_assert!(restored.is_ok(), "FEN {} failed to parse", fen);
        let restored = restored.unwrap_or_default();

        prop_assert_eq!(restored.to_fen(), fen);
        prop_assert_eq!(restored.side_to_move(), board.side_to_move());
        prop_assert_eq!(restored.en_passant(), board.en_passant());
        for sq in Square::all() {
            prop_assert_eq!(restored.color_on(sq), board.color_on(sq));
            prop_assert_eq!(restored.piece_on(sq), board.piece_on(sq));
        }
    }
}
