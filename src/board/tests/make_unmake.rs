//! Move execution and simulate/restore tests.

use crate::board::{Board, CastlingSide, Color, Move, Piece, Square};
use rand::prelude::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Probe every pseudo-legal destination of every piece and check that the
/// board comes back bit-for-bit.
fn assert_legality_checks_restore(board: &mut Board) {
    let before = board.clone();
    let origins: Vec<Square> = Color::BOTH
        .iter()
        .flat_map(|&c| board.pieces(c).map(|(s, _)| s).collect::<Vec<_>>())
        .collect();
    for from in origins {
        for to in board.pseudo_destinations(from) {
            let _ = board.leaves_king_in_check(from, to);
            assert_eq!(*board, before, "legality check {from}{to} leaked state");
        }
        let _ = board.legal_destinations(from);
        assert_eq!(*board, before);
    }
}

#[test]
fn test_legality_checks_restore_en_passant_position() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    assert_legality_checks_restore(&mut board);
}

#[test]
fn test_legality_checks_restore_kiwipete() {
    let mut board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    assert_legality_checks_restore(&mut board);
}

#[test]
fn test_status_evaluation_restores_board() {
    let mut board = Board::from_fen("7k/7P/6K1/8/8/8/8/8 b - - 0 1");
    let before = board.clone();
    let _ = board.status();
    let _ = board.has_legal_moves(Color::White);
    assert_eq!(board, before);
}

#[test]
fn test_castling_execution_marks_rook() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    let applied = board.make_move(Move::new(sq("e8"), sq("g8"))).unwrap();
    assert_eq!(applied.castle, Some(CastlingSide::KingSide));
    let rook = board.piece_at(sq("f8")).unwrap();
    assert!(rook.is(Piece::Rook, Color::Black));
    assert!(rook.has_moved);
    assert!(board.is_empty(sq("h8")));
    assert_eq!(board.king_square(Color::Black), Some(sq("g8")));
    assert_eq!(board.side_to_move(), Color::White);
}

#[test]
fn test_king_cache_follows_random_games() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..8 {
        let mut board = Board::new();
        for _ in 0..60 {
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            board.make_move(mv).unwrap();
            for color in Color::BOTH {
                assert_eq!(board.king_square(color), board.find_king(color));
            }
        }
    }
}

#[test]
fn test_capture_records_victim() {
    let mut board = Board::new();
    for text in ["e2e4", "d7d5"] {
        board.make_move(text.parse().unwrap()).unwrap();
    }
    let applied = board.make_move(Move::new(sq("e4"), sq("d5"))).unwrap();
    assert_eq!(applied.captured, Some(Piece::Pawn));
    assert!(!applied.is_en_passant);
    assert_eq!(board.pieces(Color::Black).count(), 15);
}
