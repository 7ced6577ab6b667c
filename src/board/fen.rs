use std::str::FromStr;

use super::error::{FenError, FenField};
use super::state::EnPassant;
use super::{Board, BoardPiece, CastlingSide, Color, Piece, Square};

/// Castling letter for a side, uppercase for White.
fn castling_char(color: Color, side: CastlingSide) -> char {
    let c = match side {
        CastlingSide::KingSide => 'k',
        CastlingSide::QueenSide => 'q',
    };
    if color == Color::White {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Castling letters become `has_moved` flags on the king and rooks; the
    /// halfmove and fullmove fields are accepted but not used.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let mut fields = fen.split_whitespace();
        let mut next_field =
            |field: FenField| fields.next().ok_or(FenError::MissingField(field));
        let placement = next_field(FenField::Placement)?;
        let side_to_move = next_field(FenField::SideToMove)?;
        let castling = next_field(FenField::Castling)?;
        let en_passant = next_field(FenField::EnPassant)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.into_iter().enumerate() {
            let row = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::UnknownPiece { letter: c })?;
                let color = if c.is_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file >= 8 {
                    return Err(FenError::RankWidth {
                        rank: row + 1,
                        files: file + 1,
                    });
                }
                let mut occupant = BoardPiece::new(piece, color);
                // Castling pieces are settled below; a pawn off its start row has moved.
                occupant.has_moved = match piece {
                    Piece::King | Piece::Rook => true,
                    Piece::Pawn => row != color.pawn_start_row(),
                    _ => false,
                };
                board.set(Square(row, file), Some(occupant));
                file += 1;
            }
            if file != 8 {
                return Err(FenError::RankWidth {
                    rank: row + 1,
                    files: file,
                });
            }
        }

        board.side_to_move = match side_to_move {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::SideToMove {
                    text: other.to_string(),
                })
            }
        };

        for letter in castling.chars() {
            let (color, side) = match letter {
                'K' => (Color::White, CastlingSide::KingSide),
                'Q' => (Color::White, CastlingSide::QueenSide),
                'k' => (Color::Black, CastlingSide::KingSide),
                'q' => (Color::Black, CastlingSide::QueenSide),
                '-' => continue,
                _ => return Err(FenError::CastlingLetter { letter }),
            };
            let row = color.back_row();
            let king = Square(row, 4);
            let rook = Square(row, side.rook_from_col());
            let home = |sq: Square, kind: Piece| board.piece_at(sq).is_some_and(|p| p.is(kind, color));
            if !home(king, Piece::King) || !home(rook, Piece::Rook) {
                return Err(FenError::CastlingPiecesMissing { letter });
            }
            board.mark_unmoved(king);
            board.mark_unmoved(rook);
        }

        board.en_passant = if en_passant == "-" {
            None
        } else {
            let target: Square = en_passant.parse().map_err(FenError::EnPassantSquare)?;
            Some(board.passed_pawn(target)?)
        };

        board.refresh_king_cache();
        Ok(board)
    }

    /// The en passant pair for `target`: the side that just moved must have a
    /// pawn on its double-step row directly in front of the target.
    fn passed_pawn(&self, target: Square) -> Result<EnPassant, FenError> {
        let mover = self.side_to_move.opponent();
        let skipped_row = mover.pawn_start_row() as isize + mover.pawn_direction();
        let pawn = target.offset(mover.pawn_direction(), 0);
        match pawn {
            Some(pawn)
                if target.row() as isize == skipped_row
                    && self.piece_at(pawn).is_some_and(|p| p.is(Piece::Pawn, mover)) =>
            {
                Ok(EnPassant::behind(pawn, mover))
            }
            _ => Err(FenError::NoEnPassantPawn { target }),
        }
    }

    fn mark_unmoved(&mut self, sq: Square) {
        if let Some(occupant) = self.squares[sq.0][sq.1].as_mut() {
            occupant.has_moved = false;
        }
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Whether the king and rook involved in castling on `side` are both
    /// still unmoved and in place.
    fn castling_available(&self, color: Color, side: CastlingSide) -> bool {
        let row = color.back_row();
        let unmoved = |sq: Square, kind: Piece| {
            self.piece_at(sq)
                .is_some_and(|p| p.is(kind, color) && !p.has_moved)
        };
        unmoved(Square(row, 4), Piece::King) && unmoved(Square(row, side.rook_from_col()), Piece::Rook)
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some(p) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(p.kind.to_fen_char(p.color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.side_to_move == Color::White { "w" } else { "b" };
        let mut castling = String::new();
        for color in Color::BOTH {
            for side in [CastlingSide::KingSide, CastlingSide::QueenSide] {
                if self.castling_available(color, side) {
                    castling.push(castling_char(color, side));
                }
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |ep| ep.target.to_string());

        format!("{} {} {} {} 0 1", rows.join("/"), active, castling, ep)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SquareError;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_fen_round_trip() {
        let board = Board::try_from_fen(START_FEN).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(board.to_fen(), START_FEN);
    }

    #[test]
    fn test_fen_black_to_move() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        let ep = board.en_passant().unwrap();
        assert_eq!(ep.target, Square(2, 4));
        assert_eq!(ep.pawn, Square(3, 4));
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fen_error_missing_field() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert_eq!(result, Err(FenError::MissingField(FenField::Castling)));
        assert_eq!(
            Board::try_from_fen("   "),
            Err(FenError::MissingField(FenField::Placement))
        );
    }

    #[test]
    fn test_fen_error_unknown_piece() {
        let result =
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::UnknownPiece { letter: 'x' }));
    }

    #[test]
    fn test_fen_error_side_to_move() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert_eq!(
            result,
            Err(FenError::SideToMove {
                text: "x".to_string()
            })
        );
    }

    #[test]
    fn test_fen_error_castling_letter() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert_eq!(result, Err(FenError::CastlingLetter { letter: 'X' }));
    }

    #[test]
    fn test_fen_castling_needs_king_and_rook_at_home() {
        // h1 rook missing
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN1 w KQkq - 0 1");
        assert_eq!(result, Err(FenError::CastlingPiecesMissing { letter: 'K' }));
        // Black king on d8
        let result = Board::try_from_fen("rnbk1bnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQq - 0 1");
        assert_eq!(result, Err(FenError::CastlingPiecesMissing { letter: 'q' }));
        // A White rook in the black corner does not count
        let result = Board::try_from_fen("Rnbqkbn1/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w q - 0 1");
        assert_eq!(result, Err(FenError::CastlingPiecesMissing { letter: 'q' }));
    }

    #[test]
    fn test_fen_en_passant_needs_passed_pawn() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert_eq!(
            result,
            Err(FenError::EnPassantSquare(SquareError::NotAlgebraic {
                text: "z9".to_string()
            }))
        );

        // Target with no passed pawn in front of it
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e6 0 1");
        assert_eq!(
            result,
            Err(FenError::NoEnPassantPawn {
                target: Square(5, 4)
            })
        );

        // Black pawn in front of e5, but e5 is not where a double step lands
        let result = Board::try_from_fen("4k3/8/8/8/4p3/8/8/4K3 w - e5 0 1");
        assert_eq!(
            result,
            Err(FenError::NoEnPassantPawn {
                target: Square(4, 4)
            })
        );
    }

    #[test]
    fn test_fen_error_rank_shape() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1");
        assert_eq!(result, Err(FenError::RankWidth { rank: 6, files: 9 }));
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/7/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1");
        assert_eq!(result, Err(FenError::RankWidth { rank: 6, files: 7 }));
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1");
        assert_eq!(result, Err(FenError::RankCount { found: 7 }));
    }

    #[test]
    fn test_fen_no_castling() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").unwrap();
        assert!(board.piece_at(Square(0, 4)).unwrap().has_moved);
        assert!(board.piece_at(Square(7, 0)).unwrap().has_moved);
        assert!(board.to_fen().contains(" w - - "));
    }

    #[test]
    fn test_fen_partial_castling() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
        assert!(!board.piece_at(Square(0, 7)).unwrap().has_moved);
        assert!(board.piece_at(Square(0, 0)).unwrap().has_moved);
        assert!(!board.piece_at(Square(7, 0)).unwrap().has_moved);
        assert!(board.piece_at(Square(7, 7)).unwrap().has_moved);
        assert!(!board.piece_at(Square(0, 4)).unwrap().has_moved);
        assert!(board.to_fen().contains(" w Kq - "));
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = START_FEN.parse().unwrap();
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.king_square(Color::Black), Some(Square(7, 4)));
    }

    #[test]
    fn test_move_number_fields_are_optional() {
        let board = Board::try_from_fen("8/8/8/8/8/8/8/K1k5 w - -").unwrap();
        assert_eq!(board.pieces(Color::White).count(), 1);
    }
}
