use super::super::attacks::KING_OFFSETS;
use super::super::{Board, BoardPiece, CastlingSide, Piece, Square, SquareSet};

impl Board {
    pub(crate) fn king_destinations(&self, from: Square, king: BoardPiece) -> SquareSet {
        let mut targets: SquareSet = KING_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&to| !self.is_ally(to, king.color))
            .collect();

        for side in [CastlingSide::KingSide, CastlingSide::QueenSide] {
            if self.can_castle(from, king, side) {
                targets.insert(Square(from.row(), side.king_to_col()));
            }
        }

        targets
    }

    /// Castling preconditions: unmoved king on its home square and not in
    /// check, unmoved own rook in the corner, empty squares in between, and
    /// the transit and landing squares not attacked.
    pub(crate) fn can_castle(&self, from: Square, king: BoardPiece, side: CastlingSide) -> bool {
        let row = king.color.back_row();
        if king.has_moved || from != Square(row, 4) {
            return false;
        }

        let rook_ok = self
            .piece_at(Square(row, side.rook_from_col()))
            .is_some_and(|rook| rook.is(Piece::Rook, king.color) && !rook.has_moved);
        if !rook_ok {
            return false;
        }

        let (lo, hi) = match side {
            CastlingSide::KingSide => (5, 6),
            CastlingSide::QueenSide => (1, 3),
        };
        if (lo..=hi).any(|col| !self.is_empty(Square(row, col))) {
            return false;
        }

        let enemy = king.color.opponent();
        if self.is_in_check(king.color) {
            return false;
        }
        let transit = Square(row, side.rook_to_col());
        let landing = Square(row, side.king_to_col());
        !self.is_square_attacked(transit, enemy) && !self.is_square_attacked(landing, enemy)
    }
}
