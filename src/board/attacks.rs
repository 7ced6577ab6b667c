//! Square attack detection.
//!
//! Pure queries over the current board: nothing here mutates state, so the
//! legality filter can call them in the middle of a simulated move.

use super::{Board, Color, Piece, Square};

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    /// Walk one ray outward from `from` and return the first occupied square.
    pub(crate) fn first_blocker(&self, from: Square, (d_row, d_col): (isize, isize)) -> Option<Square> {
        let mut sq = from;
        while let Some(next) = sq.offset(d_row, d_col) {
            if !self.is_empty(next) {
                return Some(next);
            }
            sq = next;
        }
        None
    }

    fn attacked_along(
        &self,
        square: Square,
        by: Color,
        directions: &[(isize, isize); 4],
        slider: fn(Piece) -> bool,
    ) -> bool {
        directions.iter().any(|&dir| {
            self.first_blocker(square, dir)
                .and_then(|sq| self.piece_at(sq))
                .is_some_and(|p| p.color == by && slider(p.kind))
        })
    }

    fn attacked_by_leaper(
        &self,
        square: Square,
        by: Color,
        offsets: &[(isize, isize)],
        kind: Piece,
    ) -> bool {
        offsets.iter().any(|&(dr, dc)| {
            square
                .offset(dr, dc)
                .and_then(|sq| self.piece_at(sq))
                .is_some_and(|p| p.is(kind, by))
        })
    }

    /// Whether any piece of color `by` attacks `square`.
    ///
    /// Occupancy of `square` itself is irrelevant.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        // A pawn of `by` attacks from one row behind the target, seen from its side.
        let pawn_row = -by.pawn_direction();
        if self.attacked_by_leaper(square, by, &[(pawn_row, -1), (pawn_row, 1)], Piece::Pawn) {
            return true;
        }

        if self.attacked_by_leaper(square, by, &KNIGHT_OFFSETS, Piece::Knight) {
            return true;
        }

        if self.attacked_by_leaper(square, by, &KING_OFFSETS, Piece::King) {
            return true;
        }

        if self.attacked_along(square, by, &ROOK_DIRECTIONS, Piece::attacks_straight) {
            return true;
        }

        self.attacked_along(square, by, &BISHOP_DIRECTIONS, Piece::attacks_diagonally)
    }

    /// Whether `color`'s king is attacked. A board without that king is never
    /// in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None => false,
        }
    }
}
