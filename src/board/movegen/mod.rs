//! Legal move generation.
//!
//! Each piece kind contributes pseudo-legal destinations; the legality
//! filter then simulates every candidate and drops those that leave the
//! mover's king attacked. Generation always takes the origin square as an
//! argument and never depends on any selection state.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Move, Piece, Square, SquareSet, PROMOTION_PIECES};
use sliders::SliderType;

impl Board {
    /// Destinations the piece on `from` could reach by its movement pattern,
    /// ignoring king safety (castling preconditions are included).
    pub(crate) fn pseudo_destinations(&self, from: Square) -> SquareSet {
        let Some(piece) = self.piece_at(from) else {
            return SquareSet::EMPTY;
        };
        match piece.kind {
            Piece::Pawn => self.pawn_destinations(from, piece),
            Piece::Knight => self.knight_destinations(from, piece.color),
            Piece::King => self.king_destinations(from, piece),
            kind => match SliderType::of(kind) {
                Some(slider) => self.slider_destinations(from, piece.color, slider),
                None => SquareSet::EMPTY,
            },
        }
    }

    /// Legal destinations for the piece on `from`, whichever side it
    /// belongs to. Empty for an empty square.
    ///
    /// Needs `&mut self` for the simulate-and-restore check; the board is
    /// identical before and after the call.
    pub fn legal_destinations(&mut self, from: Square) -> SquareSet {
        let mut legal = SquareSet::EMPTY;
        for to in self.pseudo_destinations(from) {
            if !self.leaves_king_in_check(from, to) {
                legal.insert(to);
            }
        }
        legal
    }

    /// Whether `from -> to` is a legal move for the piece on `from`.
    pub fn is_legal_destination(&mut self, from: Square, to: Square) -> bool {
        self.pseudo_destinations(from).contains(to) && !self.leaves_king_in_check(from, to)
    }

    /// Whether `color` has at least one legal move. Stops at the first one
    /// found.
    pub fn has_legal_moves(&mut self, color: Color) -> bool {
        let origins: Vec<Square> = self.pieces(color).map(|(sq, _)| sq).collect();
        for from in origins {
            for to in self.pseudo_destinations(from) {
                if !self.leaves_king_in_check(from, to) {
                    return true;
                }
            }
        }
        false
    }

    /// Every legal move for the side to move. A promoting pawn move appears
    /// once per promotion choice.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let color = self.side_to_move;
        let origins: Vec<(Square, Piece)> = self.pieces(color).map(|(sq, p)| (sq, p.kind)).collect();
        let mut moves = Vec::with_capacity(48);

        for (from, kind) in origins {
            for to in self.legal_destinations(from) {
                if kind == Piece::Pawn && to.row() == color.pawn_promotion_row() {
                    moves.extend(
                        PROMOTION_PIECES
                            .iter()
                            .map(|&promo| Move::with_promotion(from, to, promo)),
                    );
                } else {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            let mut child = self.clone();
            if child.make_move(m).is_some() {
                nodes += child.perft(depth - 1);
            }
        }

        nodes
    }
}
