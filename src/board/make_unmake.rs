//! Move execution and the restoring simulation used by the legality filter.

use super::state::EnPassant;
use super::{Board, BoardPiece, CastlingSide, Color, Move, Piece, Square};

/// What a call to [`Board::apply_move`] did to the board.
///
/// Side to move is left untouched; the caller decides when the turn is
/// over (after the promotion choice, if one is pending).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub color: Color,
    pub captured: Option<Piece>,
    pub castle: Option<CastlingSide>,
    pub is_en_passant: bool,
    pub promotion_pending: bool,
}

impl AppliedMove {
    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Snapshot taken by [`Board::simulate_move`]; hand it back to
/// [`Board::undo_simulation`] to restore the exact prior board.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SimulationInfo {
    from: Square,
    to: Square,
    moved: BoardPiece,
    captured: Option<BoardPiece>,
    en_passant_victim: Option<(Square, BoardPiece)>,
    previous_kings: [Option<Square>; 2],
}

/// Undoes a simulated move when dropped, including when the code holding
/// it unwinds.
struct SimulationGuard<'a> {
    board: &'a mut Board,
    info: SimulationInfo,
}

impl Drop for SimulationGuard<'_> {
    fn drop(&mut self) {
        self.board.undo_simulation(self.info);
    }
}

impl Board {
    /// The en-passant pair a pawn move from `from` to `to` would capture
    /// through, if it is one.
    pub(crate) fn en_passant_capture(&self, piece: BoardPiece, from: Square, to: Square) -> Option<EnPassant> {
        if piece.kind != Piece::Pawn || from.col() == to.col() || !self.is_empty(to) {
            return None;
        }
        self.en_passant.filter(|ep| ep.target == to)
    }

    /// Execute a pseudo-legal move for the piece on `from`.
    ///
    /// Handles en-passant removal, the castling rook, the new en-passant pair
    /// after a double step, `has_moved` and the king cache. Returns `None` if
    /// `from` is empty. Legality is the caller's concern.
    pub(crate) fn apply_move(&mut self, from: Square, to: Square) -> Option<AppliedMove> {
        let mut moving = self.piece_at(from)?;
        let color = moving.color;
        let previous_en_passant = self.en_passant_capture(moving, from, to);
        self.en_passant = None;

        let captured = match previous_en_passant {
            Some(ep) => self.take(ep.pawn),
            None => self.take(to),
        };

        let castle = if moving.kind == Piece::King && from.col().abs_diff(to.col()) == 2 {
            let side = if to.col() > from.col() {
                CastlingSide::KingSide
            } else {
                CastlingSide::QueenSide
            };
            let rook_from = Square(from.row(), side.rook_from_col());
            if let Some(mut rook) = self.take(rook_from) {
                rook.has_moved = true;
                self.set(Square(from.row(), side.rook_to_col()), Some(rook));
            }
            Some(side)
        } else {
            None
        };

        if moving.kind == Piece::Pawn && from.row().abs_diff(to.row()) == 2 {
            self.en_passant = Some(EnPassant::behind(to, color));
        }

        self.take(from);
        moving.has_moved = true;
        self.set(to, Some(moving));
        if moving.kind == Piece::King {
            self.set_king_square(color, Some(to));
        }
        if captured.is_some_and(|p| p.kind == Piece::King) {
            self.refresh_king_cache();
        }

        Some(AppliedMove {
            from,
            to,
            piece: moving.kind,
            color,
            captured: captured.map(|p| p.kind),
            castle,
            is_en_passant: previous_en_passant.is_some(),
            promotion_pending: moving.kind == Piece::Pawn && to.row() == color.pawn_promotion_row(),
        })
    }

    /// Replace the pawn on `sq` with `piece`, keeping its color.
    pub(crate) fn promote(&mut self, sq: Square, piece: Piece) {
        if let Some(occupant) = self.squares[sq.0][sq.1].as_mut() {
            occupant.kind = piece;
            occupant.has_moved = true;
        }
    }

    /// Apply a complete move and hand the turn over. A promotion without a
    /// chosen piece becomes a queen.
    ///
    /// Legality is not checked; take moves from [`Board::legal_moves`].
    pub fn make_move(&mut self, mv: Move) -> Option<AppliedMove> {
        let applied = self.apply_move(mv.from, mv.to)?;
        if applied.promotion_pending {
            self.promote(mv.to, mv.promotion.unwrap_or(Piece::Queen));
        }
        self.pass_turn();
        Some(applied)
    }

    /// Move the piece on `from` to `to` for a king-safety check.
    ///
    /// Only piece placement and the king cache change: castling rooks,
    /// `has_moved`, en-passant state and side to move are left alone.
    pub(crate) fn simulate_move(&mut self, from: Square, to: Square) -> Option<SimulationInfo> {
        let moved = self.piece_at(from)?;
        let previous_kings = self.kings;

        let en_passant_victim = self
            .en_passant_capture(moved, from, to)
            .and_then(|ep| self.take(ep.pawn).map(|victim| (ep.pawn, victim)));
        let captured = self.take(to);

        self.take(from);
        self.set(to, Some(moved));
        if moved.kind == Piece::King {
            self.set_king_square(moved.color, Some(to));
        }

        Some(SimulationInfo {
            from,
            to,
            moved,
            captured,
            en_passant_victim,
            previous_kings,
        })
    }

    pub(crate) fn undo_simulation(&mut self, info: SimulationInfo) {
        self.set(info.to, info.captured);
        self.set(info.from, Some(info.moved));
        if let Some((sq, victim)) = info.en_passant_victim {
            self.set(sq, Some(victim));
        }
        self.kings = info.previous_kings;
    }

    /// Run `inspect` against the board as it would be after `from -> to`, then
    /// restore it. Returns `None` if `from` is empty.
    pub(crate) fn with_simulated_move<R>(
        &mut self,
        from: Square,
        to: Square,
        inspect: impl FnOnce(&Board) -> R,
    ) -> Option<R> {
        let info = self.simulate_move(from, to)?;
        let guard = SimulationGuard { board: self, info };
        Some(inspect(&*guard.board))
    }

    /// Whether moving the piece on `from` to `to` would leave its own king
    /// attacked.
    pub(crate) fn leaves_king_in_check(&mut self, from: Square, to: Square) -> bool {
        let Some(color) = self.color_on(from) else {
            return false;
        };
        self.with_simulated_move(from, to, |board| board.is_in_check(color))
            .unwrap_or(false)
    }
}
