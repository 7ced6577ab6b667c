//! Turn-based game controller.
//!
//! [`Game`] owns the [`Board`], the move history and the game status, and
//! is the only way a host (UI, network peer, clock) changes a position. A
//! pawn reaching the last rank suspends the turn until [`Game::promote`]
//! supplies the piece; only then is the move recorded and the turn passed.
//!
//! # Example
//! ```
//! use chess_rules::board::Square;
//! use chess_rules::game::{Game, GameStatus, MoveOutcome};
//!
//! let mut game = Game::new();
//! let outcome = game.play(Square(1, 4), Square(3, 4)).unwrap();
//! assert!(matches!(outcome, MoveOutcome::Completed(ref record) if record.notation == "e4"));
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert_eq!(game.last_descriptor().unwrap().to_bytes(), [1, 6, 4, 4, 4, 0]);
//! ```

mod descriptor;
mod error;
mod history;

use std::fmt;
use std::mem;

use log::{debug, info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    AppliedMove, Board, BoardPiece, Color, Disambiguation, MoveRecord, Piece, PositionStatus,
    Square, SquareSet,
};

pub use descriptor::{MoveDescriptor, MOVE_MESSAGE_LEN, MOVE_MESSAGE_TAG};
pub use error::{DescriptorError, MoveError};
pub use history::MoveHistory;

/// Status of the game as seen by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    /// A pawn reached the last rank and the promotion piece is pending.
    Promoting,
    /// The clock ran out for `flagged`.
    Timeout { flagged: Color },
}

impl GameStatus {
    /// Whether a new move may be requested.
    #[inline]
    #[must_use]
    pub const fn accepts_moves(self) -> bool {
        matches!(self, GameStatus::Playing | GameStatus::Check)
    }

    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Timeout { .. }
        )
    }
}

impl From<PositionStatus> for GameStatus {
    fn from(status: PositionStatus) -> Self {
        match status {
            PositionStatus::Playing => GameStatus::Playing,
            PositionStatus::Check => GameStatus::Check,
            PositionStatus::Checkmate => GameStatus::Checkmate,
            PositionStatus::Stalemate => GameStatus::Stalemate,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => f.write_str("playing"),
            GameStatus::Check => f.write_str("check"),
            GameStatus::Checkmate => f.write_str("checkmate"),
            GameStatus::Stalemate => f.write_str("stalemate"),
            GameStatus::Promoting => f.write_str("promoting"),
            GameStatus::Timeout { flagged } => write!(f, "timeout ({flagged} flagged)"),
        }
    }
}

/// A pawn move that has been executed on the board but not yet recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingPromotion {
    applied: AppliedMove,
    disambiguation: Disambiguation,
}

impl PendingPromotion {
    #[must_use]
    pub fn from(&self) -> Square {
        self.applied.from
    }

    #[must_use]
    pub fn to(&self) -> Square {
        self.applied.to
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.applied.color
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.applied.is_capture()
    }
}

/// Where the turn currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TurnPhase {
    #[default]
    AwaitingMove,
    AwaitingPromotion(PendingPromotion),
}

/// Result of a successful move request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The turn is complete; the record is already in the history.
    Completed(MoveRecord),
    /// The pawn is on the last rank; call [`Game::promote`] to finish.
    PromotionPending(PendingPromotion),
}

impl MoveOutcome {
    #[must_use]
    pub fn record(&self) -> Option<&MoveRecord> {
        match self {
            MoveOutcome::Completed(record) => Some(record),
            MoveOutcome::PromotionPending(_) => None,
        }
    }
}

/// One game: board, turn phase, status and history.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    phase: TurnPhase,
    status: GameStatus,
    history: MoveHistory,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A new game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game::from_board(Board::new())
    }

    /// A new game from an arbitrary position; status is evaluated for the
    /// side to move.
    #[must_use]
    pub fn from_board(mut board: Board) -> Self {
        let status = GameStatus::from(board.status());
        info!("new game, {} to move, status {status}", board.side_to_move());
        Game {
            board,
            phase: TurnPhase::AwaitingMove,
            status,
            history: MoveHistory::new(),
        }
    }

    /// Back to the starting position with an empty history.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.phase = TurnPhase::AwaitingMove;
        self.status = GameStatus::Playing;
        self.history.clear();
        info!("game reset");
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<BoardPiece> {
        self.board.piece_at(sq)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// The last completed move in wire form, for sending to a peer.
    #[must_use]
    pub fn last_descriptor(&self) -> Option<MoveDescriptor> {
        self.history.last().map(MoveDescriptor::from)
    }

    /// Legal destinations for a piece the side to move may select. Empty
    /// when the game is not accepting moves, `from` is off the board or
    /// holds no such piece.
    pub fn legal_destinations(&mut self, from: Square) -> SquareSet {
        if self.selectable(from).is_err() {
            return SquareSet::EMPTY;
        }
        self.board.legal_destinations(from)
    }

    pub fn is_legal_destination(&mut self, from: Square, to: Square) -> bool {
        self.selectable(from).is_ok() && self.board.is_legal_destination(from, to)
    }

    fn selectable(&self, from: Square) -> Result<BoardPiece, MoveError> {
        if !self.status.accepts_moves() {
            return Err(MoveError::NotAcceptingInput {
                status: self.status,
            });
        }
        if !from.is_on_board() {
            return Err(MoveError::OffBoard { square: from });
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptyOrigin { square: from })?;
        let to_move = self.board.side_to_move();
        if piece.color != to_move {
            return Err(MoveError::WrongColor {
                square: from,
                to_move,
            });
        }
        Ok(piece)
    }

    /// Play `from -> to` for the side to move.
    ///
    /// A move onto the last rank with a pawn stops in
    /// [`TurnPhase::AwaitingPromotion`]; nothing is recorded until
    /// [`Game::promote`].
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        self.selectable(from)?;
        if !to.is_on_board() {
            return Err(MoveError::OffBoard { square: to });
        }
        if !self.board.is_legal_destination(from, to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        let disambiguation = self.board.disambiguation_for(from, to);
        let applied = self
            .board
            .apply_move(from, to)
            .ok_or(MoveError::EmptyOrigin { square: from })?;

        if applied.promotion_pending {
            let pending = PendingPromotion {
                applied,
                disambiguation,
            };
            self.phase = TurnPhase::AwaitingPromotion(pending);
            self.status = GameStatus::Promoting;
            debug!("{} pawn reached {to}, awaiting promotion choice", applied.color);
            return Ok(MoveOutcome::PromotionPending(pending));
        }

        Ok(MoveOutcome::Completed(self.finish_turn(&applied, disambiguation, None)))
    }

    /// Supply the piece for a pending promotion and complete the turn.
    ///
    /// Rejected once the game is over, even with the pawn still waiting on
    /// the last rank.
    pub fn promote(&mut self, piece: Piece) -> Result<MoveRecord, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::NotAcceptingInput {
                status: self.status,
            });
        }
        let TurnPhase::AwaitingPromotion(pending) = self.phase else {
            return Err(MoveError::NoPromotionPending);
        };
        if !piece.is_promotion_choice() {
            return Err(MoveError::InvalidPromotionPiece { piece });
        }

        self.phase = TurnPhase::AwaitingMove;
        self.board.promote(pending.to(), piece);
        debug!("promoted on {} to {piece:?}", pending.to());
        Ok(self.finish_turn(&pending.applied, pending.disambiguation, Some(piece)))
    }

    /// Pass the turn, evaluate the new position, backfill the check suffix
    /// and record.
    fn finish_turn(
        &mut self,
        applied: &AppliedMove,
        disambiguation: Disambiguation,
        promotion: Option<Piece>,
    ) -> MoveRecord {
        let mut record = MoveRecord::from_applied(applied, disambiguation, promotion);
        self.board.pass_turn();

        let position = self.board.status();
        record.set_outcome(position);
        self.history.record(record.clone());
        debug!(
            "{} played {} ({}{})",
            applied.color, record.notation, applied.from, applied.to
        );

        let previous = mem::replace(&mut self.status, GameStatus::from(position));
        if previous != self.status {
            debug!("status {previous} -> {}", self.status);
        }
        if self.status.is_over() {
            info!("game over: {} after {}", self.status, self.history);
        }
        record
    }

    /// Replay a move received from a remote peer.
    ///
    /// The descriptor is checked against the legal destinations exactly like
    /// a local request; a rejected descriptor leaves the game untouched. A
    /// non-zero promotion code completes a promotion in the same call and is
    /// malformed on any other move.
    pub fn apply_descriptor(&mut self, desc: MoveDescriptor) -> Result<MoveOutcome, MoveError> {
        let result = self.replay(desc);
        if let Err(err) = &result {
            warn!("rejected remote move {desc}: {err}");
        }
        result
    }

    fn replay(&mut self, desc: MoveDescriptor) -> Result<MoveOutcome, MoveError> {
        let mv = desc.to_move()?;
        let mover = self.selectable(mv.from)?;
        let promotes =
            mover.kind == Piece::Pawn && mv.to.row() == mover.color.pawn_promotion_row();
        if mv.promotion.is_some() && !promotes {
            return Err(DescriptorError::UnexpectedPromotion {
                code: desc.promotion,
            }
            .into());
        }
        match self.play(mv.from, mv.to)? {
            MoveOutcome::PromotionPending(pending) => match mv.promotion {
                Some(piece) => self.promote(piece).map(MoveOutcome::Completed),
                None => Ok(MoveOutcome::PromotionPending(pending)),
            },
            completed => Ok(completed),
        }
    }

    /// The clock reports that `color` ran out of time. Ignored once the game
    /// is already over.
    pub fn flag(&mut self, color: Color) {
        if self.status.is_over() {
            return;
        }
        self.status = GameStatus::Timeout { flagged: color };
        info!("game over: {color} flagged after {} moves", self.history.len());
    }
}
