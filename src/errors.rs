//! Errors used throughout the rules engine.
//!
//! This module defines the canonical error type returned by game logic and
//! the legal-move pipeline. The enum `ChessErrors` is used as the single
//! error type across the crate to simplify propagation and matching. Each
//! variant carries contextual information where appropriate to aid
//! diagnostics and user-facing error messages.
//!
//! Usage guidelines:
//! - Functions in the engine return `Result<..., ChessErrors>` for expected
//!   failure modes (a move submitted out of turn, a move outside the legal
//!   set, etc). The game state is left untouched on every such failure.
//! - `BoardDoesNotContainAKing` indicates a corrupted or hand-built position
//!   that violates the engine's invariants; it is not intended to be
//!   recovered from by normal library users.

use crate::game_state::chess_types::{ChessMove, Color, Square};

/// Unified error type for the rules engine.
///
/// The illegal-move variants are domain-level rejections: the caller must
/// submit a different move, and the `GameState` that produced them is
/// unchanged. The invariant variant signals an internal-consistency failure
/// and should be treated as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessErrors {
    /// `make_move` was invoked with an empty origin square.
    ///
    /// Payload: the empty square.
    TryingToMoveFromEmptySquare(Square),

    /// The piece on the origin square does not belong to the side to move.
    ///
    /// Payload: (origin square, color of the piece found there).
    MoveOutOfTurn((Square, Color)),

    /// The submitted move is not a member of the legal set for its origin.
    ///
    /// Payload: the rejected move.
    MoveNotInLegalSet(ChessMove),

    /// Applying the move left the mover's own king attacked. The board has
    /// been fully restored before this is reported.
    ///
    /// Payload: the rejected move.
    MoveLeavesKingInCheck(ChessMove),

    /// No king of the given color was found during a check query.
    ///
    /// This represents a corrupted or invalid game state; the engine never
    /// produces a position missing a king, so a prior mutation must have
    /// bypassed its invariants.
    BoardDoesNotContainAKing(Color),
}
