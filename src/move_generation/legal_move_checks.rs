//! Attack and check queries shared by the legal filter, castling, and the
//! terminal-state detectors.

use crate::errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::moves::move_generator::pseudo_legal_moves;

/// Locate the king of `color`. A missing king means a prior mutation
/// bypassed the engine's invariants and is reported as fatal.
pub fn king_square(board: &Board, color: Color) -> Result<Square, ChessErrors> {
    for (square, piece) in board.occupied_squares(color) {
        if piece.kind == PieceKind::King {
            return Ok(square);
        }
    }
    Err(ChessErrors::BoardDoesNotContainAKing(color))
}

/// True iff any piece of `attacker_color` has a pseudo-legal move ending on
/// `target`. Scans every occupied square of the attacker; correctness over
/// speed on a fixed-size board.
pub fn is_square_attacked(board: &Board, attacker_color: Color, target: Square) -> bool {
    for (square, _) in board.occupied_squares(attacker_color) {
        for candidate in pseudo_legal_moves(board, square) {
            if candidate.to == target {
                return true;
            }
        }
    }
    false
}

/// True iff the opponent's attack set contains the king square of `color`.
pub fn is_in_check(board: &Board, color: Color) -> Result<bool, ChessErrors> {
    let king = king_square(board, color)?;
    Ok(is_square_attacked(board, color.opposite(), king))
}
