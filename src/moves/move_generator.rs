//! Pseudo-legal dispatch over piece kinds.
//!
//! A single match replaces the virtual-dispatch hierarchy a class-based
//! design would use. The result respects geometry and capture rules but may
//! still leave the mover's own king in check; the legal filter in
//! `move_generation` is layered on top.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, PieceKind, Square};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Every pseudo-legal move for the piece occupying `square`; empty for an
/// empty square. Pure with respect to the board.
pub fn pseudo_legal_moves(board: &Board, square: Square) -> Vec<ChessMove> {
    let Some(piece) = board.get(square) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, square, &mut out),
        PieceKind::Knight => generate_knight_moves(board, square, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, square, &mut out),
        PieceKind::Rook => generate_rook_moves(board, square, &mut out),
        PieceKind::Queen => generate_queen_moves(board, square, &mut out),
        PieceKind::King => generate_king_moves(board, square, &mut out),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn empty_square_generates_nothing() {
        let game = GameState::new_game();
        assert!(pseudo_legal_moves(&game.board, Square::new(4, 4)).is_empty());
    }

    #[test]
    fn generation_leaves_the_board_untouched() {
        let game = GameState::new_game();
        let before = game.board.clone();
        for row in 1..=8 {
            for column in 1..=8 {
                pseudo_legal_moves(&game.board, Square::new(row, column));
            }
        }
        assert_eq!(game.board, before);
    }

    #[test]
    fn starting_knights_have_two_pseudo_legal_moves() {
        let game = GameState::new_game();
        assert_eq!(pseudo_legal_moves(&game.board, Square::new(1, 2)).len(), 2);
        assert_eq!(pseudo_legal_moves(&game.board, Square::new(8, 7)).len(), 2);
    }

    #[test]
    fn starting_sliders_are_fully_boxed_in() {
        let game = GameState::new_game();
        for column in [1, 3, 4] {
            assert!(pseudo_legal_moves(&game.board, Square::new(1, column)).is_empty());
        }
    }
}
