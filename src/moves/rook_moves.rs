use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, Square};
use crate::moves::motion::slide_in_directions;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn generate_rook_moves(board: &Board, from: Square, out: &mut Vec<ChessMove>) {
    slide_in_directions(board, from, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{ChessPiece, Color, PieceKind};

    #[test]
    fn rook_on_an_empty_board_has_fourteen_moves() {
        let mut board = Board::new_empty();
        let from = Square::new(4, 4);
        board.set(from, Some(ChessPiece::new(PieceKind::Rook, Color::Dark)));

        let mut out = Vec::new();
        generate_rook_moves(&board, from, &mut out);

        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_ray_ends_on_first_enemy_piece() {
        let mut board = Board::new_empty();
        let from = Square::new(1, 1);
        board.set(from, Some(ChessPiece::new(PieceKind::Rook, Color::Light)));
        board.set(
            Square::new(1, 3),
            Some(ChessPiece::new(PieceKind::Knight, Color::Dark)),
        );

        let mut out = Vec::new();
        generate_rook_moves(&board, from, &mut out);

        assert!(out.contains(&ChessMove::new(from, Square::new(1, 3))));
        assert!(!out.contains(&ChessMove::new(from, Square::new(1, 4))));
    }
}
