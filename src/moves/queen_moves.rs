use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, Square};
use crate::moves::motion::slide_in_directions;

/// Union of the rook and bishop direction sets.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub fn generate_queen_moves(board: &Board, from: Square, out: &mut Vec<ChessMove>) {
    slide_in_directions(board, from, &QUEEN_DIRECTIONS, out);
}
