use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, Square};
use crate::moves::motion::step_to_offsets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn generate_knight_moves(board: &Board, from: Square, out: &mut Vec<ChessMove>) {
    step_to_offsets(board, from, &KNIGHT_OFFSETS, out);
}
