use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, Square};
use crate::moves::motion::slide_in_directions;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn generate_bishop_moves(board: &Board, from: Square, out: &mut Vec<ChessMove>) {
    slide_in_directions(board, from, &BISHOP_DIRECTIONS, out);
}
