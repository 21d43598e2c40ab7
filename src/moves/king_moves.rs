use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, Square};
use crate::moves::motion::step_to_offsets;

/// One step in each of the eight neighboring directions; no sliding.
/// Castling is not generated here — it depends on `has_moved` history and
/// attack state, so the legal filter appends it.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub fn generate_king_moves(board: &Board, from: Square, out: &mut Vec<ChessMove>) {
    step_to_offsets(board, from, &KING_OFFSETS, out);
}
