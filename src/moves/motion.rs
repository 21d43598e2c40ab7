//! Shared motion patterns for pseudo-legal generation.
//!
//! Every non-pawn generator is one of two shapes: a slider that walks
//! direction vectors until it hits something, or a stepper that tries each
//! fixed offset once. Both read the board only; legality against the mover's
//! own king is layered on by the legal filter.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, Square};

/// Walk each direction vector from `from`, recording empty squares and a
/// final capture square, stopping at the first occupied square or the board
/// edge. Does nothing if `from` is empty.
pub fn slide_in_directions(
    board: &Board,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    let Some(mover) = board.get(from) else {
        return;
    };

    for &(d_row, d_column) in directions {
        let mut current = from;
        loop {
            let Some(next) = current.offset(d_row, d_column) else {
                break;
            };
            match board.get(next) {
                None => {
                    out.push(ChessMove::new(from, next));
                    current = next;
                }
                Some(occupant) => {
                    if occupant.color != mover.color {
                        out.push(ChessMove::new(from, next));
                    }
                    break;
                }
            }
        }
    }
}

/// Try a single displacement per offset, recording the move iff the
/// destination is on the board and not held by the mover's own color.
pub fn step_to_offsets(
    board: &Board,
    from: Square,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    let Some(mover) = board.get(from) else {
        return;
    };

    for &(d_row, d_column) in offsets {
        let Some(to) = from.offset(d_row, d_column) else {
            continue;
        };
        match board.get(to) {
            None => out.push(ChessMove::new(from, to)),
            Some(occupant) if occupant.color != mover.color => {
                out.push(ChessMove::new(from, to));
            }
            Some(_) => {}
        }
    }
}
