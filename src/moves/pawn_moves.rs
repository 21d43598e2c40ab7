//! Pseudo-legal pawn generation.
//!
//! Pawns are the only direction-dependent piece: Light advances toward rank
//! 8, Dark toward rank 1. En passant is deliberately absent here — it depends
//! on move history rather than the board snapshot, so the legal filter adds
//! it. Every move that lands on the promotion rank is emitted once per
//! promotion choice and never with an empty promotion field.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    pawn_direction, pawn_start_rank, promotion_rank, PROMOTION_CHOICES,
};
use crate::game_state::chess_types::{ChessMove, Square};

pub fn generate_pawn_moves(board: &Board, from: Square, out: &mut Vec<ChessMove>) {
    let Some(pawn) = board.get(from) else {
        return;
    };
    let forward = pawn_direction(pawn.color);
    let far_rank = promotion_rank(pawn.color);

    // Forward advances.
    if let Some(one_ahead) = from.offset(forward, 0) {
        if board.get(one_ahead).is_none() {
            push_pawn_move(from, one_ahead, far_rank, out);

            if from.row == pawn_start_rank(pawn.color) {
                if let Some(two_ahead) = from.offset(2 * forward, 0) {
                    if board.get(two_ahead).is_none() {
                        out.push(ChessMove::new(from, two_ahead));
                    }
                }
            }
        }
    }

    // Diagonal captures.
    for d_column in [-1, 1] {
        let Some(target) = from.offset(forward, d_column) else {
            continue;
        };
        if let Some(occupant) = board.get(target) {
            if occupant.color != pawn.color {
                push_pawn_move(from, target, far_rank, out);
            }
        }
    }
}

fn push_pawn_move(from: Square, to: Square, far_rank: i8, out: &mut Vec<ChessMove>) {
    if to.row == far_rank {
        for choice in PROMOTION_CHOICES {
            out.push(ChessMove::with_promotion(from, to, choice));
        }
    } else {
        out.push(ChessMove::new(from, to));
    }
}
