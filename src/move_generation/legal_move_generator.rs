//! The legal-move filter.
//!
//! Pseudo-legal candidates are simulated on the live board, probed for king
//! safety, and undone before any verdict is reported; en passant and castling
//! are appended afterwards because neither can be derived from the board
//! snapshot alone (one needs history, the other needs attack state and
//! `has_moved` flags).

use crate::errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    en_passant_rank, pawn_direction, KINGSIDE_CASTLE_KING_FILE, KINGSIDE_ROOK_FILE,
    KING_START_FILE, QUEENSIDE_CASTLE_KING_FILE, QUEENSIDE_ROOK_FILE,
};
use crate::game_state::chess_types::{ChessMove, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::probe_with_overrides;
use crate::move_generation::legal_move_checks::{is_in_check, is_square_attacked};
use crate::moves::move_generator::pseudo_legal_moves;

/// Every legal move for the piece of the side to move occupying `square`.
/// Empty when the square is empty or holds an opponent piece.
///
/// Takes `&mut GameState` because the simulate/undo protocol temporarily
/// mutates the board; every exit path restores it exactly.
pub fn valid_moves(game: &mut GameState, square: Square) -> Result<Vec<ChessMove>, ChessErrors> {
    match game.board.get(square) {
        Some(piece) if piece.color == game.side_to_move => legal_moves_for_piece(game, square),
        _ => Ok(Vec::new()),
    }
}

/// The legal set for whatever color occupies `square`, without the
/// side-to-move gate. The terminal-state scans use this so checkmate and
/// stalemate can be asked for either color.
pub(crate) fn legal_moves_for_piece(
    game: &mut GameState,
    square: Square,
) -> Result<Vec<ChessMove>, ChessErrors> {
    let Some(piece) = game.board.get(square) else {
        return Ok(Vec::new());
    };

    let pseudo = pseudo_legal_moves(&game.board, square);
    let mut legal = Vec::with_capacity(pseudo.len());

    for candidate in pseudo {
        let exposes_king = probe_with_overrides(
            &mut game.board,
            &[(square, None), (candidate.to, Some(piece))],
            |board| is_in_check(board, piece.color),
        )?;
        if !exposes_king {
            legal.push(candidate);
        }
    }

    // En passant: a pawn on its en-passant rank may capture a neighbor that
    // double-stepped past it on the immediately preceding move.
    if piece.kind == PieceKind::Pawn && square.row == en_passant_rank(piece.color) {
        let forward = pawn_direction(piece.color);
        for d_column in [-1, 1] {
            let Some(adjacent) = square.offset(0, d_column) else {
                continue;
            };
            let Some(neighbor) = game.board.get(adjacent) else {
                continue;
            };
            if neighbor.kind != PieceKind::Pawn || neighbor.color == piece.color {
                continue;
            }
            let Some(last) = game.last_move else {
                continue;
            };
            if last.to != adjacent || (last.from.row - last.to.row).abs() != 2 {
                continue;
            }
            let Some(destination) = square.offset(forward, d_column) else {
                continue;
            };
            let exposes_king = probe_with_overrides(
                &mut game.board,
                &[
                    (square, None),
                    (adjacent, None),
                    (destination, Some(piece)),
                ],
                |board| is_in_check(board, piece.color),
            )?;
            if !exposes_king {
                legal.push(ChessMove::new(square, destination));
            }
        }
    }

    // Castling: a never-moved king may move two files toward a never-moved
    // rook over an empty, unattacked path.
    if piece.kind == PieceKind::King && !piece.has_moved {
        if can_castle(&game.board, square, true) {
            legal.push(ChessMove::new(
                square,
                Square::new(square.row, KINGSIDE_CASTLE_KING_FILE),
            ));
        }
        if can_castle(&game.board, square, false) {
            legal.push(ChessMove::new(
                square,
                Square::new(square.row, QUEENSIDE_CASTLE_KING_FILE),
            ));
        }
    }

    Ok(legal)
}

fn can_castle(board: &Board, king_square: Square, kingside: bool) -> bool {
    let Some(king) = board.get(king_square) else {
        return false;
    };
    // An unmoved king in any engine-produced state sits on its start file;
    // a hand-built position that lies about `has_moved` does not castle.
    if king_square.column != KING_START_FILE {
        return false;
    }

    let row = king_square.row;
    let rook_file = if kingside {
        KINGSIDE_ROOK_FILE
    } else {
        QUEENSIDE_ROOK_FILE
    };
    let step: i8 = if kingside { 1 } else { -1 };

    match board.get(Square::new(row, rook_file)) {
        Some(rook)
            if rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved => {}
        _ => return false,
    }

    // Every square strictly between king and rook must be empty.
    let mut file = king_square.column + step;
    while file != rook_file {
        if board.get(Square::new(row, file)).is_some() {
            return false;
        }
        file += step;
    }

    // The king's current square, the square it passes through, and its
    // destination must all be safe. Attack-query shortcut, not a full
    // what-if simulation.
    let enemy = king.color.opposite();
    let mut file = king_square.column;
    while file != king_square.column + 3 * step {
        if is_square_attacked(board, enemy, Square::new(row, file)) {
            return false;
        }
        file += step;
    }

    true
}
