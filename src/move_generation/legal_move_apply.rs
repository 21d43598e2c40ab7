//! Move application and the scoped simulate/undo helper.
//!
//! Every speculative mutation in the crate goes through
//! [`probe_with_overrides`], which saves the touched squares, applies the
//! overrides, runs the probe, and unconditionally restores the saved
//! contents. Leaking a half-applied board out of a probe is the principal
//! correctness risk of this design, so the restore lives in exactly one
//! place.

use crate::errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    pawn_direction, KINGSIDE_CASTLE_ROOK_FILE, KINGSIDE_ROOK_FILE, QUEENSIDE_CASTLE_ROOK_FILE,
    QUEENSIDE_ROOK_FILE,
};
use crate::game_state::chess_types::{ChessMove, ChessPiece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::valid_moves;

/// Temporarily overwrite `overrides` on the board, evaluate `probe`, then
/// restore the prior contents in reverse order. The restore runs on every
/// path, including when the probe reports an error through its return value.
pub fn probe_with_overrides<T>(
    board: &mut Board,
    overrides: &[(Square, Option<ChessPiece>)],
    probe: impl FnOnce(&Board) -> T,
) -> T {
    let mut saved: Vec<(Square, Option<ChessPiece>)> = Vec::with_capacity(overrides.len());
    for &(square, contents) in overrides {
        saved.push((square, board.get(square)));
        board.set(square, contents);
    }

    let verdict = probe(board);

    for &(square, contents) in saved.iter().rev() {
        board.set(square, contents);
    }
    verdict
}

/// Validate and apply `chess_move`, mutating `game` in place.
///
/// Rejections (wrong origin, wrong side, not in the legal set, or the
/// post-apply safety check) leave `game` byte-for-byte unchanged. On success
/// the moved piece's `has_moved` flag is set, the move is recorded as
/// `last_move`, and the turn flips.
pub fn make_move(game: &mut GameState, chess_move: &ChessMove) -> Result<(), ChessErrors> {
    let moving_piece = game
        .board
        .get(chess_move.from)
        .ok_or(ChessErrors::TryingToMoveFromEmptySquare(chess_move.from))?;
    if moving_piece.color != game.side_to_move {
        return Err(ChessErrors::MoveOutOfTurn((
            chess_move.from,
            moving_piece.color,
        )));
    }
    if !valid_moves(game, chess_move.from)?.contains(chess_move) {
        return Err(ChessErrors::MoveNotInLegalSet(*chess_move));
    }

    // Detect the special cases before touching the board.
    let forward = pawn_direction(moving_piece.color);
    let is_en_passant = moving_piece.kind == PieceKind::Pawn
        && chess_move.from.column != chess_move.to.column
        && game.board.get(chess_move.to).is_none();
    let castling_rook = if moving_piece.kind == PieceKind::King
        && (chess_move.to.column - chess_move.from.column).abs() == 2
    {
        let row = chess_move.from.row;
        if chess_move.to.column > chess_move.from.column {
            Some((
                Square::new(row, KINGSIDE_ROOK_FILE),
                Square::new(row, KINGSIDE_CASTLE_ROOK_FILE),
            ))
        } else {
            Some((
                Square::new(row, QUEENSIDE_ROOK_FILE),
                Square::new(row, QUEENSIDE_CASTLE_ROOK_FILE),
            ))
        }
    } else {
        None
    };

    // Every square this move touches, with its pre-move contents, so the
    // post-apply safety check can restore all of them on failure.
    let mut touched: Vec<(Square, Option<ChessPiece>)> = Vec::with_capacity(5);

    let landing_piece = match chess_move.promotion {
        Some(kind) => ChessPiece {
            kind,
            color: moving_piece.color,
            has_moved: true,
        },
        None => ChessPiece {
            has_moved: true,
            ..moving_piece
        },
    };

    touched.push((chess_move.from, game.board.get(chess_move.from)));
    touched.push((chess_move.to, game.board.get(chess_move.to)));
    game.board.set(chess_move.from, None);
    game.board.set(chess_move.to, Some(landing_piece));

    if is_en_passant {
        let captured_square = Square::new(chess_move.to.row - forward, chess_move.to.column);
        touched.push((captured_square, game.board.get(captured_square)));
        game.board.set(captured_square, None);
    }

    if let Some((rook_from, rook_to)) = castling_rook {
        touched.push((rook_from, game.board.get(rook_from)));
        touched.push((rook_to, game.board.get(rook_to)));
        if let Some(rook) = game.board.get(rook_from) {
            game.board.set(rook_to, Some(ChessPiece {
                has_moved: true,
                ..rook
            }));
            game.board.set(rook_from, None);
        }
    }

    // Second-line defense: the filter already vetted this move, but confirm
    // the mover's king is safe before committing the turn change.
    let verdict = is_in_check(&game.board, moving_piece.color);
    let undo_all = |board: &mut Board| {
        for &(square, contents) in touched.iter().rev() {
            board.set(square, contents);
        }
    };
    match verdict {
        Ok(false) => {}
        Ok(true) => {
            undo_all(&mut game.board);
            return Err(ChessErrors::MoveLeavesKingInCheck(*chess_move));
        }
        Err(fatal) => {
            undo_all(&mut game.board);
            return Err(fatal);
        }
    }

    game.last_move = Some(*chess_move);
    game.side_to_move = moving_piece.color.opposite();
    Ok(())
}
