//! Terminal-state detection.
//!
//! Checkmate and stalemate both reduce to "no piece of this color has a
//! non-empty legal set", differing only in whether the king is currently
//! attacked. Both scan the whole board through the full legal filter;
//! correctness over speed is the deliberate trade-off on a fixed 8x8 board.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks;
use crate::move_generation::legal_move_generator::legal_moves_for_piece;

/// One-call summary of a color's situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
}

pub fn is_in_check(game: &GameState, color: Color) -> Result<bool, ChessErrors> {
    legal_move_checks::is_in_check(&game.board, color)
}

/// True iff `color` is in check and has no legal move anywhere on the board.
pub fn is_in_checkmate(game: &mut GameState, color: Color) -> Result<bool, ChessErrors> {
    Ok(is_in_check(game, color)? && !has_any_legal_move(game, color)?)
}

/// True iff `color` is NOT in check and has no legal move anywhere on the
/// board.
pub fn is_in_stalemate(game: &mut GameState, color: Color) -> Result<bool, ChessErrors> {
    Ok(!is_in_check(game, color)? && !has_any_legal_move(game, color)?)
}

pub fn game_status(game: &mut GameState, color: Color) -> Result<GameStatus, ChessErrors> {
    let in_check = is_in_check(game, color)?;
    let can_move = has_any_legal_move(game, color)?;
    Ok(match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::InProgress,
    })
}

fn has_any_legal_move(game: &mut GameState, color: Color) -> Result<bool, ChessErrors> {
    let squares: Vec<Square> = game
        .board
        .occupied_squares(color)
        .into_iter()
        .map(|(square, _)| square)
        .collect();
    for square in squares {
        if !legal_moves_for_piece(game, square)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{ChessMove, ChessPiece, PieceKind};
    use crate::move_generation::legal_move_apply::make_move;

    fn place(game: &mut GameState, row: i8, column: i8, kind: PieceKind, color: Color) {
        game.board.set(
            Square::new(row, column),
            Some(ChessPiece {
                kind,
                color,
                has_moved: true,
            }),
        );
    }

    #[test]
    fn the_starting_position_is_not_terminal() {
        let mut game = GameState::new_game();
        for color in [Color::Light, Color::Dark] {
            assert_eq!(is_in_check(&game, color), Ok(false));
            assert_eq!(is_in_checkmate(&mut game, color), Ok(false));
            assert_eq!(is_in_stalemate(&mut game, color), Ok(false));
            assert_eq!(game_status(&mut game, color), Ok(GameStatus::InProgress));
        }
    }

    #[test]
    fn fools_mate_is_checkmate_after_four_plies() {
        let mut game = GameState::new_game();
        let plies = [
            // 1. f3 e5 2. g4 Qh4#
            ChessMove::new(Square::new(2, 6), Square::new(3, 6)),
            ChessMove::new(Square::new(7, 5), Square::new(5, 5)),
            ChessMove::new(Square::new(2, 7), Square::new(4, 7)),
            ChessMove::new(Square::new(8, 4), Square::new(4, 8)),
        ];
        for ply in &plies {
            make_move(&mut game, ply).unwrap();
        }

        assert_eq!(is_in_check(&game, Color::Light), Ok(true));
        assert_eq!(is_in_checkmate(&mut game, Color::Light), Ok(true));
        assert_eq!(is_in_stalemate(&mut game, Color::Light), Ok(false));
        assert_eq!(game_status(&mut game, Color::Light), Ok(GameStatus::Checkmate));

        // The winner is merely delivering mate, not receiving it.
        assert_eq!(is_in_checkmate(&mut game, Color::Dark), Ok(false));
    }

    #[test]
    fn back_rank_mate_with_no_escape_or_block() {
        let mut game = GameState::new_empty();
        place(&mut game, 1, 8, PieceKind::King, Color::Light);
        place(&mut game, 2, 7, PieceKind::Pawn, Color::Light);
        place(&mut game, 2, 8, PieceKind::Pawn, Color::Light);
        place(&mut game, 1, 1, PieceKind::Rook, Color::Dark);
        place(&mut game, 8, 5, PieceKind::King, Color::Dark);

        assert_eq!(is_in_checkmate(&mut game, Color::Light), Ok(true));
        assert_eq!(game_status(&mut game, Color::Light), Ok(GameStatus::Checkmate));
    }

    #[test]
    fn cornered_king_against_queen_is_stalemate_not_checkmate() {
        let mut game = GameState::new_empty();
        place(&mut game, 8, 1, PieceKind::King, Color::Dark);
        place(&mut game, 7, 3, PieceKind::Queen, Color::Light);
        place(&mut game, 6, 3, PieceKind::King, Color::Light);
        game.side_to_move = Color::Dark;

        assert_eq!(is_in_check(&game, Color::Dark), Ok(false));
        assert_eq!(is_in_stalemate(&mut game, Color::Dark), Ok(true));
        assert_eq!(is_in_checkmate(&mut game, Color::Dark), Ok(false));
        assert_eq!(game_status(&mut game, Color::Dark), Ok(GameStatus::Stalemate));

        // The side with material is free to move.
        assert_eq!(is_in_stalemate(&mut game, Color::Light), Ok(false));
    }

    #[test]
    fn check_with_an_escape_is_not_checkmate() {
        let mut game = GameState::new_empty();
        place(&mut game, 1, 5, PieceKind::King, Color::Light);
        place(&mut game, 8, 5, PieceKind::Rook, Color::Dark);
        place(&mut game, 8, 1, PieceKind::King, Color::Dark);

        assert_eq!(is_in_check(&game, Color::Light), Ok(true));
        assert_eq!(is_in_checkmate(&mut game, Color::Light), Ok(false));
        assert_eq!(game_status(&mut game, Color::Light), Ok(GameStatus::Check));
    }

    #[test]
    fn terminal_queries_leave_the_state_unchanged() {
        let mut game = GameState::new_game();
        let before = game.clone();

        is_in_checkmate(&mut game, Color::Light).unwrap();
        is_in_stalemate(&mut game, Color::Dark).unwrap();
        game_status(&mut game, Color::Light).unwrap();

        assert_eq!(game, before);
    }

    #[test]
    fn missing_king_reports_the_invariant_violation() {
        let mut game = GameState::new_empty();
        place(&mut game, 1, 5, PieceKind::King, Color::Light);

        assert_eq!(
            is_in_check(&game, Color::Dark),
            Err(ChessErrors::BoardDoesNotContainAKing(Color::Dark))
        );
    }
}
