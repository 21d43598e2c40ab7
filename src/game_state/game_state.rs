//! Central game model.
//!
//! `GameState` owns the board, the side to move, and the one piece of history
//! the rules need: the immediately preceding move, which is what decides en
//! passant eligibility. It evolves only through
//! [`make_move`](crate::move_generation::legal_move_apply::make_move);
//! rejected moves leave it byte-for-byte unchanged.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, Color};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    /// The move that produced the current position, if any. Always exactly
    /// one ply deep; this is the sole input to en passant validation.
    pub last_move: Option<ChessMove>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// An empty board with Light to move. Intended for tests and hand-built
    /// positions.
    pub fn new_empty() -> Self {
        GameState {
            board: Board::new_empty(),
            side_to_move: Color::Light,
            last_move: None,
        }
    }

    /// The standard starting position, Light to move, no history.
    pub fn new_game() -> Self {
        let mut board = Board::new_empty();
        board.reset_to_standard_setup();
        GameState {
            board,
            side_to_move: Color::Light,
            last_move: None,
        }
    }
}
