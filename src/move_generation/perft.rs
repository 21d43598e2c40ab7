//! Perft: exhaustive legal-move tree counting.
//!
//! The classic cross-check for move generators: walk every legal move to a
//! fixed depth and tally nodes plus the special-move features seen at the
//! leaves. The engine has no unmake, so each branch clones the game state;
//! fine for the shallow depths used in tests and benches.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::is_in_checkmate;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::valid_moves;
use crate::move_generation::legal_move_apply::make_move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game: &GameState, depth: u8) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut current = game.clone();
    let squares: Vec<Square> = current
        .board
        .occupied_squares(current.side_to_move)
        .into_iter()
        .map(|(square, _)| square)
        .collect();

    let mut total = PerftCounts::default();
    for square in squares {
        for mv in valid_moves(&mut current, square)? {
            // Classify against the pre-move board; the distinguishing facts
            // are gone once the move is applied.
            let plain_capture = current.board.get(mv.to).is_some();
            let mover = current
                .board
                .get(mv.from)
                .ok_or(ChessErrors::TryingToMoveFromEmptySquare(mv.from))?;
            let en_passant = mover.kind == PieceKind::Pawn
                && mv.from.column != mv.to.column
                && !plain_capture;
            let castle = mover.kind == PieceKind::King
                && (mv.to.column - mv.from.column).abs() == 2;

            let mut next = current.clone();
            make_move(&mut next, &mv)?;

            if depth == 1 {
                total.nodes += 1;
                if plain_capture || en_passant {
                    total.captures += 1;
                }
                if en_passant {
                    total.en_passant += 1;
                }
                if castle {
                    total.castles += 1;
                }
                if mv.promotion.is_some() {
                    total.promotions += 1;
                }
                let defender = next.side_to_move;
                if is_in_check(&next.board, defender)? {
                    total.checks += 1;
                    if is_in_checkmate(&mut next, defender)? {
                        total.checkmates += 1;
                    }
                }
            } else {
                total.merge(perft(&next, depth - 1)?);
            }
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{ChessPiece, Color};

    #[test]
    fn startpos_perft_matches_the_published_counts() {
        let game = GameState::new_game();

        let depth_one = perft(&game, 1).unwrap();
        assert_eq!(depth_one.nodes, 20);
        assert_eq!(depth_one.captures, 0);
        assert_eq!(depth_one.checks, 0);

        let depth_two = perft(&game, 2).unwrap();
        assert_eq!(depth_two.nodes, 400);
        assert_eq!(depth_two.captures, 0);

        let depth_three = perft(&game, 3).unwrap();
        assert_eq!(depth_three.nodes, 8_902);
        assert_eq!(depth_three.captures, 34);
        assert_eq!(depth_three.en_passant, 0);
        assert_eq!(depth_three.castles, 0);
        assert_eq!(depth_three.checks, 12);
        assert_eq!(depth_three.checkmates, 0);
    }

    /// The rook-endgame fixture commonly used to exercise en passant and
    /// check evasions (kings and rooks only, no castling available).
    pub(crate) fn rook_endgame() -> GameState {
        fn moved(kind: PieceKind, color: Color) -> Option<ChessPiece> {
            Some(ChessPiece {
                kind,
                color,
                has_moved: true,
            })
        }

        let mut game = GameState::new_empty();
        let board = &mut game.board;
        board.set(Square::new(7, 3), moved(PieceKind::Pawn, Color::Dark));
        board.set(Square::new(6, 4), moved(PieceKind::Pawn, Color::Dark));
        board.set(Square::new(5, 1), moved(PieceKind::King, Color::Light));
        board.set(Square::new(5, 2), moved(PieceKind::Pawn, Color::Light));
        board.set(Square::new(5, 8), moved(PieceKind::Rook, Color::Dark));
        board.set(Square::new(4, 2), moved(PieceKind::Rook, Color::Light));
        board.set(Square::new(4, 6), moved(PieceKind::Pawn, Color::Dark));
        board.set(Square::new(4, 8), moved(PieceKind::King, Color::Dark));
        board.set(Square::new(2, 5), moved(PieceKind::Pawn, Color::Light));
        board.set(Square::new(2, 7), moved(PieceKind::Pawn, Color::Light));
        game
    }

    #[test]
    fn rook_endgame_perft_matches_the_published_counts() {
        let game = rook_endgame();

        let depth_one = perft(&game, 1).unwrap();
        assert_eq!(depth_one.nodes, 14);
        assert_eq!(depth_one.captures, 1);
        assert_eq!(depth_one.checks, 2);

        let depth_two = perft(&game, 2).unwrap();
        assert_eq!(depth_two.nodes, 191);
        assert_eq!(depth_two.captures, 14);
        assert_eq!(depth_two.checks, 10);

        let depth_three = perft(&game, 3).unwrap();
        assert_eq!(depth_three.nodes, 2_812);
        assert_eq!(depth_three.captures, 209);
        assert_eq!(depth_three.en_passant, 2);
        assert_eq!(depth_three.checks, 267);
    }

    #[test]
    fn perft_leaves_the_input_untouched() {
        let game = GameState::new_game();
        let before = game.clone();
        perft(&game, 2).unwrap();
        assert_eq!(game, before);
    }
}
