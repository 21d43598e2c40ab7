//! Mutable 8x8 mailbox board.
//!
//! The board stores one optional piece per square and knows nothing about
//! turn order or legality; the legal-move pipeline layers that on top.
//! `occupied_squares` is the single shared "all squares of a color" scan used
//! by both the attack query and the terminal-state detectors.

use crate::game_state::chess_types::{ChessPiece, Color, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // squares[row - 1][column - 1]
    squares: [[Option<ChessPiece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl Board {
    /// A board with no pieces on it.
    #[inline]
    pub fn new_empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The occupant of `square`, or `None` for an empty or off-board square.
    #[inline]
    pub fn get(&self, square: Square) -> Option<ChessPiece> {
        if !square.is_on_board() {
            return None;
        }
        self.squares[(square.row - 1) as usize][(square.column - 1) as usize]
    }

    /// Overwrite the occupant of `square`.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<ChessPiece>) {
        debug_assert!(square.is_on_board(), "set called off-board: {square:?}");
        self.squares[(square.row - 1) as usize][(square.column - 1) as usize] = piece;
    }

    /// Clear the board and lay out the standard starting position, all
    /// `has_moved` flags false.
    pub fn reset_to_standard_setup(&mut self) {
        self.squares = [[None; 8]; 8];

        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (index, kind) in BACK_RANK.iter().enumerate() {
            let column = (index + 1) as i8;
            self.set(
                Square::new(1, column),
                Some(ChessPiece::new(*kind, Color::Light)),
            );
            self.set(
                Square::new(8, column),
                Some(ChessPiece::new(*kind, Color::Dark)),
            );
        }
        for column in 1..=8 {
            self.set(
                Square::new(2, column),
                Some(ChessPiece::new(PieceKind::Pawn, Color::Light)),
            );
            self.set(
                Square::new(7, column),
                Some(ChessPiece::new(PieceKind::Pawn, Color::Dark)),
            );
        }
    }

    /// Every square currently occupied by a piece of `color`, with its piece.
    pub fn occupied_squares(&self, color: Color) -> Vec<(Square, ChessPiece)> {
        let mut found = Vec::with_capacity(16);
        for row in 1..=8 {
            for column in 1..=8 {
                let square = Square::new(row, column);
                if let Some(piece) = self.get(square) {
                    if piece.color == color {
                        found.push((square, piece));
                    }
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_setup_places_thirty_two_pieces() {
        let mut board = Board::new_empty();
        board.reset_to_standard_setup();

        assert_eq!(board.occupied_squares(Color::Light).len(), 16);
        assert_eq!(board.occupied_squares(Color::Dark).len(), 16);

        let light_king = board.get(Square::new(1, 5)).unwrap();
        assert_eq!(light_king.kind, PieceKind::King);
        assert_eq!(light_king.color, Color::Light);
        assert!(!light_king.has_moved);

        let dark_queen = board.get(Square::new(8, 4)).unwrap();
        assert_eq!(dark_queen.kind, PieceKind::Queen);
        assert_eq!(dark_queen.color, Color::Dark);

        for column in 1..=8 {
            assert_eq!(
                board.get(Square::new(2, column)).unwrap().kind,
                PieceKind::Pawn
            );
            assert_eq!(
                board.get(Square::new(7, column)).unwrap().kind,
                PieceKind::Pawn
            );
        }
        for row in 3..=6 {
            for column in 1..=8 {
                assert!(board.get(Square::new(row, column)).is_none());
            }
        }
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut board = Board::new_empty();
        let square = Square::new(4, 4);
        let piece = ChessPiece::new(PieceKind::Knight, Color::Dark);

        board.set(square, Some(piece));
        assert_eq!(board.get(square), Some(piece));

        board.set(square, None);
        assert_eq!(board.get(square), None);
    }

    #[test]
    fn off_board_get_is_empty() {
        let board = Board::new_empty();
        assert_eq!(board.get(Square::new(0, 4)), None);
        assert_eq!(board.get(Square::new(4, 9)), None);
    }
}
