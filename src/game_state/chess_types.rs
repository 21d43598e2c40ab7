//! Core value types shared by every subsystem.
//!
//! Squares, pieces, and moves are plain `Copy` data with structural equality.
//! Membership of a submitted move in the legal set is decided by `ChessMove`
//! equality, so the derives here are load-bearing.

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

/// Piece kind (color is carried separately on `ChessPiece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A board coordinate. Rows and columns both run `1..=8`; row 1 is Light's
/// back rank and column 1 is the queenside edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub column: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, column: i8) -> Self {
        Square { row, column }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 1 && self.row <= 8 && self.column >= 1 && self.column <= 8
    }

    /// Displace this square by `(d_row, d_column)`, or `None` if the result
    /// falls off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Square> {
        let moved = Square::new(self.row + d_row, self.column + d_column);
        if moved.is_on_board() {
            Some(moved)
        } else {
            None
        }
    }
}

/// A piece as stored on the board.
///
/// `has_moved` flips exactly when a piece completes a move that lands it on a
/// new square (including the rook half of castling) and is never reset; it is
/// the sole input to castling eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessPiece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl ChessPiece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        ChessPiece {
            kind,
            color,
            has_moved: false,
        }
    }
}

/// A proposed or generated move.
///
/// `promotion` is `Some` only for a pawn move landing on its far rank; pawn
/// generation emits such moves once per promotion choice and never with an
/// absent promotion field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        ChessMove {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        ChessMove {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}
