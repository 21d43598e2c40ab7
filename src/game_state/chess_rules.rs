//! Canonical chess-rule constants.
//!
//! This module stores the static rule literals (ranks, files, promotion
//! choices) referenced by move generation and the legal filter, so the
//! geometry of the rules lives in one place.

use crate::game_state::chess_types::{Color, PieceKind};

/// Rank a pawn starts on; a double advance is only offered from here.
pub const PAWN_START_RANK_LIGHT: i8 = 2;
pub const PAWN_START_RANK_DARK: i8 = 7;

/// Rank a pawn promotes on.
pub const PROMOTION_RANK_LIGHT: i8 = 8;
pub const PROMOTION_RANK_DARK: i8 = 1;

/// Rank a pawn must stand on for en passant to be a possibility.
pub const EN_PASSANT_RANK_LIGHT: i8 = 5;
pub const EN_PASSANT_RANK_DARK: i8 = 4;

/// Files involved in castling. The king starts on file 5; a castle moves it
/// two files toward the chosen rook and drops the rook beside it.
pub const KING_START_FILE: i8 = 5;
pub const KINGSIDE_ROOK_FILE: i8 = 8;
pub const QUEENSIDE_ROOK_FILE: i8 = 1;
pub const KINGSIDE_CASTLE_KING_FILE: i8 = 7;
pub const QUEENSIDE_CASTLE_KING_FILE: i8 = 3;
pub const KINGSIDE_CASTLE_ROOK_FILE: i8 = 6;
pub const QUEENSIDE_CASTLE_ROOK_FILE: i8 = 4;

/// Piece kinds a promoting pawn may become. A promotion move is emitted once
/// per entry, never with an absent promotion field.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Direction a pawn advances: +1 rank for Light, -1 for Dark.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::Light => 1,
        Color::Dark => -1,
    }
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> i8 {
    match color {
        Color::Light => PAWN_START_RANK_LIGHT,
        Color::Dark => PAWN_START_RANK_DARK,
    }
}

#[inline]
pub const fn promotion_rank(color: Color) -> i8 {
    match color {
        Color::Light => PROMOTION_RANK_LIGHT,
        Color::Dark => PROMOTION_RANK_DARK,
    }
}

#[inline]
pub const fn en_passant_rank(color: Color) -> i8 {
    match color {
        Color::Light => EN_PASSANT_RANK_LIGHT,
        Color::Dark => EN_PASSANT_RANK_DARK,
    }
}
