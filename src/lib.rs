//! Crate root module declarations for the Arbiter Chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, per-piece move
//! generation, the legal-move pipeline, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod motion;
    pub mod move_generator;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod render_game_state;
}
