//! Random self-play smoke runner.
//!
//! Plays uniformly random legal moves for both sides until checkmate,
//! stalemate, or a ply cap, exercising the whole legal-move pipeline end to
//! end. Run with:
//! `cargo run --release --bin random_game`
//! `cargo run --release --bin random_game -- --verbose`

use rand::prelude::IndexedRandom;

use arbiter_chess::game_state::chess_types::{ChessMove, Square};
use arbiter_chess::game_state::game_state::GameState;
use arbiter_chess::move_generation::game_status::{game_status, GameStatus};
use arbiter_chess::move_generation::legal_move_apply::make_move;
use arbiter_chess::move_generation::legal_move_generator::valid_moves;
use arbiter_chess::utils::render_game_state::render_game_state;

const MAX_PLIES: usize = 300;

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    let mut game = GameState::new_game();
    let mut rng = rand::rng();

    for ply in 0..MAX_PLIES {
        let mover = game.side_to_move;
        let status = game_status(&mut game, mover).map_err(|e| format!("{e:?}"))?;
        match status {
            GameStatus::Checkmate => {
                println!("checkmate against {mover:?} after {ply} plies");
                break;
            }
            GameStatus::Stalemate => {
                println!("stalemate with {mover:?} to move after {ply} plies");
                break;
            }
            GameStatus::Check if verbose => println!("{mover:?} is in check"),
            _ => {}
        }

        let mut legal: Vec<ChessMove> = Vec::new();
        let squares: Vec<Square> = game
            .board
            .occupied_squares(mover)
            .into_iter()
            .map(|(square, _)| square)
            .collect();
        for square in squares {
            legal.extend(valid_moves(&mut game, square).map_err(|e| format!("{e:?}"))?);
        }

        let picked = legal
            .as_slice()
            .choose(&mut rng)
            .ok_or("terminal scan and legal scan disagree")?;
        make_move(&mut game, picked).map_err(|e| format!("{e:?}"))?;

        if verbose {
            println!("ply {ply}: {picked:?}");
            println!("{}", render_game_state(&game));
        }
    }

    println!("{}", render_game_state(&game));
    Ok(())
}
