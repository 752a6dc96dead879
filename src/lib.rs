#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Game types and a greedy autopilot for a classic single-snake grid game.
//! The autopilot picks a single next-step direction toward the food, the
//! board module holds the game state, and the simulation module advances
//! the state the same way the playable game loop does, so entire
//! autopilot-driven games can be run headlessly in tests and benchmarks.

use board::GameState;

pub mod autopilot;
pub mod board;
pub mod simulation;
pub mod types;

/// Loads a fixture from a given string
pub fn game_fixture(game_fixture: &str) -> GameState {
    let g: Result<GameState, _> = serde_json::from_str(game_fixture);
    g.expect("the json literal is valid")
}
