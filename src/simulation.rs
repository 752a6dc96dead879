//! advances the game state one step at a time
//!
//! This is the headless twin of the playable game loop: reversal-filtered
//! steering, one cell of movement per step, growth on food, game over on
//! walls and on the snake's own body.
use crate::board::{GameState, Position};
use crate::types::{Move, Vector};
use itertools::Itertools;
use rand::prelude::IteratorRandom;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::instrument;

/// Instruments to be used with simulation
pub trait SimulatorInstruments: std::fmt::Debug {
    #[allow(missing_docs)]
    fn observe_simulation(&self, duration: Duration);
}

/// the step interval of a fresh game
const BASE_TICK: Duration = Duration::from_millis(140);
/// the fastest the game gets
const MIN_TICK: Duration = Duration::from_millis(60);
/// each 5 points shave this much off the interval
const SPEED_UP_PER_5_POINTS: Duration = Duration::from_millis(6);

/// How long a driver should wait between steps at a given score. Starts at
/// 140ms, drops 6ms for every 5 points eaten, and bottoms out at 60ms.
pub fn tick_interval(score: u32) -> Duration {
    let speed_ups = score / 5;
    BASE_TICK
        .checked_sub(SPEED_UP_PER_5_POINTS * speed_ups)
        .unwrap_or(MIN_TICK)
        .max(MIN_TICK)
}

/// Places the food uniformly on a cell the snake does not cover. Leaves the
/// food where it is when the snake covers the whole board.
pub fn spawn_food<R: Rng>(state: &mut GameState, rng: &mut R) {
    let occupied = state.occupied_cells();
    let spot = (0..state.width as i32)
        .cartesian_product(0..state.height as i32)
        .map(|(x, y)| Position { x, y })
        .filter(|p| !occupied.contains(p))
        .choose(rng);
    if let Some(spot) = spot {
        state.food = spot;
    }
}

/// Advances the game by one step. A requested move that would reverse the
/// current heading is ignored, exactly like the key handler in the playable
/// game. Does nothing once the game is over, or while the snake has no
/// heading and none is requested.
#[instrument(level = "trace", skip_all)]
pub fn step<R: Rng, I: SimulatorInstruments>(
    state: &mut GameState,
    requested: Option<Move>,
    rng: &mut R,
    instruments: &I,
) {
    let start = Instant::now();
    advance(state, requested, rng);
    let end = Instant::now();
    instruments.observe_simulation(end - start);
}

fn advance<R: Rng>(state: &mut GameState, requested: Option<Move>, rng: &mut R) {
    if state.over {
        return;
    }

    if let Some(requested) = requested {
        let reverses = state
            .direction
            .map_or(false, |d| !d.is_not_opposite(&requested));
        if !reverses {
            state.direction = Some(requested);
        }
    }

    let dir = state.direction_vector();
    if dir == Vector::ZERO {
        return;
    }

    let new_head = state.head().add_vec(dir);
    if state.off_board(new_head) || state.occupied_cells().contains(&new_head) {
        state.over = true;
        return;
    }

    state.snake.push_front(new_head);
    if new_head == state.food {
        state.score += 1;
        spawn_food(state, rng);
    } else {
        state.snake.pop_back();
    }
}
