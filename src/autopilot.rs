//! greedy single-step autopilot
//!
//! Picks the next direction toward the food by walking the axis with the
//! larger remaining distance, swapping to the other axis when the pick
//! would reverse the snake straight into its own neck. No lookahead, no
//! body avoidance beyond that reversal check.
use crate::board::{GameState, Position};
use crate::types::{Move, Vector};
use tracing::instrument;

/// A game the autopilot can steer: it only needs the head, the food, and
/// the current heading.
pub trait PilotableGame {
    /// the snake's head position
    fn head_position(&self) -> Position;

    /// the food position the snake is steering toward
    fn food_position(&self) -> Position;

    /// the current heading, zero if the snake has not moved yet
    fn current_direction(&self) -> Vector;
}

impl PilotableGame for GameState {
    fn head_position(&self) -> Position {
        self.head()
    }

    fn food_position(&self) -> Position {
        self.food
    }

    fn current_direction(&self) -> Vector {
        self.direction_vector()
    }
}

/// Computes the next unit step from the head at (hx, hy) toward the food
/// at (fx, fy), given the current heading (dx, dy).
///
/// The axis with the strictly larger distance to the food wins; ties go to
/// the vertical axis. If the winning step would exactly reverse a non-zero
/// heading, the other axis is used instead. The fallback leans positive:
/// it steps `+1` when the food is at or beyond the head on the fallback
/// axis, so it never yields a zero component even when the coordinates are
/// equal there.
///
/// Total over all integers. The only input that yields (0, 0) is a head
/// already sitting on the food: a zero candidate never trips the reversal
/// check against a non-zero heading.
pub fn next_dir(hx: i64, hy: i64, fx: i64, fy: i64, dx: i64, dy: i64) -> (i64, i64) {
    let mut vx = 0;
    let mut vy = 0;
    if (fx - hx).abs() > (fy - hy).abs() {
        vx = (fx - hx).signum();
    } else {
        vy = (fy - hy).signum();
    }
    if (dx, dy) != (0, 0) && vx == -dx && vy == -dy {
        if vx != 0 {
            vy = if fy >= hy { 1 } else { -1 };
            vx = 0;
        } else {
            vx = if fx >= hx { 1 } else { -1 };
            vy = 0;
        }
    }
    (vx, vy)
}

/// The typed version of [next_dir]: picks the next [Move] for a game.
/// Returns None only when the head already sits on the food.
#[instrument(level = "trace", skip_all)]
pub fn greedy_move<T: PilotableGame>(game: &T) -> Option<Move> {
    let head = game.head_position();
    let food = game.food_position();
    let dir = game.current_direction();
    let (vx, vy) = next_dir(
        head.x as i64,
        head.y as i64,
        food.x as i64,
        food.y as i64,
        dir.x,
        dir.y,
    );
    Move::try_from_vector(Vector { x: vx, y: vy })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walks_the_longer_axis() {
        // horizontal gap 5 beats vertical gap 0
        assert_eq!(next_dir(5, 5, 10, 5, 1, 0), (1, 0));
        assert_eq!(next_dir(5, 5, 1, 5, 0, 1), (-1, 0));
        // vertical gap 7 beats horizontal gap 3
        assert_eq!(next_dir(0, 0, 3, 7, 1, 0), (0, 1));
        assert_eq!(next_dir(0, 7, 3, 0, 1, 0), (0, -1));
    }

    #[test]
    fn test_ties_go_vertical() {
        assert_eq!(next_dir(0, 0, 4, 4, 0, 0), (0, 1));
        assert_eq!(next_dir(0, 4, 4, 0, 0, 0), (0, -1));
        // equal on both axes with no heading: nothing to do
        assert_eq!(next_dir(5, 5, 5, 5, 0, 0), (0, 0));
    }

    #[test]
    fn test_reversal_swaps_axis() {
        // food dead behind a rightward snake: dodge vertically, and the
        // fallback leans positive on an exact row tie
        assert_eq!(next_dir(5, 5, 0, 5, 1, 0), (0, 1));
        assert_eq!(next_dir(5, 5, 0, 4, 1, 0), (0, -1));
        // food dead below an upward snake: dodge horizontally
        assert_eq!(next_dir(0, 5, 0, 0, 0, 1), (1, 0));
        assert_eq!(next_dir(5, 5, 4, 0, 0, 1), (-1, 0));
        // candidate matches the negated heading even though it was not
        // the nearer axis
        assert_eq!(next_dir(0, 0, 3, 7, 0, -1), (1, 0));
    }

    #[test]
    fn test_non_reversal_keeps_candidate() {
        assert_eq!(next_dir(5, 5, 10, 5, -1, 0), (1, 0));
        assert_eq!(next_dir(5, 5, 10, 5, 0, 1), (1, 0));
        assert_eq!(next_dir(5, 0, 5, 9, 0, -1), (0, 1));
    }

    #[test]
    fn test_never_reverses_a_moving_snake() {
        let dirs = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        for hx in -3..4i64 {
            for hy in -3..4i64 {
                for fx in -3..4i64 {
                    for fy in -3..4i64 {
                        for (dx, dy) in dirs {
                            let (vx, vy) = next_dir(hx, hy, fx, fy, dx, dy);
                            assert_ne!(
                                (vx, vy),
                                (-dx, -dy),
                                "reversed at h=({},{}) f=({},{}) d=({},{})",
                                hx,
                                hy,
                                fx,
                                fy,
                                dx,
                                dy
                            );
                            if (fx, fy) != (hx, hy) {
                                assert_ne!((vx, vy), (0, 0));
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_output_matches_axis_signs() {
        for hx in -3..4i64 {
            for hy in -3..4i64 {
                for fx in -3..4i64 {
                    for fy in -3..4i64 {
                        let (vx, vy) = next_dir(hx, hy, fx, fy, 0, 0);
                        if (fx - hx).abs() > (fy - hy).abs() {
                            assert_eq!((vx, vy), ((fx - hx).signum(), 0));
                        } else {
                            assert_eq!((vx, vy), (0, (fy - hy).signum()));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_greedy_move_on_game_state() {
        let mut g = GameState::new(11, 11);
        g.food = Position { x: 10, y: 5 };
        assert_eq!(greedy_move(&g), Some(Move::Right));

        // food directly behind: heading right, dodge up on the row tie
        g.food = Position { x: 0, y: 5 };
        assert_eq!(greedy_move(&g), Some(Move::Up));

        // head on the food: nothing to do, whatever the heading
        g.food = g.head();
        assert_eq!(greedy_move(&g), None);
        g.direction = None;
        assert_eq!(greedy_move(&g), None);
    }
}
