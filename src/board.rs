//! the board and game state for a classic single-snake game
use crate::types::{Move, Vector};
use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// A single cell on the board
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    #[allow(missing_docs)]
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
}

impl Position {
    /// add a vector to this position
    pub fn add_vec(&self, v: Vector) -> Position {
        Position {
            x: (self.x as i64 + v.x) as i32,
            y: (self.y as i64 + v.y) as i32,
        }
    }

    /// subtract a vector from this position
    pub fn sub_vec(&self, v: Vector) -> Position {
        Position {
            x: (self.x as i64 - v.x) as i32,
            y: (self.y as i64 - v.y) as i32,
        }
    }

    /// convert this position to a vector
    pub fn to_vector(&self) -> Vector {
        Vector {
            x: self.x as i64,
            y: self.y as i64,
        }
    }
}

/// The full state of a game: one snake, one food, a score. The snake body
/// is ordered head first. `direction` is None until the snake has a
/// heading, which corresponds to the zero vector in the autopilot contract.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    #[allow(missing_docs)]
    pub width: u32,
    #[allow(missing_docs)]
    pub height: u32,
    /// the snake body, head first
    pub snake: VecDeque<Position>,
    /// the snake's current heading
    pub direction: Option<Move>,
    #[allow(missing_docs)]
    pub food: Position,
    #[allow(missing_docs)]
    pub score: u32,
    /// set once the snake has hit a wall or itself
    pub over: bool,
}

impl GameState {
    /// a fresh game: a 3 segment snake on the middle row heading right,
    /// food placed by the caller afterwards (see `simulation::spawn_food`)
    pub fn new(width: u32, height: u32) -> Self {
        let mid_y = (height / 2) as i32;
        let head_x = (width / 2) as i32;
        let snake = (0..3)
            .map(|i| Position {
                x: head_x - i,
                y: mid_y,
            })
            .collect();
        GameState {
            width,
            height,
            snake,
            direction: Some(Move::Right),
            food: Position {
                x: (head_x + 2).min(width as i32 - 1),
                y: mid_y,
            },
            score: 0,
            over: false,
        }
    }

    /// the head position of the snake
    pub fn head(&self) -> Position {
        *self.snake.front().expect("the snake has at least one segment")
    }

    /// the snake's heading as a vector, zero if it has none yet
    pub fn direction_vector(&self) -> Vector {
        self.direction.map_or(Vector::ZERO, Move::to_vector)
    }

    /// is this position outside the board?
    pub fn off_board(&self, position: Position) -> bool {
        position.x < 0
            || position.x >= self.width as i32
            || position.y < 0
            || position.y >= self.height as i32
    }

    /// every cell the snake body covers
    pub fn occupied_cells(&self) -> FxHashSet<Position> {
        self.snake.iter().copied().collect()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        let head = self.head();
        for i in 0..self.height {
            let k = self.height - i - 1;
            for j in 0..self.width {
                let position = Position {
                    x: j as i32,
                    y: k as i32,
                };
                if position == head {
                    write!(f, "H")?;
                } else if self.snake.contains(&position) {
                    write!(f, "s")?;
                } else if self.food == position {
                    write!(f, "f")?;
                } else {
                    write!(f, ".")?;
                }
                write!(f, " ")?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "(score: {} length: {} head: {:?})",
            self.score,
            self.snake.len(),
            head
        )
    }
}
