//! core types for moving around the grid
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// x position
    pub x: i64,
    /// y position
    pub y: i64,
}

impl Vector {
    /// the zero vector, used as the current direction before the snake has moved
    pub const ZERO: Vector = Vector { x: 0, y: 0 };

    /// the exact opposite of this vector
    pub fn negate(self) -> Vector {
        Vector {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Represents a move. Up is (0, 1): y grows upward and row 0 is the bottom
/// of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Right,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Left => write!(f, "left"),
            Move::Right => write!(f, "right"),
            Move::Up => write!(f, "up"),
            Move::Down => write!(f, "down"),
        }
    }
}

impl Move {
    /// convert this move to a vector
    pub fn to_vector(self) -> Vector {
        match self {
            Move::Left => Vector { x: -1, y: 0 },
            Move::Right => Vector { x: 1, y: 0 },
            Move::Up => Vector { x: 0, y: 1 },
            Move::Down => Vector { x: 0, y: -1 },
        }
    }

    /// create a Move from the given vector, if it is a unit step along one axis
    pub fn try_from_vector(vector: Vector) -> Option<Self> {
        match vector {
            Vector { x: -1, y: 0 } => Some(Self::Left),
            Vector { x: 1, y: 0 } => Some(Self::Right),
            Vector { x: 0, y: 1 } => Some(Self::Up),
            Vector { x: 0, y: -1 } => Some(Self::Down),
            _ => None,
        }
    }

    /// returns a vec of all possible moves
    pub fn all() -> Vec<Move> {
        vec![Move::Up, Move::Down, Move::Left, Move::Right]
    }

    /// converts this move to a usize index. indices are the same order as the `Move::all()` method
    pub fn as_index(&self) -> usize {
        match self {
            Move::Up => 0,
            Move::Down => 1,
            Move::Left => 2,
            Move::Right => 3,
        }
    }

    /// converts a usize index to a move
    pub fn from_index(index: usize) -> Move {
        match index {
            0 => Move::Up,
            1 => Move::Down,
            2 => Move::Left,
            3 => Move::Right,
            _ => panic!("invalid index"),
        }
    }

    /// checks if a given move is not opposite this move. e.g. Up is not opposite to Left, but is opposite to Down
    pub fn is_not_opposite(&self, other: &Move) -> bool {
        !matches!(
            (self, other),
            (Move::Up, Move::Down)
                | (Move::Down, Move::Up)
                | (Move::Left, Move::Right)
                | (Move::Right, Move::Left)
        )
    }
}
