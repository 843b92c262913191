//! # Game Module
//!
//! The renderer-agnostic core of the game.
//!
//! This module contains the fundamental building blocks of Islebound:
//! - Board and tile representation
//! - The player record and its vitals
//! - Player intents, turn ownership, and action outcomes
//! - The session that applies every rule, and its save snapshot

pub mod actions;
pub mod board;
pub mod player;
pub mod session;
pub mod snapshot;

pub use actions::*;
pub use board::*;
pub use player::*;
pub use session::*;
pub use snapshot::*;

use serde::{Deserialize, Serialize};

/// Represents a 2D coordinate on the board.
///
/// # Examples
///
/// ```
/// use islebound::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
///
/// assert_eq!(pos.offset(-1, 0), Position::new(9, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position displaced by the given deltas.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

/// Directions the player can face and move in.
///
/// Movement is strictly cardinal; there are no diagonal steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Converts a direction to a position delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use islebound::{Direction, Position};
    ///
    /// let delta = Direction::Up.delta();
    /// assert_eq!(delta, Position::new(0, -1));
    /// ```
    pub const fn delta(self) -> Position {
        match self {
            Direction::Up => Position::new(0, -1),
            Direction::Down => Position::new(0, 1),
            Direction::Left => Position::new(-1, 0),
            Direction::Right => Position::new(1, 0),
        }
    }

    /// Derives the facing for a movement vector.
    ///
    /// The horizontal axis wins when both are supplied; (0, 0) has no facing.
    pub const fn from_move(dx: i32, dy: i32) -> Option<Direction> {
        if dx > 0 {
            Some(Direction::Right)
        } else if dx < 0 {
            Some(Direction::Left)
        } else if dy > 0 {
            Some(Direction::Down)
        } else if dy < 0 {
            Some(Direction::Up)
        } else {
            None
        }
    }

    /// Lowercase name used in reports and the UI.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Returns all 4 directions.
    pub fn all() -> Vec<Direction> {
        vec![
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}
