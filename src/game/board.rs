//! # Board Module
//!
//! The island board: a fixed-size grid of tiles built whole at construction
//! time. The sea border is lethal, the interior is walkable, and a single
//! ship tile travels to the next area.
//!
//! The board is immutable after construction. Area transitions replace the
//! whole board rather than editing it in place.

use crate::{config, IsleError, IsleResult, Position};
use serde::{Deserialize, Serialize};

/// A single cell of the island board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Open sea. Stepping here kills the player.
    Water,
    /// Ordinary walkable ground.
    Land,
    /// Walkable bridge or islet ground.
    Bridge,
    /// The ship. Stepping here travels to the next area.
    Ship,
}

impl Tile {
    /// Returns true if stepping on this tile kills the player.
    pub const fn is_lethal(self) -> bool {
        matches!(self, Tile::Water)
    }

    /// Returns true if stepping on this tile travels to another area.
    pub const fn is_portal(self) -> bool {
        matches!(self, Tile::Ship)
    }

    /// Returns true if the player can enter this tile and survive.
    pub const fn is_passable(self) -> bool {
        !self.is_lethal()
    }
}

/// The playfield for one area.
///
/// Tiles are stored row-major: `tiles[y][x]`. All tile access goes through
/// [`Board::tile_at`], which fails loudly on out-of-range coordinates rather
/// than clamping.
///
/// # Examples
///
/// ```
/// use islebound::{Board, Position, Tile};
///
/// let board = Board::new(16, 12).expect("default island fits");
/// assert_eq!(board.tile_at(Position::new(0, 0)).unwrap(), Tile::Water);
/// assert_eq!(board.tile_at(Position::new(2, 2)).unwrap(), Tile::Ship);
/// assert_eq!(board.tile_at(Position::new(5, 5)).unwrap(), Tile::Land);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub width: u32,
    pub height: u32,
    tiles: Vec<Vec<Tile>>,
}

impl Board {
    /// Creates the standard island layout at the given dimensions.
    ///
    /// Every border cell is Water, the interior is Land, and the fixed cell
    /// (2, 2) holds the ship. Fails with [`IsleError::DegenerateBoard`] when
    /// either dimension is below 4, the smallest grid that fits a water
    /// border, a non-empty interior, and the ship strictly inside it.
    pub fn new(width: u32, height: u32) -> IsleResult<Self> {
        if width < 4 || height < 4 {
            return Err(IsleError::DegenerateBoard { width, height });
        }

        let mut tiles = Vec::with_capacity(height as usize);
        for y in 0..height {
            let mut row = Vec::with_capacity(width as usize);
            for x in 0..width {
                if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    row.push(Tile::Water);
                } else {
                    row.push(Tile::Land);
                }
            }
            tiles.push(row);
        }
        tiles[config::SHIP_Y as usize][config::SHIP_X as usize] = Tile::Ship;

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Builds a board from an explicit tile layout.
    ///
    /// Intended for custom maps and tests that need bridges or walkable
    /// edges. Rejects empty or ragged layouts with
    /// [`IsleError::DegenerateBoard`]; no border or ship placement is
    /// enforced here.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> IsleResult<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.len() as u32);
        if width == 0 || height == 0 || rows.iter().any(|row| row.len() as u32 != width) {
            return Err(IsleError::DegenerateBoard { width, height });
        }

        Ok(Self {
            width,
            height,
            tiles: rows,
        })
    }

    /// Returns the tile at the given position.
    ///
    /// Fails with [`IsleError::OutOfBounds`] for any coordinate outside the
    /// grid. Callers that want a silent bounds check use [`Board::contains`]
    /// first.
    pub fn tile_at(&self, pos: Position) -> IsleResult<Tile> {
        if !self.contains(pos) {
            return Err(IsleError::OutOfBounds { x: pos.x, y: pos.y });
        }
        Ok(self.tiles[pos.y as usize][pos.x as usize])
    }

    /// Returns true if the position lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width as i32 && pos.y < self.height as i32
    }
}
