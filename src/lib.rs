//! # Islebound
//!
//! A turn-based island exploration prototype: a small tile board surrounded by
//! lethal water, a ship that travels between areas, and a single player moved
//! one tile per input.
//!
//! ## Architecture Overview
//!
//! The crate is split between a renderer-agnostic core and thin demo glue:
//!
//! - **Board**: Fixed-size tile grid built whole at construction time
//! - **Session**: Owns the player, the current board, and every rule that
//!   mutates them (movement, drowning, ship travel, action stubs)
//! - **Input System**: Maps raw key presses to player intents and gates them
//!   on whose turn it is
//! - **Rendering System**: Macroquad-based demo renderer driven entirely by
//!   reading session state
//!
//! Everything the session does is synchronous and deterministic for a given
//! seed, so an embedding loop (or a test) can drive it step by step.

pub mod game;
pub mod input;
pub mod rendering;

// Core module re-exports
pub use game::*;
pub use input::*;
pub use rendering::*;

// Explicit re-exports for commonly used types
pub use game::{
    // From actions
    ActionOutcome,
    AttackKind,
    // From board
    Board,
    Direction,
    // From session
    GameSession,
    PlayerAction,
    // From player
    PlayerCharacter,
    Position,
    // From snapshot
    SessionSnapshot,
    Tile,
    TurnState,
};

pub use input::{InputHandler, MetaCommand, PlayerCommand};

pub use rendering::GameDisplay;

/// Core error type for the Islebound game engine.
#[derive(thiserror::Error, Debug)]
pub enum IsleError {
    /// A coordinate falls outside the current board
    #[error("Position ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    /// A movement vector is not a single step along one axis
    #[error("Invalid move vector ({dx}, {dy}): moves are one tile along a single axis")]
    InvalidMoveVector { dx: i32, dy: i32 },

    /// A board layout too small or malformed to play on
    #[error("Degenerate board layout: {width}x{height}")]
    DegenerateBoard { width: u32, height: u32 },

    /// An action was attempted after the player died
    #[error("Player is dead")]
    PlayerDead,

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type used throughout the Islebound codebase.
pub type IsleResult<T> = Result<T, IsleError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Board width in tiles
    pub const BOARD_WIDTH: u32 = 16;

    /// Board height in tiles
    pub const BOARD_HEIGHT: u32 = 12;

    /// Column the player spawns in on every fresh board
    pub const PLAYER_SPAWN_X: i32 = 1;

    /// Row the player spawns in on every fresh board
    pub const PLAYER_SPAWN_Y: i32 = 1;

    /// Column of the ship tile on a default board
    pub const SHIP_X: i32 = 2;

    /// Row of the ship tile on a default board
    pub const SHIP_Y: i32 = 2;

    /// Stamina ceiling; regeneration stops here
    pub const MAX_STAMINA: u32 = 100;

    /// Health ceiling and starting health
    pub const MAX_HEALTH: u32 = 100;

    /// Seconds between passive stamina regeneration ticks
    pub const STAMINA_TICK_SECS: f64 = 1.0;

    /// Seed used when none is supplied on the command line
    pub const DEFAULT_SEED: u64 = 0x1513_BD01;

    /// Edge length of one board cell in pixels
    pub const CELL_SIZE: f32 = 50.0;
}
