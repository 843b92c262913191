//! # Session Module
//!
//! The movement controller: one value owning the current board, the player,
//! and every rule that mutates them.
//!
//! All mutation goes through the `attempt_*` operations. Each call is
//! all-or-nothing: a rejected request returns an error and leaves the
//! session exactly as it was. Nothing in here is clock-driven; the embedding
//! loop decides when moves are attempted and when stamina ticks.

use crate::{
    config, ActionOutcome, AttackKind, Board, Direction, IsleError, IsleResult, PlayerCharacter,
    Position, SessionSnapshot,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// One running game.
///
/// Owns the current area's board, the player, and the seeded random source
/// every chance-based rule draws from. Identical seeds give identical random
/// sequences, so a scripted session replays exactly.
///
/// # Examples
///
/// ```
/// use islebound::{ActionOutcome, Direction, GameSession, Position};
///
/// let mut session = GameSession::new(7).expect("standard island builds");
/// let outcome = session.attempt_move(Direction::Right).expect("player is alive");
/// assert_eq!(
///     outcome,
///     ActionOutcome::Moved {
///         to: Position::new(2, 1),
///         facing: Direction::Right,
///     }
/// );
/// ```
#[derive(Debug)]
pub struct GameSession {
    pub board: Board,
    pub player: PlayerCharacter,
    pub current_area: u32,
    pub seed: u64,
    rng: StdRng,
}

impl GameSession {
    /// Starts a fresh session on the standard island.
    pub fn new(seed: u64) -> IsleResult<Self> {
        let board = Board::new(config::BOARD_WIDTH, config::BOARD_HEIGHT)?;
        Ok(Self::with_board(board, seed))
    }

    /// Starts a session on a caller-supplied board.
    ///
    /// The player starts at the standard spawn tile regardless of the
    /// layout; callers that want them elsewhere set `player.position`
    /// directly.
    pub fn with_board(board: Board, seed: u64) -> Self {
        Self {
            board,
            player: PlayerCharacter::spawn(),
            current_area: 0,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Attempts to move the player by an explicit vector.
    ///
    /// Only the four unit steps are legal requests; anything else is
    /// rejected with [`IsleError::InvalidMoveVector`] before any state is
    /// read. A legal step resolves, in order:
    ///
    /// 1. Destination off the board: [`ActionOutcome::Held`], nothing
    ///    changes and no redraw is owed.
    /// 2. Destination is Water: the player dies where they stood. Position
    ///    and facing stay put; only health drops to zero.
    /// 3. Otherwise the player steps there and faces the way they moved.
    ///    Landing on the ship immediately travels to the next area.
    pub fn attempt_move_by(&mut self, dx: i32, dy: i32) -> IsleResult<ActionOutcome> {
        self.ensure_alive()?;
        if !matches!((dx, dy), (1, 0) | (-1, 0) | (0, 1) | (0, -1)) {
            return Err(IsleError::InvalidMoveVector { dx, dy });
        }

        let target = self.player.position.offset(dx, dy);
        if !self.board.contains(target) {
            return Ok(ActionOutcome::Held);
        }

        let tile = self.board.tile_at(target)?;
        if tile.is_lethal() {
            self.player.kill();
            return Ok(ActionOutcome::Drowned {
                at: self.player.position,
            });
        }

        self.player.position = target;
        if let Some(facing) = Direction::from_move(dx, dy) {
            self.player.facing = facing;
        }

        if tile.is_portal() {
            return self.transition_area();
        }

        Ok(ActionOutcome::Moved {
            to: target,
            facing: self.player.facing,
        })
    }

    /// Attempts to move the player one step in the given direction.
    pub fn attempt_move(&mut self, direction: Direction) -> IsleResult<ActionOutcome> {
        let delta = direction.delta();
        self.attempt_move_by(delta.x, delta.y)
    }

    /// Jump stub: reports the action and the current facing.
    pub fn attempt_jump(&mut self) -> IsleResult<ActionOutcome> {
        self.ensure_alive()?;
        Ok(ActionOutcome::Jumped {
            facing: self.player.facing,
        })
    }

    /// Dash stub: reports the action and the current facing.
    pub fn attempt_dash(&mut self) -> IsleResult<ActionOutcome> {
        self.ensure_alive()?;
        Ok(ActionOutcome::Dashed {
            facing: self.player.facing,
        })
    }

    /// Raises a block that holds half the time.
    ///
    /// Each attempt is an independent fair draw from the session's random
    /// source; nothing biases consecutive attempts.
    pub fn attempt_block(&mut self) -> IsleResult<ActionOutcome> {
        self.ensure_alive()?;
        let success = self.rng.gen_bool(0.5);
        Ok(ActionOutcome::Blocked { success })
    }

    /// Attack stub: reports the kind attempted and the current facing.
    pub fn attempt_attack(&mut self, kind: AttackKind) -> IsleResult<ActionOutcome> {
        self.ensure_alive()?;
        Ok(ActionOutcome::Attacked {
            kind,
            facing: self.player.facing,
        })
    }

    /// Travels to the next area.
    ///
    /// The whole board is replaced with a fresh standard island (whatever
    /// the previous layout was) and the player is re-seated at the spawn
    /// tile. Facing, health, stamina and the combat flags all survive the
    /// crossing. Any outstanding copy of the old board is stale once this
    /// returns.
    pub fn transition_area(&mut self) -> IsleResult<ActionOutcome> {
        self.ensure_alive()?;
        self.board = Board::new(config::BOARD_WIDTH, config::BOARD_HEIGHT)?;
        self.player
            .respawn_at(Position::new(config::PLAYER_SPAWN_X, config::PLAYER_SPAWN_Y));
        self.current_area += 1;
        Ok(ActionOutcome::Traveled {
            area: self.current_area,
        })
    }

    /// Applies one passive stamina regeneration tick.
    ///
    /// Driven by the embedding loop on its own cadence
    /// ([`config::STAMINA_TICK_SECS`] in the demo). Unlike the player-intent
    /// operations this is a silent no-op once the player is dead.
    pub fn tick_stamina(&mut self) {
        if self.player.is_alive() {
            self.player.regenerate_stamina();
        }
    }

    /// Captures the portable state of this session.
    ///
    /// The board is deliberately absent: every area uses the standard
    /// layout, so a restore rebuilds it from the area id alone.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.player, self.current_area)
    }

    /// Rebuilds a session from a snapshot.
    ///
    /// The standard board is reconstructed and the random source re-seeded;
    /// a snapshot of a dead player restores to a dead (read-only) session.
    pub fn restore(snapshot: &SessionSnapshot, seed: u64) -> IsleResult<Self> {
        let board = Board::new(config::BOARD_WIDTH, config::BOARD_HEIGHT)?;
        Ok(Self {
            board,
            player: snapshot.player.clone(),
            current_area: snapshot.current_area,
            seed,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    fn ensure_alive(&self) -> IsleResult<()> {
        if self.player.is_alive() {
            Ok(())
        } else {
            Err(IsleError::PlayerDead)
        }
    }
}
