//! # Player Module
//!
//! The single player-controlled character: position, facing, and vitals.

use crate::{config, Direction, Position};
use serde::{Deserialize, Serialize};

/// The player-controlled character.
///
/// Only the rules in [`crate::GameSession`] mutate this record. `in_combat`
/// and `combo_cooldown` travel with the character and appear in snapshots,
/// but no current rule flips them; the combat actions that would are stubs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCharacter {
    pub position: Position,
    pub facing: Direction,
    pub stamina: u32,
    pub health: u32,
    pub in_combat: bool,
    pub combo_cooldown: bool,
}

impl PlayerCharacter {
    /// Creates a freshly spawned character at the standard spawn tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use islebound::{Direction, PlayerCharacter, Position};
    ///
    /// let player = PlayerCharacter::spawn();
    /// assert_eq!(player.position, Position::new(1, 1));
    /// assert_eq!(player.facing, Direction::Right);
    /// assert!(player.is_alive());
    /// ```
    pub fn spawn() -> Self {
        Self {
            position: Position::new(config::PLAYER_SPAWN_X, config::PLAYER_SPAWN_Y),
            facing: Direction::Right,
            stamina: config::MAX_STAMINA,
            health: config::MAX_HEALTH,
            in_combat: false,
            combo_cooldown: false,
        }
    }

    /// Returns true while the character has health left.
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Kills the character outright.
    ///
    /// Death is terminal: nothing inside a session revives a dead character.
    pub fn kill(&mut self) {
        self.health = 0;
    }

    /// Regenerates one point of stamina, stopping at the ceiling.
    pub fn regenerate_stamina(&mut self) {
        if self.stamina < config::MAX_STAMINA {
            self.stamina += 1;
        }
    }

    /// Re-seats the character for a new area.
    ///
    /// Touches position only: facing, health, stamina and the combat flags
    /// all survive the crossing.
    pub fn respawn_at(&mut self, position: Position) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_defaults() {
        let player = PlayerCharacter::spawn();
        assert_eq!(player.position, Position::new(1, 1));
        assert_eq!(player.facing, Direction::Right);
        assert_eq!(player.stamina, config::MAX_STAMINA);
        assert_eq!(player.health, config::MAX_HEALTH);
        assert!(!player.in_combat);
        assert!(!player.combo_cooldown);
    }

    #[test]
    fn test_kill_is_terminal() {
        let mut player = PlayerCharacter::spawn();
        assert!(player.is_alive());
        player.kill();
        assert!(!player.is_alive());
        assert_eq!(player.health, 0);
    }

    #[test]
    fn test_stamina_regenerates_below_ceiling() {
        let mut player = PlayerCharacter::spawn();
        player.stamina = 50;
        for _ in 0..10 {
            player.regenerate_stamina();
        }
        assert_eq!(player.stamina, 60);
    }

    #[test]
    fn test_stamina_stops_at_ceiling() {
        let mut player = PlayerCharacter::spawn();
        player.stamina = 99;
        player.regenerate_stamina();
        assert_eq!(player.stamina, config::MAX_STAMINA);
        player.regenerate_stamina();
        assert_eq!(player.stamina, config::MAX_STAMINA);
    }

    #[test]
    fn test_respawn_touches_position_only() {
        let mut player = PlayerCharacter::spawn();
        player.facing = Direction::Up;
        player.stamina = 42;
        player.health = 87;
        player.respawn_at(Position::new(1, 1));
        assert_eq!(player.position, Position::new(1, 1));
        assert_eq!(player.facing, Direction::Up);
        assert_eq!(player.stamina, 42);
        assert_eq!(player.health, 87);
    }
}
