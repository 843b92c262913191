//! # Snapshot Module
//!
//! The serializable save offer: what a session hands to an external store.

use crate::{IsleError, IsleResult, PlayerCharacter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The portable state of a session.
///
/// Exactly what an external store needs to resurrect a game: the player
/// record and the area they were in. The board never travels — every area
/// uses the standard layout and is rebuilt on restore. `save_id` is minted
/// fresh per capture so a store can key saves without inspecting them.
///
/// The crate never writes snapshots anywhere itself; storage belongs to the
/// embedder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub save_id: Uuid,
    pub player: PlayerCharacter,
    pub current_area: u32,
}

impl SessionSnapshot {
    /// Captures a snapshot of the given player and area.
    pub fn capture(player: &PlayerCharacter, current_area: u32) -> Self {
        Self {
            save_id: Uuid::new_v4(),
            player: player.clone(),
            current_area,
        }
    }

    /// Serializes the snapshot to JSON.
    pub fn to_json(&self) -> IsleResult<String> {
        serde_json::to_string_pretty(self).map_err(IsleError::from)
    }

    /// Loads a snapshot from JSON.
    pub fn from_json(json: &str) -> IsleResult<Self> {
        serde_json::from_str(json).map_err(IsleError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_copies_state() {
        let player = PlayerCharacter::spawn();
        let snapshot = SessionSnapshot::capture(&player, 3);
        assert_eq!(snapshot.player, player);
        assert_eq!(snapshot.current_area, 3);
    }

    #[test]
    fn test_save_ids_are_unique() {
        let player = PlayerCharacter::spawn();
        let a = SessionSnapshot::capture(&player, 0);
        let b = SessionSnapshot::capture(&player, 0);
        assert_ne!(a.save_id, b.save_id);
    }

    #[test]
    fn test_json_round_trip() {
        let mut player = PlayerCharacter::spawn();
        player.stamina = 73;
        let snapshot = SessionSnapshot::capture(&player, 5);

        let json = snapshot.to_json().unwrap();
        let loaded = SessionSnapshot::from_json(&json).unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_snapshot_excludes_board() {
        let snapshot = SessionSnapshot::capture(&PlayerCharacter::spawn(), 0);
        let json = snapshot.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert!(!keys.iter().any(|k| k.contains("board")));
        assert!(!keys.iter().any(|k| k.contains("tiles")));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            SessionSnapshot::from_json("not json at all"),
            Err(IsleError::Serde(_))
        ));
    }
}
