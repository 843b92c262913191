//! # Actions Module
//!
//! Player intents, turn ownership, and the reported result of every rule
//! application.

use crate::{Direction, Position};
use serde::{Deserialize, Serialize};

/// Intensity tiers for the attack stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackKind {
    Light,
    Medium,
    Heavy,
    Special,
}

impl AttackKind {
    /// Lowercase name used in attack reports.
    pub const fn name(self) -> &'static str {
        match self {
            AttackKind::Light => "light",
            AttackKind::Medium => "medium",
            AttackKind::Heavy => "heavy",
            AttackKind::Special => "special",
        }
    }
}

/// A single intent from the player, as mapped from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Step one tile in the given direction.
    Move(Direction),
    /// Jump in place (stub).
    Jump,
    /// Raise a block with a fair chance to hold.
    Block,
    /// Dash or dodge (stub).
    Dash,
    /// Attack at the given intensity (stub).
    Attack(AttackKind),
}

/// Whose turn it currently is.
///
/// The core never owns or advances this. The embedding loop supplies it with
/// each batch of input, and dispatch drops player actions whenever it is not
/// [`TurnState::Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    Player,
    Npc,
}

/// What a successfully applied action did.
///
/// Outcomes are reports, not errors: drowning and a failed block are
/// ordinary outcomes. Rule violations (bad move vectors, acting while dead)
/// surface as [`crate::IsleError`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The player stepped onto a walkable tile.
    Moved { to: Position, facing: Direction },
    /// The step led off the board; nothing changed.
    Held,
    /// The player stepped into the sea and died where they stood.
    Drowned { at: Position },
    /// The player boarded the ship and arrived in a new area.
    Traveled { area: u32 },
    /// Jump stub fired.
    Jumped { facing: Direction },
    /// Dash stub fired.
    Dashed { facing: Direction },
    /// The block held or broke.
    Blocked { success: bool },
    /// Attack stub fired.
    Attacked { kind: AttackKind, facing: Direction },
}

impl ActionOutcome {
    /// Returns true if the board view is stale after this outcome.
    ///
    /// Only a completed step or an area transition changes the visible
    /// board. Boundary no-ops, stubs and drowning leave it as last drawn.
    pub const fn requires_redraw(&self) -> bool {
        matches!(
            self,
            ActionOutcome::Moved { .. } | ActionOutcome::Traveled { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redraw_only_for_visible_changes() {
        let moved = ActionOutcome::Moved {
            to: Position::new(2, 1),
            facing: Direction::Right,
        };
        let traveled = ActionOutcome::Traveled { area: 1 };
        assert!(moved.requires_redraw());
        assert!(traveled.requires_redraw());

        let quiet = [
            ActionOutcome::Held,
            ActionOutcome::Drowned {
                at: Position::new(1, 1),
            },
            ActionOutcome::Jumped {
                facing: Direction::Up,
            },
            ActionOutcome::Dashed {
                facing: Direction::Up,
            },
            ActionOutcome::Blocked { success: true },
            ActionOutcome::Attacked {
                kind: AttackKind::Light,
                facing: Direction::Up,
            },
        ];
        for outcome in quiet {
            assert!(!outcome.requires_redraw(), "{outcome:?}");
        }
    }

    #[test]
    fn test_attack_kind_names() {
        assert_eq!(AttackKind::Light.name(), "light");
        assert_eq!(AttackKind::Medium.name(), "medium");
        assert_eq!(AttackKind::Heavy.name(), "heavy");
        assert_eq!(AttackKind::Special.name(), "special");
    }
}
