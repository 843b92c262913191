//! # Input Module
//!
//! Key decoding and dispatch for player commands.
//!
//! Decoding is a pure keycode-to-command mapping so it stays testable
//! without a window; only [`InputHandler::poll_command`] talks to macroquad.
//! Dispatch owns the turn gate: game actions are dropped whenever it is not
//! the player's turn.

use crate::game::{ActionOutcome, AttackKind, Direction, GameSession, PlayerAction, TurnState};
use crate::IsleResult;
use macroquad::prelude::*;

/// Input handler for decoding and dispatching player commands.
pub struct InputHandler {
    /// Whether to accept arrow keys as movement aliases
    pub arrow_keys_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use islebound::InputHandler;
    ///
    /// let input_handler = InputHandler::new();
    /// // Ready to decode key presses
    /// ```
    pub fn new() -> Self {
        Self {
            arrow_keys_enabled: true,
        }
    }

    /// Decodes the key pressed this frame, if any.
    pub fn poll_command(&self) -> Option<PlayerCommand> {
        get_last_key_pressed().and_then(|key| self.command_for_key(key))
    }

    /// Maps a key press to a command.
    ///
    /// Unrecognized keys decode to `None` and are ignored without error.
    pub fn command_for_key(&self, key: KeyCode) -> Option<PlayerCommand> {
        match key {
            KeyCode::Escape => Some(PlayerCommand::Meta(MetaCommand::Quit)),
            KeyCode::F1 => Some(PlayerCommand::Meta(MetaCommand::Help)),
            KeyCode::F5 => Some(PlayerCommand::Meta(MetaCommand::Save)),
            _ => self.action_for_key(key).map(PlayerCommand::Act),
        }
    }

    /// Maps a key press to a game action.
    pub fn action_for_key(&self, key: KeyCode) -> Option<PlayerAction> {
        match key {
            // Movement keys - WASD
            KeyCode::W => Some(PlayerAction::Move(Direction::Up)),
            KeyCode::S => Some(PlayerAction::Move(Direction::Down)),
            KeyCode::A => Some(PlayerAction::Move(Direction::Left)),
            KeyCode::D => Some(PlayerAction::Move(Direction::Right)),

            // Movement keys - arrow aliases if enabled
            KeyCode::Up if self.arrow_keys_enabled => Some(PlayerAction::Move(Direction::Up)),
            KeyCode::Down if self.arrow_keys_enabled => Some(PlayerAction::Move(Direction::Down)),
            KeyCode::Left if self.arrow_keys_enabled => Some(PlayerAction::Move(Direction::Left)),
            KeyCode::Right if self.arrow_keys_enabled => Some(PlayerAction::Move(Direction::Right)),

            // Action keys
            KeyCode::Space => Some(PlayerAction::Jump),
            KeyCode::LeftShift | KeyCode::RightShift => Some(PlayerAction::Block),
            KeyCode::B => Some(PlayerAction::Dash),

            // Attack keys
            KeyCode::Z => Some(PlayerAction::Attack(AttackKind::Light)),
            KeyCode::X => Some(PlayerAction::Attack(AttackKind::Medium)),
            KeyCode::Y => Some(PlayerAction::Attack(AttackKind::Heavy)),
            KeyCode::V => Some(PlayerAction::Attack(AttackKind::Special)),

            _ => None,
        }
    }

    /// Applies a decoded action to the session, honoring the turn gate.
    ///
    /// Returns `Ok(None)` when the action was dropped because it is not the
    /// player's turn; the session is untouched in that case.
    pub fn dispatch(
        &self,
        session: &mut GameSession,
        action: PlayerAction,
        turn: TurnState,
    ) -> IsleResult<Option<ActionOutcome>> {
        if turn != TurnState::Player {
            return Ok(None);
        }

        let outcome = match action {
            PlayerAction::Move(direction) => session.attempt_move(direction)?,
            PlayerAction::Jump => session.attempt_jump()?,
            PlayerAction::Block => session.attempt_block()?,
            PlayerAction::Dash => session.attempt_dash()?,
            PlayerAction::Attack(kind) => session.attempt_attack(kind)?,
        };
        Ok(Some(outcome))
    }
}

/// A decoded key press: either a game action or a shell-level command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Forward to the game rules
    Act(PlayerAction),
    /// Handled by the demo shell itself
    Meta(MetaCommand),
}

/// Commands aimed at the demo shell rather than the game rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    /// Leave the game
    Quit,
    /// Show the key bindings
    Help,
    /// Offer a snapshot of the session
    Save,
}
