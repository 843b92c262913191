//! # Display Management
//!
//! Screen management and 2D graphics rendering functionality using macroquad.

use crate::game::{GameSession, Tile, TurnState};
use crate::{config, Position};
use macroquad::prelude::*;

/// Macroquad display manager for the game.
///
/// Draws the board, the player marker, a stats panel and the most recent
/// log messages. Holds no game state beyond the message history; everything
/// else is read from the session each frame.
pub struct GameDisplay {
    /// Tile edge length in pixels
    pub cell_size: f32,
    /// UI panel width in pixels
    pub ui_panel_width: f32,
    /// Message history
    pub messages: Vec<String>,
    /// Maximum number of messages to keep
    pub max_messages: usize,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    /// Creates a new display manager.
    pub fn new() -> Self {
        Self {
            cell_size: config::CELL_SIZE,
            ui_panel_width: 260.0,
            messages: Vec::new(),
            max_messages: 100,
        }
    }

    /// Window size that fits the standard board, the stats panel and the
    /// message strip.
    pub fn window_size(&self) -> (f32, f32) {
        let width = config::BOARD_WIDTH as f32 * self.cell_size + self.ui_panel_width;
        let height = config::BOARD_HEIGHT as f32 * self.cell_size + 100.0; // Leave space for messages
        (width, height)
    }

    /// Renders the complete game screen.
    ///
    /// This includes the board, the player marker, the stats panel and the
    /// message area.
    pub fn render(&self, session: &GameSession, turn: TurnState) {
        clear_background(BLACK);

        self.render_board(session);
        self.render_player(session);
        self.render_ui(session, turn);
        self.render_messages();
    }

    /// Fill color for a tile.
    pub fn tile_color(tile: Tile) -> Color {
        match tile {
            Tile::Water => Color::from_rgba(0x4D, 0x90, 0xFE, 255),
            Tile::Land => Color::from_rgba(0x7C, 0xFC, 0x00, 255),
            Tile::Bridge => Color::from_rgba(0xFF, 0xD7, 0x00, 255),
            Tile::Ship => Color::from_rgba(0x8B, 0x45, 0x13, 255),
        }
    }

    /// Renders every board tile with a grid outline.
    fn render_board(&self, session: &GameSession) {
        let board = &session.board;
        for y in 0..board.height as i32 {
            for x in 0..board.width as i32 {
                if let Ok(tile) = board.tile_at(Position::new(x, y)) {
                    let px = x as f32 * self.cell_size;
                    let py = y as f32 * self.cell_size;
                    draw_rectangle(px, py, self.cell_size, self.cell_size, Self::tile_color(tile));
                    draw_rectangle_lines(px, py, self.cell_size, self.cell_size, 1.0, BLACK);
                }
            }
        }
    }

    /// Renders the player as a red square on their tile.
    fn render_player(&self, session: &GameSession) {
        let pos = session.player.position;
        draw_rectangle(
            pos.x as f32 * self.cell_size,
            pos.y as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
            Color::from_rgba(0xFF, 0x00, 0x00, 255),
        );
    }

    /// Renders the stats and controls panel next to the board.
    fn render_ui(&self, session: &GameSession, turn: TurnState) {
        let panel_x = session.board.width as f32 * self.cell_size + 10.0;
        let mut line_y = 20.0;
        let line_height = 20.0;

        draw_text("ISLEBOUND", panel_x, line_y, 24.0, WHITE);
        line_y += line_height * 2.0;

        let player = &session.player;
        draw_text(
            &format!("Health: {}/{}", player.health, config::MAX_HEALTH),
            panel_x,
            line_y,
            18.0,
            WHITE,
        );
        line_y += line_height;

        draw_text(
            &format!("Stamina: {}/{}", player.stamina, config::MAX_STAMINA),
            panel_x,
            line_y,
            18.0,
            WHITE,
        );
        line_y += line_height;

        draw_text(
            &format!("Area: {}", session.current_area),
            panel_x,
            line_y,
            18.0,
            WHITE,
        );
        line_y += line_height;

        draw_text(
            &format!("Position: ({}, {})", player.position.x, player.position.y),
            panel_x,
            line_y,
            18.0,
            WHITE,
        );
        line_y += line_height;

        draw_text(
            &format!("Facing: {}", player.facing.name()),
            panel_x,
            line_y,
            18.0,
            WHITE,
        );
        line_y += line_height;

        let turn_label = match turn {
            TurnState::Player => "Turn: player",
            TurnState::Npc => "Turn: npc",
        };
        draw_text(turn_label, panel_x, line_y, 18.0, SKYBLUE);
        line_y += line_height;

        if !player.is_alive() {
            draw_text("YOU DROWNED", panel_x, line_y, 20.0, RED);
            line_y += line_height;
        }
        line_y += line_height;

        draw_text("Controls:", panel_x, line_y, 18.0, GREEN);
        line_y += line_height;

        let controls = [
            "WASD/Arrow keys: Move",
            "SPACE: Jump",
            "SHIFT: Block",
            "B: Dash",
            "Z/X/Y/V: Attack",
            "F5: Save",
            "F1: Help",
            "ESC: Quit",
        ];
        for control in &controls {
            draw_text(control, panel_x, line_y, 16.0, WHITE);
            line_y += line_height;
        }
    }

    /// Renders the message area at the bottom of the screen.
    fn render_messages(&self) {
        let message_count = 3;
        let line_height = 18.0;
        let message_area_y = screen_height() - 80.0;

        // Draw background for message area
        draw_rectangle(
            0.0,
            message_area_y - 10.0,
            screen_width(),
            90.0,
            Color::new(0.0, 0.0, 0.0, 0.8),
        );

        let start_index = self.messages.len().saturating_sub(message_count);
        for (i, message) in self.messages.iter().skip(start_index).enumerate() {
            let y = message_area_y + i as f32 * line_height;
            draw_text(message, 10.0, y, 16.0, WHITE);
        }
    }

    /// Adds a message to the message history.
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);

        // Keep only the most recent messages
        if self.messages.len() > self.max_messages {
            self.messages.remove(0);
        }
    }
}
