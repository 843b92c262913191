//! # Islebound Main Entry Point
//!
//! Initializes the session, sets up macroquad rendering, and runs the demo
//! game loop.

use clap::Parser;
use islebound::{
    config, ActionOutcome, GameDisplay, GameSession, InputHandler, IsleError, IsleResult,
    MetaCommand, PlayerCommand, TurnState,
};
use log::info;
use macroquad::prelude::*;

/// Command line arguments for the Islebound demo.
#[derive(Parser, Debug)]
#[command(name = "islebound")]
#[command(about = "A turn-based island exploration prototype")]
#[command(version)]
struct Args {
    /// Random seed for the session's chance-based actions
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[macroquad::main("Islebound")]
async fn main() -> IsleResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Islebound v{}", islebound::VERSION);

    run_game(&args).await
}

/// Initializes env_logger; `RUST_LOG` overrides the CLI default.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

/// Runs the main game loop with macroquad graphics.
async fn run_game(args: &Args) -> IsleResult<()> {
    let seed = args.seed.unwrap_or(config::DEFAULT_SEED);
    info!("Starting session with seed: {}", seed);

    let mut session = GameSession::new(seed)?;
    let input_handler = InputHandler::new();
    let mut display = GameDisplay::new();

    let (window_width, window_height) = display.window_size();
    request_new_screen_size(window_width, window_height);

    // The demo ships no NPCs, so the turn indicator never leaves the player.
    let turn = TurnState::Player;

    display.add_message("Welcome to Islebound!".to_string());
    display.add_message("Use WASD/arrows to move; mind the water".to_string());

    let mut stamina_clock: f64 = 0.0;

    loop {
        if let Some(command) = input_handler.poll_command() {
            match command {
                PlayerCommand::Meta(MetaCommand::Quit) => {
                    info!("Player quit the game");
                    break;
                }

                PlayerCommand::Meta(MetaCommand::Help) => {
                    display.add_message(
                        "Help: WASD/arrows=move, SPACE=jump, SHIFT=block, B=dash, \
                         Z/X/Y/V=attack, F5=save, ESC=quit"
                            .to_string(),
                    );
                }

                PlayerCommand::Meta(MetaCommand::Save) => match session.snapshot().to_json() {
                    Ok(json) => {
                        info!("Session snapshot:\n{}", json);
                        display.add_message("Snapshot logged to console".to_string());
                    }
                    Err(e) => {
                        display.add_message(format!("Save failed: {}", e));
                    }
                },

                PlayerCommand::Act(action) => {
                    match input_handler.dispatch(&mut session, action, turn) {
                        Ok(Some(outcome)) => {
                            if let Some(message) = outcome_message(&outcome) {
                                info!("{}", message);
                                display.add_message(message);
                            }
                        }
                        Ok(None) => {}
                        Err(IsleError::PlayerDead) => {
                            display.add_message("You are dead. ESC to quit.".to_string());
                        }
                        Err(e) => {
                            display.add_message(format!("Invalid action: {}", e));
                        }
                    }
                }
            }
        }

        // Passive stamina regeneration on a fixed cadence.
        stamina_clock += f64::from(get_frame_time());
        while stamina_clock >= config::STAMINA_TICK_SECS {
            stamina_clock -= config::STAMINA_TICK_SECS;
            session.tick_stamina();
        }

        display.render(&session, turn);

        next_frame().await;
    }

    info!("Game loop ended");
    Ok(())
}

/// Maps an action outcome to a log message, if the outcome warrants one.
///
/// Plain steps and boundary no-ops stay quiet; everything else reports.
fn outcome_message(outcome: &ActionOutcome) -> Option<String> {
    match outcome {
        ActionOutcome::Moved { .. } | ActionOutcome::Held => None,
        ActionOutcome::Drowned { .. } => Some("Player fell into water and died!".to_string()),
        ActionOutcome::Traveled { area } => {
            Some(format!("Transitioning to area {} via the ship.", area))
        }
        ActionOutcome::Jumped { .. } => Some("Jump action initiated.".to_string()),
        ActionOutcome::Dashed { .. } => Some("Dash/Dodge activated.".to_string()),
        ActionOutcome::Blocked { success: true } => Some("Block successful!".to_string()),
        ActionOutcome::Blocked { success: false } => Some("Block failed!".to_string()),
        ActionOutcome::Attacked { kind, facing } => Some(format!(
            "{} attack initiated facing {}",
            kind.name(),
            facing.name()
        )),
    }
}
