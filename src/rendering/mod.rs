//! # Rendering Module
//!
//! 2D board and UI rendering using macroquad.

pub mod display;

pub use display::*;
