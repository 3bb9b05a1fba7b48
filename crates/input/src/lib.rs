//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Every key press
//! produces at most one action and every action at most one move.

pub mod map;

pub use falling_blocks_types as types;

pub use map::{handle_key_event, should_quit};
