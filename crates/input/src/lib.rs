//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into movement state and discrete game actions,
//! with a timeout-based auto-release for terminals that never emit key
//! release events.

pub mod handler;
pub mod map;

pub use tui_platformer_types as types;

pub use handler::InputHandler;
pub use map::{classify_key, should_quit, KeyIntent};
