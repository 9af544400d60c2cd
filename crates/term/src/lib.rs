//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the world is drawn into a
//! plain framebuffer of styled cells, which is then flushed to the
//! terminal by a diffing backend. No widget or layout framework.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render the 800x600 world scaled to whatever viewport the terminal has
//! - Flush only the cells that changed since the previous frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_platformer_core as core;
pub use tui_platformer_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
