//! Facade crate: re-exports the workspace members under one roof.
//!
//! Binaries, integration tests, and benchmarks all go through these
//! paths; the members stay independently compilable.

pub use tui_platformer_core as core;
pub use tui_platformer_data as data;
pub use tui_platformer_input as input;
pub use tui_platformer_term as term;
pub use tui_platformer_types as types;
