//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the entire game simulation and has **zero
//! dependencies** on UI, I/O, or the terminal, making it:
//!
//! - **Deterministic**: the same input sequence replays identically
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: runs headless for tests and benchmarks
//!
//! # Module Structure
//!
//! - [`body`]: the single dynamic actor (position, velocity, jump state)
//! - [`physics`]: per-tick integration and axis-separated collision
//! - [`level`]: procedural level pattern generator, themes, goal placement
//! - [`progression`]: world/level counters with full wraparound
//! - [`game_state`]: ties body, level, and progression into one tick loop
//! - [`follow_cam`]: auxiliary 3D orbit camera with occlusion avoidance
//!
//! # Example
//!
//! ```
//! use tui_platformer_core::{GameState, PhysicsParams};
//! use tui_platformer_types::InputState;
//!
//! let mut game = GameState::new(PhysicsParams::default());
//! // Free fall from the spawn point eventually lands on the ground.
//! for _ in 0..120 {
//!     game.tick(InputState::default());
//! }
//! assert!(game.body.on_ground);
//! ```

pub mod body;
pub mod follow_cam;
pub mod game_state;
pub mod level;
pub mod physics;
pub mod progression;

pub use tui_platformer_types as types;

pub use body::Body;
pub use follow_cam::{Aabb, FollowCamera};
pub use game_state::GameState;
pub use level::{Goal, Level, LevelOverride, Pattern, Platform, PlatformSpec};
pub use physics::{PhysicsParams, StepEvents};
pub use progression::Progression;
