//! Shared types module - data structures and world constants
//!
//! Pure data with no external dependencies, usable in any context
//! (simulation core, input layer, terminal rendering, tests).
//!
//! # World Space
//!
//! The simulation runs in a fixed 800x600 "pixel" space regardless of the
//! terminal size; the renderer scales it to the viewport. The player body
//! is a 32x32 axis-aligned box anchored at its top-left corner.
//!
//! # Timing
//!
//! One logical tick = one rendered frame, paced to 60 Hz (`TICK_MS` = 16).
//! All physics constants are expressed per tick, not per second.

/// World width in simulation pixels.
pub const SCREEN_W: f32 = 800.0;

/// World height in simulation pixels.
pub const SCREEN_H: f32 = 600.0;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Side length of the player's square bounding box.
pub const PLAYER_SIZE: f32 = 32.0;

/// Side length of the square goal trigger.
pub const GOAL_SIZE: f32 = 32.0;

/// Height of the full-width ground platform at the bottom of every level.
pub const GROUND_HEIGHT: f32 = 40.0;

/// Jumps allowed per grounding (single-jump rules).
pub const MAX_JUMPS: u8 = 1;

/// Worlds before wrapping back to world 1.
pub const TOTAL_WORLDS: u32 = 9;

/// Levels per world before advancing to the next world.
pub const LEVELS_PER_WORLD: u32 = 5;

/// Ticks between goal contact and the level transition (≈ 1 second).
pub const TRANSITION_DELAY_TICKS: u32 = 60;

/// Axis-aligned rectangle in world space, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test; touching edges do not count as intersecting.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// NES-style palette used by the built-in themes and the renderer.
pub const WHITE: Color = Color::new(255, 255, 255);
pub const BLACK: Color = Color::new(0, 0, 0);
pub const RED: Color = Color::new(200, 0, 0);
pub const GREEN: Color = Color::new(0, 168, 0);
pub const DARK_GREEN: Color = Color::new(0, 100, 0);
pub const BLUE: Color = Color::new(0, 104, 216);
pub const DARK_BLUE: Color = Color::new(0, 0, 168);
pub const BROWN: Color = Color::new(152, 104, 56);
pub const YELLOW: Color = Color::new(232, 216, 0);
pub const ORANGE: Color = Color::new(248, 136, 0);
pub const PURPLE: Color = Color::new(104, 0, 168);
pub const CYAN: Color = Color::new(0, 216, 216);
pub const GRAY: Color = Color::new(120, 120, 120);

/// Rendering style tag for a platform; collision ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformKind {
    #[default]
    Normal,
    Ground,
}

/// Edge-triggered actions that fire exactly once per key press.
///
/// Continuous-hold movement is carried separately in [`InputState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Jump impulse (no-op unless the body is grounded).
    Jump,
    /// Debug: skip to the next level.
    NextLevel,
    /// Debug: go back to the previous level.
    PrevLevel,
    /// Debug: regenerate the current level.
    Restart,
}

/// Discrete input vector sampled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}
