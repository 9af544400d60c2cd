//! Level geometry: the procedural pattern generator, world themes, and
//! goal placement.
//!
//! Generation is a pure function of `(world, level)` - no randomness, so
//! calling it twice yields geometrically identical platform sets. External
//! per-level overrides slot in piecewise; anything absent falls back to
//! the procedural path.

use tui_platformer_types::{
    Color, PlatformKind, Rect, BROWN, CYAN, DARK_BLUE, DARK_GREEN, GOAL_SIZE, GREEN,
    GROUND_HEIGHT, ORANGE, PURPLE, RED, SCREEN_H, SCREEN_W, YELLOW,
};

/// Background theme per world, worlds 1..=9.
const WORLD_BACKGROUNDS: [Color; 9] = [
    Color::new(92, 148, 252), // sky blue
    Color::new(0, 0, 168),    // night blue
    Color::new(0, 168, 0),    // green
    Color::new(168, 0, 0),    // red
    Color::new(168, 168, 0),  // yellow
    Color::new(168, 0, 168),  // purple
    Color::new(0, 168, 168),  // cyan
    Color::new(168, 84, 0),   // brown
    Color::new(0, 84, 168),   // dark blue
];

/// Platform color per world, worlds 1..=9.
const WORLD_PLATFORM_COLORS: [Color; 9] = [
    GREEN, DARK_GREEN, ORANGE, RED, YELLOW, PURPLE, CYAN, BROWN, DARK_BLUE,
];

const FALLBACK_BACKGROUND: Color = Color::new(92, 148, 252);

/// Defensive goal position for a level with no platforms at all.
/// Unreachable through the built-in patterns, which always emit one.
const EMPTY_LEVEL_GOAL: (f32, f32) = (SCREEN_W - 50.0, 100.0);

/// Vertical margin between the last platform's top and the goal.
const GOAL_LIFT: f32 = 40.0;

/// Background color for the given world, with a fixed fallback for any
/// index outside the theme table.
pub fn world_background(world: u32) -> Color {
    world
        .checked_sub(1)
        .and_then(|i| WORLD_BACKGROUNDS.get(i as usize))
        .copied()
        .unwrap_or(FALLBACK_BACKGROUND)
}

/// Platform color for the given world; out-of-table worlds get green.
pub fn world_platform_color(world: u32) -> Color {
    world
        .checked_sub(1)
        .and_then(|i| WORLD_PLATFORM_COLORS.get(i as usize))
        .copied()
        .unwrap_or(GREEN)
}

/// A static collision rectangle with a rendering style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub rect: Rect,
    pub color: Color,
    pub kind: PlatformKind,
}

/// The level-completion trigger rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    pub rect: Rect,
}

impl Goal {
    fn at(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, GOAL_SIZE, GOAL_SIZE),
        }
    }
}

/// One of the five hand-authored layout templates, selected by
/// `(level - 1) mod 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Three widely spaced islands.
    Easy,
    /// Five ascending steps.
    Stairs,
    /// Alternating-height chain across the screen.
    Gaps,
    /// Six perches ascending then descending.
    High,
    /// Six small perches, the hardest traversal.
    Final,
}

impl Pattern {
    pub fn for_level(level: u32) -> Self {
        match level.saturating_sub(1) % 5 {
            0 => Pattern::Easy,
            1 => Pattern::Stairs,
            2 => Pattern::Gaps,
            3 => Pattern::High,
            _ => Pattern::Final,
        }
    }

    /// Layout rows as `(x, rise above the ground top, width, height)`,
    /// in emit order. The last row anchors the goal.
    fn rows(self) -> &'static [(f32, f32, f32, f32)] {
        match self {
            Pattern::Easy => &[
                (150.0, 100.0, 120.0, 20.0),
                (350.0, 150.0, 120.0, 20.0),
                (550.0, 100.0, 120.0, 20.0),
            ],
            Pattern::Stairs => &[
                (150.0, 60.0, 100.0, 20.0),
                (280.0, 110.0, 100.0, 20.0),
                (410.0, 160.0, 100.0, 20.0),
                (540.0, 210.0, 100.0, 20.0),
                (670.0, 260.0, 100.0, 20.0),
            ],
            Pattern::Gaps => &[
                (100.0, 120.0, 100.0, 20.0),
                (250.0, 180.0, 100.0, 20.0),
                (400.0, 120.0, 100.0, 20.0),
                (550.0, 180.0, 100.0, 20.0),
                (700.0, 120.0, 100.0, 20.0),
            ],
            Pattern::High => &[
                (80.0, 200.0, 70.0, 20.0),
                (200.0, 250.0, 70.0, 20.0),
                (320.0, 300.0, 70.0, 20.0),
                (440.0, 250.0, 70.0, 20.0),
                (560.0, 200.0, 70.0, 20.0),
                (680.0, 150.0, 70.0, 20.0),
            ],
            Pattern::Final => &[
                (120.0, 150.0, 60.0, 20.0),
                (240.0, 220.0, 60.0, 20.0),
                (360.0, 290.0, 60.0, 20.0),
                (480.0, 220.0, 60.0, 20.0),
                (600.0, 150.0, 60.0, 20.0),
                (720.0, 80.0, 60.0, 20.0),
            ],
        }
    }
}

/// A single platform supplied by external level data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSpec {
    pub rect: Rect,
    pub color: Color,
    pub kind: PlatformKind,
}

/// Per-(world, level) overrides from external data. Every field is
/// optional; `None` means "use the procedural path for this piece".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelOverride {
    pub platforms: Option<Vec<PlatformSpec>>,
    pub background: Option<Color>,
    /// Feeds the pattern tables in place of the world platform color.
    pub platform_color: Option<Color>,
    pub goal: Option<(f32, f32)>,
}

/// An immutable, fully generated level. Replaced wholesale on transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub world: u32,
    pub level: u32,
    pub background: Color,
    /// Ordered list; order matters for rendering and for the resolver's
    /// accepted multi-overlap behavior, not for single-platform physics.
    pub platforms: Vec<Platform>,
    pub goal: Goal,
}

impl Level {
    /// Deterministic procedural layout for `(world, level)`.
    pub fn generate(world: u32, level: u32) -> Self {
        Self::generate_with(world, level, None)
    }

    /// Layout with optional external overrides.
    pub fn generate_with(world: u32, level: u32, data: Option<&LevelOverride>) -> Self {
        let background = data
            .and_then(|d| d.background)
            .unwrap_or_else(|| world_background(world));

        // A supplied platform list replaces the procedural layout
        // entirely; the goal still falls back piecewise.
        if let Some(specs) = data.and_then(|d| d.platforms.as_ref()) {
            let platforms: Vec<Platform> = specs
                .iter()
                .map(|s| Platform {
                    rect: s.rect,
                    color: s.color,
                    kind: s.kind,
                })
                .collect();
            // Absent goal falls back to the procedural placement rule
            // over the supplied platforms.
            let goal = match data.and_then(|d| d.goal) {
                Some((x, y)) => Goal::at(x, y),
                None => place_goal(&platforms),
            };
            return Self {
                world,
                level,
                background,
                platforms,
                goal,
            };
        }

        let color = data
            .and_then(|d| d.platform_color)
            .unwrap_or_else(|| world_platform_color(world));

        let mut platforms = Vec::with_capacity(8);
        platforms.push(Platform {
            rect: Rect::new(0.0, SCREEN_H - GROUND_HEIGHT, SCREEN_W, GROUND_HEIGHT),
            color: BROWN,
            kind: PlatformKind::Ground,
        });

        let base = SCREEN_H - GROUND_HEIGHT;
        for &(x, rise, w, h) in Pattern::for_level(level).rows() {
            platforms.push(Platform {
                rect: Rect::new(x, base - rise, w, h),
                color,
                kind: PlatformKind::Normal,
            });
        }

        let goal = place_goal(&platforms);
        Self {
            world,
            level,
            background,
            platforms,
            goal,
        }
    }
}

/// Goal centered above the last emitted platform; fixed fallback point
/// near the top-right for a (degenerate) empty platform list.
fn place_goal(platforms: &[Platform]) -> Goal {
    match platforms.last() {
        Some(p) => Goal::at(
            p.rect.x + (p.rect.w - GOAL_SIZE) / 2.0,
            p.rect.y - GOAL_LIFT,
        ),
        None => Goal::at(EMPTY_LEVEL_GOAL.0, EMPTY_LEVEL_GOAL.1),
    }
}
