//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The 800x600 world is scaled to whatever cell area the viewport
//! offers, with one HUD row on top and one help row at the bottom. Every
//! world rectangle is drawn at least one cell large so small platforms
//! never vanish at tiny terminal sizes.

use crate::core::level::Platform;
use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{
    Color, PlatformKind, Rect, BLACK, GRAY, GREEN, RED, SCREEN_H, SCREEN_W, WHITE, YELLOW,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// The cell area the world scales into: everything between the HUD row
/// and the help row.
#[derive(Debug, Clone, Copy)]
struct WorldArea {
    y0: u16,
    width: u16,
    height: u16,
}

const HUD_ROWS: u16 = 1;
const HELP_ROWS: u16 = 1;

/// A lightweight terminal renderer for the platformer.
pub struct GameView {
    /// Shown as `ENGINE: LOADED` / `ENGINE: FALLBACK` in the HUD.
    engine_loaded: bool,
}

impl GameView {
    pub fn new(engine_loaded: bool) -> Self {
        Self { engine_loaded }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a
    /// framebuffer across frames and only resize when the terminal size
    /// changes.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);

        let sky = CellStyle::colors(dim(state.level.background), state.level.background);
        fb.clear(sky.into_cell(' '));

        let area = WorldArea {
            y0: HUD_ROWS,
            width: viewport.width,
            height: viewport.height.saturating_sub(HUD_ROWS + HELP_ROWS),
        };
        if area.width == 0 || area.height == 0 {
            return;
        }

        for platform in &state.level.platforms {
            self.draw_platform(fb, area, platform);
        }
        self.draw_goal(fb, area, &state.level.goal.rect);
        self.draw_player(fb, area, state);

        self.draw_hud(fb, state, viewport);
        if state.transitioning() {
            self.draw_banner(fb, viewport, "LEVEL COMPLETE!");
        }
    }

    fn draw_platform(&self, fb: &mut FrameBuffer, area: WorldArea, platform: &Platform) {
        let (x, y, w, h) = project(area, &platform.rect);
        let (ch, style) = match platform.kind {
            PlatformKind::Ground => ('#', CellStyle::colors(dim(platform.color), platform.color)),
            PlatformKind::Normal => ('=', CellStyle::colors(dim(platform.color), platform.color)),
        };
        fb.fill_rect(x, area.y0 + y, w, h, ch, style);
    }

    /// Goal flag: pole topped by a pennant.
    fn draw_goal(&self, fb: &mut FrameBuffer, area: WorldArea, goal: &Rect) {
        let (x, y, w, h) = project(area, goal);
        let pole_x = x + w / 2;
        let pole = CellStyle::colors(GRAY, fb.get(pole_x, area.y0 + y).map_or(BLACK, |c| c.style.bg));
        for dy in 0..h.max(2) {
            fb.put_char(pole_x, area.y0 + y + dy, '|', pole);
        }
        let flag = CellStyle::colors(WHITE, GREEN).bold();
        fb.put_char(pole_x.saturating_add(1), area.y0 + y, '>', flag);
    }

    fn draw_player(&self, fb: &mut FrameBuffer, area: WorldArea, state: &GameState) {
        let (x, y, w, h) = project(area, &state.body.rect());
        let style = CellStyle::colors(WHITE, RED).bold();
        fb.fill_rect(x, area.y0 + y, w, h, ' ', style);
        // Facing marker in the top row of the body block.
        let face = if state.body.facing_right { '>' } else { '<' };
        let fx = if state.body.facing_right {
            x + w.saturating_sub(1)
        } else {
            x
        };
        fb.put_char(fx, area.y0 + y, face, style);
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport) {
        let hud = CellStyle::colors(WHITE, BLACK);
        fb.fill_rect(0, 0, viewport.width, HUD_ROWS, ' ', hud);

        let world = format!(
            "WORLD {}-{}",
            state.progression.world, state.progression.level
        );
        fb.put_str(1, 0, &world, hud.bold());

        let progress = format!("PROGRESS {:>2}/45", state.progression.global_index());
        fb.put_str(12, 0, &progress, hud);

        let engine = if self.engine_loaded {
            ("ENGINE: LOADED", CellStyle::colors(GREEN, BLACK))
        } else {
            ("ENGINE: FALLBACK", CellStyle::colors(YELLOW, BLACK))
        };
        let ex = viewport.width.saturating_sub(engine.0.len() as u16 + 1);
        fb.put_str(ex, 0, engine.0, engine.1);

        let help = "arrows/ad move  space jump  n/p level  r restart  q quit";
        let hy = viewport.height.saturating_sub(1);
        fb.fill_rect(0, hy, viewport.width, 1, ' ', hud);
        fb.put_str(1, hy, help, hud);
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, viewport: Viewport, text: &str) {
        let style = CellStyle::colors(BLACK, YELLOW).bold();
        let w = text.len() as u16 + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height / 2;
        fb.fill_rect(x, y, w, 1, ' ', style);
        fb.put_str(x + 1, y, text, style);
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Project a world rect into cell coordinates within the world area.
/// Returns `(x, y, w, h)` with both extents at least one cell.
fn project(area: WorldArea, rect: &Rect) -> (u16, u16, u16, u16) {
    let sx = area.width as f32 / SCREEN_W;
    let sy = area.height as f32 / SCREEN_H;
    let x = (rect.x * sx) as u16;
    let y = (rect.y * sy) as u16;
    let w = ((rect.w * sx).ceil() as u16).max(1);
    let h = ((rect.h * sy).ceil() as u16).max(1);
    (
        x.min(area.width.saturating_sub(1)),
        y.min(area.height.saturating_sub(1)),
        w,
        h,
    )
}

/// Darker shade of a color, used for foreground texture on filled areas.
fn dim(c: Color) -> Color {
    Color::new(c.r / 2, c.g / 2, c.b / 2)
}
