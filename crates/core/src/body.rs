//! The player body: a plain physics-state struct, no drawable hierarchy.
//!
//! Rendering concerns (position, size, facing) are read off the struct by
//! the view layer; the body itself knows nothing about pixels.

use tui_platformer_types::{Rect, MAX_JUMPS, PLAYER_SIZE, SCREEN_H, SCREEN_W};

/// Canonical spawn point: body centered at (SCREEN_W / 4, SCREEN_H / 2).
pub const SPAWN_X: f32 = SCREEN_W / 4.0 - PLAYER_SIZE / 2.0;
pub const SPAWN_Y: f32 = SCREEN_H / 2.0 - PLAYER_SIZE / 2.0;

/// The single controllable dynamic actor.
///
/// Invariants maintained by [`crate::physics::step`]:
/// `|vx| <= max_vel_x` and `vy <= max_vel_y` after every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Top-left corner of the 32x32 bounding box.
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Horizontal acceleration input for this tick: -acc, 0, or +acc.
    pub acc_x: f32,
    /// True only immediately after a downward collision resolution.
    pub on_ground: bool,
    /// Jumps taken since the last grounding.
    pub jump_count: u8,
    pub facing_right: bool,
}

impl Body {
    pub fn at_spawn() -> Self {
        Self {
            x: SPAWN_X,
            y: SPAWN_Y,
            vx: 0.0,
            vy: 0.0,
            acc_x: 0.0,
            on_ground: false,
            jump_count: 0,
            facing_right: true,
        }
    }

    /// Current bounding box.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }

    /// Reset to the spawn point with zeroed velocity and jump budget.
    pub fn respawn(&mut self) {
        self.x = SPAWN_X;
        self.y = SPAWN_Y;
        self.vx = 0.0;
        self.vy = 0.0;
        self.jump_count = 0;
    }

    /// Apply the jump impulse if grounded and under the jump budget.
    ///
    /// Returns whether the impulse was applied; a second call without an
    /// intervening landing is a no-op.
    pub fn jump(&mut self, jump_strength: f32) -> bool {
        if self.on_ground && self.jump_count < MAX_JUMPS {
            self.vy = jump_strength;
            self.on_ground = false;
            self.jump_count += 1;
            true
        } else {
            false
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::at_spawn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_point_is_quarter_width_half_height() {
        let body = Body::at_spawn();
        assert_eq!(body.x + PLAYER_SIZE / 2.0, SCREEN_W / 4.0);
        assert_eq!(body.y + PLAYER_SIZE / 2.0, SCREEN_H / 2.0);
    }

    #[test]
    fn jump_requires_ground_contact() {
        let mut body = Body::at_spawn();
        assert!(!body.jump(-12.0), "airborne body must not jump");
        assert_eq!(body.vy, 0.0);

        body.on_ground = true;
        assert!(body.jump(-12.0));
        assert_eq!(body.vy, -12.0);
        assert!(!body.on_ground);
        assert_eq!(body.jump_count, 1);
    }

    #[test]
    fn second_jump_without_landing_is_a_no_op() {
        let mut body = Body::at_spawn();
        body.on_ground = true;
        assert!(body.jump(-12.0));

        // Even if something re-flags ground contact, the jump budget holds.
        body.on_ground = true;
        assert!(!body.jump(-12.0));
        assert_eq!(body.jump_count, 1);
    }

    #[test]
    fn respawn_resets_kinematics_but_not_facing() {
        let mut body = Body::at_spawn();
        body.x = 500.0;
        body.y = 700.0;
        body.vx = -3.0;
        body.vy = 9.0;
        body.jump_count = 1;
        body.facing_right = false;

        body.respawn();
        assert_eq!((body.x, body.y), (SPAWN_X, SPAWN_Y));
        assert_eq!((body.vx, body.vy), (0.0, 0.0));
        assert_eq!(body.jump_count, 0);
        assert!(!body.facing_right);
    }
}
