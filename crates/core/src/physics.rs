//! Per-tick kinematics and axis-separated collision resolution.
//!
//! The axis ordering is load-bearing: horizontal movement is applied and
//! resolved before any vertical movement, so a body pressing diagonally
//! into a surface slides along it instead of catching on corners.

use tui_platformer_types::{PLAYER_SIZE, SCREEN_H, SCREEN_W};

use crate::body::Body;
use crate::level::Platform;

/// Immutable physics configuration, built once at startup and threaded
/// explicitly into [`step`]. All values are per-tick quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsParams {
    /// Downward acceleration per tick.
    pub gravity: f32,
    /// Magnitude of the horizontal acceleration input.
    pub player_acc: f32,
    /// Small negative constant; velocity is scaled by `1 + friction`
    /// every tick, decaying exponentially toward zero.
    pub player_friction: f32,
    /// Initial upward velocity of a jump (negative = up).
    pub jump_strength: f32,
    /// Horizontal speed clamp (symmetric).
    pub max_vel_x: f32,
    /// Terminal fall velocity; upward motion is never clamped.
    pub max_vel_y: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            player_acc: 0.6,
            player_friction: -0.12,
            jump_strength: -12.0,
            max_vel_x: 6.0,
            max_vel_y: 12.0,
        }
    }
}

/// What happened during one [`step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepEvents {
    /// Downward collision resolved this tick.
    pub landed: bool,
    /// Upward collision (head bump) resolved this tick.
    pub bumped: bool,
    /// Body fell out of the world and was reset to spawn.
    pub respawned: bool,
}

/// Advance the body by one 60 Hz tick against the level's platform list.
///
/// Order: gravity + input + friction, horizontal move + resolve, vertical
/// move + resolve, facing update, screen-edge clamp, fall-out respawn.
pub fn step(params: &PhysicsParams, platforms: &[Platform], body: &mut Body) -> StepEvents {
    let mut ev = StepEvents::default();

    // Gravity with terminal velocity; no clamp on upward motion.
    body.vy += params.gravity;
    if body.vy > params.max_vel_y {
        body.vy = params.max_vel_y;
    }

    // Horizontal input plus exponential friction decay.
    body.vx += body.acc_x;
    body.vx *= 1.0 + params.player_friction;
    body.vx = body.vx.clamp(-params.max_vel_x, params.max_vel_x);

    body.x += body.vx;
    resolve_horizontal(platforms, body);

    body.y += body.vy;
    // Airborne by default; only a downward resolution below re-grounds.
    body.on_ground = false;
    resolve_vertical(platforms, body, &mut ev);

    if body.vx > 0.0 && !body.facing_right {
        body.facing_right = true;
    } else if body.vx < 0.0 && body.facing_right {
        body.facing_right = false;
    }

    // Screen-edge clamp zeroes only the offending direction.
    if body.x < 0.0 {
        body.x = 0.0;
        body.vx = body.vx.max(0.0);
    }
    if body.x + PLAYER_SIZE > SCREEN_W {
        body.x = SCREEN_W - PLAYER_SIZE;
        body.vx = body.vx.min(0.0);
    }

    // Fell out of the world: top edge past the bottom bound.
    if body.y > SCREEN_H {
        body.respawn();
        ev.respawned = true;
    }

    ev
}

/// Horizontal pass: snap the moving edge to the platform and stop.
///
/// Corrections apply in list order; the scan is not restarted after a
/// correction, so overlapping multi-platform stacks can settle on an
/// inconsistent position. Accepted approximation at this level scale.
fn resolve_horizontal(platforms: &[Platform], body: &mut Body) {
    for p in platforms {
        if body.rect().intersects(&p.rect) {
            if body.vx > 0.0 {
                body.x = p.rect.x - PLAYER_SIZE;
            } else if body.vx < 0.0 {
                body.x = p.rect.right();
            }
            body.vx = 0.0;
        }
    }
}

/// Vertical pass: landing re-grounds and restores the jump budget, a head
/// bump only kills the upward velocity.
fn resolve_vertical(platforms: &[Platform], body: &mut Body, ev: &mut StepEvents) {
    for p in platforms {
        if body.rect().intersects(&p.rect) {
            if body.vy > 0.0 {
                body.y = p.rect.y - PLAYER_SIZE;
                body.on_ground = true;
                body.vy = 0.0;
                body.jump_count = 0;
                ev.landed = true;
            } else if body.vy < 0.0 {
                body.y = p.rect.bottom();
                body.vy = 0.0;
                ev.bumped = true;
            }
        }
    }
}
