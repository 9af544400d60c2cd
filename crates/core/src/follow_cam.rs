//! Auxiliary third-person follow camera for a 3D scene.
//!
//! Self-contained and unused by the 2D tick loop: the camera orbits a
//! player pivot, pulls in toward the player when level geometry occludes
//! the ideal position, and exposes a ground-snap helper for the player
//! body it follows.

use glam::Vec3;

/// Distance from the pivot to the ideal camera position.
pub const CAMERA_DISTANCE: f32 = 12.0;
/// Height of the ideal position above the pivot.
pub const CAMERA_HEIGHT: f32 = 6.0;
/// Exponential follow rate, per second.
pub const CAMERA_SMOOTHING: f32 = 6.0;
/// Manual orbit rate, degrees per second.
pub const ORBIT_DEGREES_PER_SEC: f32 = 60.0;
/// Downward acceleration for the followed body, per second squared.
pub const GROUND_GRAVITY: f32 = -0.5;
/// Upward velocity applied on jump.
pub const JUMP_IMPULSE: f32 = 10.0;

/// Occlusion ray starts this far above the player origin.
const RAY_ORIGIN_LIFT: f32 = 2.0;
/// The camera looks at the player origin lifted by this much.
const LOOK_AT_LIFT: f32 = 1.0;
/// Ground probe starts this far above the body and reaches this far down.
const GROUND_PROBE_LIFT: f32 = 0.5;
const GROUND_PROBE_RANGE: f32 = 1.0;

/// Axis-aligned box used for camera occlusion and ground probes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Slab-method ray intersection. Returns the entry distance along
    /// `dir` (clamped to 0 for a ray starting inside the box), or `None`
    /// when the box is missed or farther than `max_t`.
    ///
    /// `dir` must be normalized. Zero direction components divide to
    /// infinity, which the min/max fold handles.
    pub fn raycast(&self, origin: Vec3, dir: Vec3, max_t: f32) -> Option<f32> {
        let inv = dir.recip();
        let t1 = (self.min - origin) * inv;
        let t2 = (self.max - origin) * inv;
        let t_near = t1.min(t2).max_element();
        let t_far = t1.max(t2).min_element();
        if t_near > t_far || t_far < 0.0 {
            return None;
        }
        let t = t_near.max(0.0);
        (t <= max_t).then_some(t)
    }
}

/// Nearest hit distance across the scene, if any box is within `max_t`.
fn raycast_scene(scene: &[Aabb], origin: Vec3, dir: Vec3, max_t: f32) -> Option<f32> {
    scene
        .iter()
        .filter_map(|b| b.raycast(origin, dir, max_t))
        .min_by(|a, b| a.total_cmp(b))
}

/// Smoothed orbit camera with line-of-sight enforcement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    /// Orbit angle around the vertical axis, radians.
    pub yaw: f32,
    pub position: Vec3,
}

impl FollowCamera {
    /// Camera starting directly at its ideal position behind the player.
    pub fn new(player: Vec3) -> Self {
        let mut cam = Self {
            yaw: 0.0,
            position: Vec3::ZERO,
        };
        cam.position = cam.ideal_position(player);
        cam
    }

    /// Unit vector pointing from the pivot back toward the camera.
    fn back(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Where the camera wants to be absent any occlusion.
    pub fn ideal_position(&self, player: Vec3) -> Vec3 {
        player + self.back() * CAMERA_DISTANCE + Vec3::new(0.0, CAMERA_HEIGHT, 0.0)
    }

    /// Advance the camera one frame.
    ///
    /// `rotate` is the orbit input in [-1, 1]. The target is the ideal
    /// position, pulled in to the nearest occluder along the ray from the
    /// player; the camera then lerps toward it at the smoothing rate.
    /// Returns the point the camera should look at.
    pub fn update(&mut self, player: Vec3, rotate: f32, scene: &[Aabb], dt: f32) -> Vec3 {
        self.yaw += rotate * ORBIT_DEGREES_PER_SEC.to_radians() * dt;

        let ideal = self.ideal_position(player);
        let origin = player + Vec3::new(0.0, RAY_ORIGIN_LIFT, 0.0);
        let to_ideal = ideal - origin;
        let dist = to_ideal.length();
        let target = if dist > f32::EPSILON {
            let dir = to_ideal / dist;
            match raycast_scene(scene, origin, dir, dist) {
                Some(t) => origin + dir * t,
                None => ideal,
            }
        } else {
            ideal
        };

        let alpha = (CAMERA_SMOOTHING * dt).min(1.0);
        self.position = self.position.lerp(target, alpha);
        self.look_target(player)
    }

    pub fn look_target(&self, player: Vec3) -> Vec3 {
        player + Vec3::new(0.0, LOOK_AT_LIFT, 0.0)
    }
}

/// Ground contact for the followed body: probe straight down from just
/// above the position; on a hit, snap to the surface and zero any
/// downward velocity, then optionally jump. Returns whether the body is
/// grounded after the call.
pub fn ground_snap(
    position: &mut Vec3,
    velocity: &mut Vec3,
    scene: &[Aabb],
    jump_held: bool,
) -> bool {
    let origin = *position + Vec3::new(0.0, GROUND_PROBE_LIFT, 0.0);
    let probe = GROUND_PROBE_LIFT + GROUND_PROBE_RANGE;
    match raycast_scene(scene, origin, Vec3::NEG_Y, probe) {
        Some(t) => {
            position.y = origin.y - t;
            if velocity.y < 0.0 {
                velocity.y = 0.0;
            }
            if jump_held {
                velocity.y = JUMP_IMPULSE;
                return false;
            }
            true
        }
        None => false,
    }
}
