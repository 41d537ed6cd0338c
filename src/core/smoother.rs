//! One-pole exponential smoothing, the only interpolation primitive used by
//! the animation engine.
//!
//! Every "smooth" motion in the scene (head rotation, pupil offset, camera
//! position) is an independent channel blended toward its target by a fixed
//! fraction once per frame.

use glam::{Vec2, Vec3};

/// Move `current` a `factor` fraction of the way toward `target`.
///
/// `factor` is expected in `(0, 1]`: 1 snaps to the target, small values lag.
#[inline]
pub fn smooth(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

#[inline]
pub fn smooth_vec2(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

#[inline]
pub fn smooth_vec3(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current + (target - current) * factor
}

/// A `{current, target}` pair advanced once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SmoothedChannel {
    pub current: f32,
    pub target: f32,
}

impl SmoothedChannel {
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    /// Set the target and blend `current` toward it. Returns the new `current`.
    #[inline]
    pub fn update(&mut self, target: f32, factor: f32) -> f32 {
        self.target = target;
        self.current = smooth(self.current, target, factor);
        self.current
    }
}
