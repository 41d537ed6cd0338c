//! Head and eye motion: pointer tracking, breathing and blinking combined
//! into one pose per frame.

use super::blink::BlinkController;
use super::breathing;
use super::config::AnimationConfig;
use super::constants::*;
use super::lighting::eye_glow;
use super::pointer::PointerState;
use super::smoother::{smooth_vec2, SmoothedChannel};
use glam::{Quat, Vec2, Vec3};
use rand::rngs::StdRng;

/// Everything the head writes into the scene for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadPose {
    pub yaw: f32,
    pub pitch: f32,
    pub bob: f32,
    pub scale: f32,
    pub eye_offset: Vec2,
    pub blink_closure: f32,
    pub eyelid_scale_y: f32,
    pub eye_glow: f32,
}

impl HeadPose {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(glam::EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::new(0.0, self.bob, 0.0)
    }

    pub fn left_pupil(&self) -> Vec3 {
        LEFT_PUPIL_REST + self.eye_offset.extend(0.0)
    }

    pub fn right_pupil(&self) -> Vec3 {
        RIGHT_PUPIL_REST + self.eye_offset.extend(0.0)
    }
}

pub struct HeadAnimator {
    yaw: SmoothedChannel,
    pitch: SmoothedChannel,
    eye_offset: Vec2,
    head_factor: f32,
    eye_factor: f32,
    blink: BlinkController,
}

impl HeadAnimator {
    pub fn new(config: &AnimationConfig, blink_rng: StdRng) -> Self {
        Self {
            yaw: SmoothedChannel::default(),
            pitch: SmoothedChannel::default(),
            eye_offset: Vec2::ZERO,
            head_factor: config.head_smoothing,
            eye_factor: config.eye_smoothing,
            blink: BlinkController::new(config, blink_rng),
        }
    }

    pub fn with_blink(config: &AnimationConfig, blink: BlinkController) -> Self {
        Self {
            yaw: SmoothedChannel::default(),
            pitch: SmoothedChannel::default(),
            eye_offset: Vec2::ZERO,
            head_factor: config.head_smoothing,
            eye_factor: config.eye_smoothing,
            blink,
        }
    }

    pub fn blink(&self) -> &BlinkController {
        &self.blink
    }

    pub fn update(&mut self, pointer: PointerState, proximity: f32, t: f64) -> HeadPose {
        let yaw = self.yaw.update(pointer.x * HEAD_YAW_RANGE, self.head_factor);
        let pitch = self
            .pitch
            .update(-pointer.y * HEAD_PITCH_RANGE, self.head_factor);

        let eye_target = Vec2::new(
            pointer.x * EYE_OFFSET_X_RANGE,
            pointer.y * EYE_OFFSET_Y_RANGE,
        );
        self.eye_offset = smooth_vec2(self.eye_offset, eye_target, self.eye_factor);

        let blink_closure = self.blink.update(t);
        let breath = breathing::sample(t);

        HeadPose {
            yaw,
            pitch,
            bob: breath.bob,
            scale: breath.scale,
            eye_offset: self.eye_offset,
            blink_closure,
            eyelid_scale_y: 1.0 - blink_closure * BLINK_SQUASH,
            eye_glow: eye_glow(proximity),
        }
    }
}
