//! Per-scene animation state owned by the frame loop.
//!
//! All temporal state lives here and is advanced by [`AnimationState::frame`]
//! in a fixed order: smoothed channels, blink, breathing, scene writes,
//! particles, camera.

use super::camera::{Camera, CameraRig};
use super::clock::FrameTime;
use super::config::{AnimationConfig, ConfigError};
use super::head::{HeadAnimator, HeadPose};
use super::lighting;
use super::particles::ParticleField;
use super::pointer::PointerTracker;
use super::robot::RobotNodes;
use super::writes::{SceneWrites, TransformWrite};
use glam::Vec3;
use rand::prelude::*;

/// Derive an independent RNG per consumer from one base seed.
pub fn component_rng(seed: u64, index: u64) -> StdRng {
    let mix = seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(mix)
}

const BLINK_RNG: u64 = 1;
const PARTICLE_RNG: u64 = 2;

/// Summary of one frame, mostly useful for tests and logging.
#[derive(Clone, Copy, Debug)]
pub struct FrameOutput {
    pub pose: HeadPose,
    pub rim_light: f32,
    pub key_light: f32,
    pub camera: Camera,
}

pub struct AnimationState {
    config: AnimationConfig,
    head: HeadAnimator,
    particles: ParticleField,
    camera: CameraRig,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::build(AnimationConfig::default())
    }
}

impl AnimationState {
    pub fn new(config: AnimationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: AnimationConfig) -> Self {
        let head = HeadAnimator::new(&config, component_rng(config.seed, BLINK_RNG));
        let particles = ParticleField::new(&config, component_rng(config.seed, PARTICLE_RNG));
        let camera = CameraRig::new(config.camera_smoothing);
        Self {
            config,
            head,
            particles,
            camera,
        }
    }

    /// Assemble from explicit parts, e.g. a head with a pre-seeded blink baseline.
    pub fn from_parts(
        config: AnimationConfig,
        head: HeadAnimator,
        particles: ParticleField,
    ) -> Self {
        let camera = CameraRig::new(config.camera_smoothing);
        Self {
            config,
            head,
            particles,
            camera,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn camera(&self) -> &Camera {
        &self.camera.camera
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
    }

    /// Advance one frame. `pointer` is a snapshot taken at frame start.
    pub fn frame(
        &mut self,
        time: FrameTime,
        pointer: PointerTracker,
        nodes: &RobotNodes,
        writes: &mut SceneWrites,
    ) -> FrameOutput {
        let t = time.elapsed;
        let pose = self.head.update(pointer.state, pointer.proximity, t);
        let rim_light = lighting::rim_intensity(t);
        let key_light = lighting::key_intensity(pointer.proximity);

        writes.clear();
        writes.transforms.push(
            TransformWrite::new(nodes.head)
                .rotation(pose.rotation())
                .translation(pose.translation())
                .scale(Vec3::splat(pose.scale)),
        );
        writes
            .transforms
            .push(TransformWrite::new(nodes.left_pupil).translation(pose.left_pupil()));
        writes
            .transforms
            .push(TransformWrite::new(nodes.right_pupil).translation(pose.right_pupil()));
        let lid = Vec3::new(1.0, pose.eyelid_scale_y, 1.0);
        writes
            .transforms
            .push(TransformWrite::new(nodes.left_eyelid).scale(lid));
        writes
            .transforms
            .push(TransformWrite::new(nodes.right_eyelid).scale(lid));
        writes.emissive.push((nodes.eye_material, pose.eye_glow));
        writes.lights.push((nodes.rim_light, rim_light));
        writes.lights.push((nodes.key_light, key_light));

        self.particles.step(time.delta);

        let camera = *self.camera.update(pointer.state);
        writes.camera = Some(camera);

        FrameOutput {
            pose,
            rim_light,
            key_light,
            camera,
        }
    }
}
