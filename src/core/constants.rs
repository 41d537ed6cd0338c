use glam::Vec3;

// Shared animation tuning constants. `AnimationConfig::default()` is built from these.

// Smoothing factors (fraction of remaining distance covered per frame)
pub const HEAD_SMOOTHING: f32 = 0.05; // slow, weighty
pub const EYE_SMOOTHING: f32 = 0.15; // eyes lead the head
pub const CAMERA_SMOOTHING: f32 = 0.02; // subtle parallax

// Head rotation range (radians at pointer = ±1)
pub const HEAD_YAW_RANGE: f32 = 0.4;
pub const HEAD_PITCH_RANGE: f32 = 0.25;

// Pupil displacement range (local units at pointer = ±1)
pub const EYE_OFFSET_X_RANGE: f32 = 0.15;
pub const EYE_OFFSET_Y_RANGE: f32 = 0.10;

// Blink timing (seconds)
pub const BLINK_DURATION_SECS: f64 = 0.15;
pub const BLINK_INTERVAL_MIN_SECS: f64 = 3.0;
pub const BLINK_INTERVAL_MAX_SECS: f64 = 5.0;
pub const BLINK_SQUASH: f32 = 0.9; // eyelid scale.y = 1 - closure * squash

// Breathing
pub const BREATH_RATE: f64 = 0.8; // angular frequency, rad/s
pub const BREATH_BOB: f32 = 0.01;
pub const BREATH_SCALE: f32 = 0.005;

// Eye glow: base + (1 - proximity) * span
pub const EYE_GLOW_BASE: f32 = 1.5;
pub const EYE_GLOW_SPAN: f32 = 1.5;

// Lights
pub const RIM_LIGHT_BASE: f32 = 2.0;
pub const RIM_LIGHT_SWING: f32 = 0.3;
pub const RIM_LIGHT_RATE: f64 = 0.5;
pub const KEY_LIGHT_BASE: f32 = 1.5;
pub const KEY_LIGHT_SPAN: f32 = 0.5;

// Particles
pub const PARTICLE_COUNT: usize = 200;
pub const PARTICLE_SPAWN_WIDTH: f32 = 20.0; // x in [-10, 10)
pub const PARTICLE_SPAWN_HEIGHT: f32 = 15.0; // initial y in [-7.5, 7.5)
pub const PARTICLE_SPAWN_DEPTH: f32 = 10.0;
pub const PARTICLE_DEPTH_OFFSET: f32 = -5.0; // z in [-10, 0)
pub const PARTICLE_CEILING_Y: f32 = 8.0; // reset when y > ceiling
pub const PARTICLE_FLOOR_Y: f32 = -8.0; // y after reset
pub const PARTICLE_DRIFT_XZ: f32 = 0.005; // lateral velocity in [-0.0025, 0.0025)
pub const PARTICLE_RISE_MIN: f32 = 0.002;
pub const PARTICLE_RISE_SPAN: f32 = 0.01; // upward velocity in [0.002, 0.012)
pub const PARTICLE_REFERENCE_HZ: f32 = 60.0;

// Camera rig
pub const CAMERA_PARALLAX_X: f32 = 0.3;
pub const CAMERA_PARALLAX_Y: f32 = 0.2;
pub const CAMERA_DISTANCE: f32 = 6.0;
pub const CAMERA_LOOK_AT: Vec3 = Vec3::new(0.0, -0.5, 0.0);
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Pupil rest positions inside the eye-socket group
pub const LEFT_PUPIL_REST: Vec3 = Vec3::new(-0.45, 0.0, 0.12);
pub const RIGHT_PUPIL_REST: Vec3 = Vec3::new(0.45, 0.0, 0.12);

pub const DEFAULT_SEED: u64 = 0x5EED_B07;
