use super::constants::*;
use thiserror::Error;

/// How the blink scheduler treats the very first frame it sees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlinkBoot {
    /// Baseline is the first observed time; no envelope plays at boot.
    #[default]
    Deferred,
    /// A blink envelope starts on the first frame.
    Immediate,
}

/// Particle integration mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleIntegration {
    /// Fixed step per call; apparent speed follows the display refresh rate.
    PerFrame,
    /// Step scaled by `delta * reference_hz`, matching `PerFrame` at that rate.
    DeltaScaled { reference_hz: f32 },
}

impl Default for ParticleIntegration {
    fn default() -> Self {
        Self::PerFrame
    }
}

/// Spawn/reset volume for the particle field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleBounds {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub depth_offset: f32,
    pub ceiling_y: f32,
    pub floor_y: f32,
}

impl Default for ParticleBounds {
    fn default() -> Self {
        Self {
            width: PARTICLE_SPAWN_WIDTH,
            height: PARTICLE_SPAWN_HEIGHT,
            depth: PARTICLE_SPAWN_DEPTH,
            depth_offset: PARTICLE_DEPTH_OFFSET,
            ceiling_y: PARTICLE_CEILING_Y,
            floor_y: PARTICLE_FLOOR_Y,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    pub head_smoothing: f32,
    pub eye_smoothing: f32,
    pub camera_smoothing: f32,
    pub blink_duration_secs: f64,
    /// Uniform range `[min, max)` the next blink delay is drawn from.
    pub blink_interval_secs: (f64, f64),
    pub blink_boot: BlinkBoot,
    pub particle_count: usize,
    pub particle_bounds: ParticleBounds,
    pub particle_integration: ParticleIntegration,
    pub seed: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            head_smoothing: HEAD_SMOOTHING,
            eye_smoothing: EYE_SMOOTHING,
            camera_smoothing: CAMERA_SMOOTHING,
            blink_duration_secs: BLINK_DURATION_SECS,
            blink_interval_secs: (BLINK_INTERVAL_MIN_SECS, BLINK_INTERVAL_MAX_SECS),
            blink_boot: BlinkBoot::default(),
            particle_count: PARTICLE_COUNT,
            particle_bounds: ParticleBounds::default(),
            particle_integration: ParticleIntegration::default(),
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{channel} smoothing factor {value} is outside (0, 1]")]
    SmoothingOutOfRange { channel: &'static str, value: f32 },
    #[error("blink duration must be positive, got {0}s")]
    BlinkDuration(f64),
    #[error("blink interval [{min}, {max}) must be non-empty and longer than the blink itself")]
    BlinkInterval { min: f64, max: f64 },
    #[error("particle field needs at least one particle")]
    NoParticles,
    #[error("particle ceiling {ceiling} must be above floor {floor}")]
    ParticleBounds { floor: f32, ceiling: f32 },
    #[error("particle reference rate must be positive, got {0}Hz")]
    ReferenceRate(f32),
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (channel, value) in [
            ("head", self.head_smoothing),
            ("eye", self.eye_smoothing),
            ("camera", self.camera_smoothing),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::SmoothingOutOfRange { channel, value });
            }
        }
        if !(self.blink_duration_secs > 0.0) {
            return Err(ConfigError::BlinkDuration(self.blink_duration_secs));
        }
        let (min, max) = self.blink_interval_secs;
        if !(min < max && min > self.blink_duration_secs) {
            return Err(ConfigError::BlinkInterval { min, max });
        }
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        let b = &self.particle_bounds;
        if !(b.ceiling_y > b.floor_y) {
            return Err(ConfigError::ParticleBounds {
                floor: b.floor_y,
                ceiling: b.ceiling_y,
            });
        }
        if let ParticleIntegration::DeltaScaled { reference_hz } = self.particle_integration {
            if !(reference_hz > 0.0) {
                return Err(ConfigError::ReferenceRate(reference_hz));
            }
        }
        Ok(())
    }
}
