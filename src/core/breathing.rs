use super::constants::{BREATH_BOB, BREATH_RATE, BREATH_SCALE};

/// Breathing pose at elapsed time `t`. Stateless: any `t` can be sampled
/// directly and the motion is periodic with period `2π / BREATH_RATE`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breath {
    pub bob: f32,
    pub scale: f32,
}

#[inline]
pub fn phase(t: f64) -> f32 {
    (t * BREATH_RATE).sin() as f32
}

#[inline]
pub fn bob(t: f64) -> f32 {
    phase(t) * BREATH_BOB
}

#[inline]
pub fn scale_pulse(t: f64) -> f32 {
    1.0 + phase(t) * BREATH_SCALE
}

#[inline]
pub fn sample(t: f64) -> Breath {
    let p = phase(t);
    Breath {
        bob: p * BREATH_BOB,
        scale: 1.0 + p * BREATH_SCALE,
    }
}
