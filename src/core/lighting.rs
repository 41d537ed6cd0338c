use super::constants::*;

/// Rim light intensity: a slow swing around its base level.
#[inline]
pub fn rim_intensity(t: f64) -> f32 {
    RIM_LIGHT_BASE + (t * RIM_LIGHT_RATE).sin() as f32 * RIM_LIGHT_SWING
}

/// Key light brightens as the cursor approaches the viewport center.
#[inline]
pub fn key_intensity(proximity: f32) -> f32 {
    KEY_LIGHT_BASE + (1.0 - proximity) * KEY_LIGHT_SPAN
}

/// Eye emissive intensity, in `[1.5, 3.0]`; maximal with the cursor at center.
#[inline]
pub fn eye_glow(proximity: f32) -> f32 {
    EYE_GLOW_BASE + (1.0 - proximity) * EYE_GLOW_SPAN
}
