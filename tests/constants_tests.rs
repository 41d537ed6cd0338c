// Host-side tests for constants and their mathematical relationships.
// Both constants files are standalone, so they are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    for f in [HEAD_SMOOTHING, EYE_SMOOTHING, CAMERA_SMOOTHING] {
        assert!(f > 0.0 && f <= 1.0);
    }
    // Eyes lead the head, the camera trails both
    assert!(EYE_SMOOTHING > HEAD_SMOOTHING);
    assert!(HEAD_SMOOTHING > CAMERA_SMOOTHING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn blink_timing_is_consistent() {
    assert!(BLINK_DURATION_SECS > 0.0);
    assert!(BLINK_INTERVAL_MIN_SECS < BLINK_INTERVAL_MAX_SECS);
    // A blink must finish before the next one can be scheduled
    assert!(BLINK_DURATION_SECS < BLINK_INTERVAL_MIN_SECS);
    assert!(BLINK_SQUASH > 0.0 && BLINK_SQUASH < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_volume_contains_spawn_height() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_FLOOR_Y < PARTICLE_CEILING_Y);
    // Initial y range [-h/2, h/2) sits inside the recycle band
    assert!(-PARTICLE_SPAWN_HEIGHT * 0.5 >= PARTICLE_FLOOR_Y);
    assert!(PARTICLE_SPAWN_HEIGHT * 0.5 <= PARTICLE_CEILING_Y);
    assert!(PARTICLE_RISE_MIN > 0.0);
    assert!(PARTICLE_DRIFT_XZ > 0.0);
    // z spawn range [-10, 0)
    assert_eq!(-PARTICLE_SPAWN_DEPTH * 0.5 + PARTICLE_DEPTH_OFFSET, -10.0);
    assert_eq!(PARTICLE_SPAWN_DEPTH * 0.5 + PARTICLE_DEPTH_OFFSET, 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sits_outside_the_head() {
    assert!(CAMERA_DISTANCE > 2.0);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOV_DEGREES > 0.0 && CAMERA_FOV_DEGREES < 180.0);
    assert!(CAMERA_PARALLAX_X.abs() < CAMERA_DISTANCE);
    assert!(CAMERA_PARALLAX_Y.abs() < CAMERA_DISTANCE);
}

#[test]
fn pupils_are_mirrored() {
    assert_eq!(LEFT_PUPIL_REST.x, -RIGHT_PUPIL_REST.x);
    assert_eq!(LEFT_PUPIL_REST.y, RIGHT_PUPIL_REST.y);
    assert_eq!(LEFT_PUPIL_REST.z, RIGHT_PUPIL_REST.z);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn light_ranges_stay_positive() {
    assert!(RIM_LIGHT_BASE - RIM_LIGHT_SWING > 0.0);
    assert!(KEY_LIGHT_BASE > 0.0 && KEY_LIGHT_SPAN > 0.0);
    assert!(EYE_GLOW_BASE > 0.0 && EYE_GLOW_SPAN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frontend_constants_are_sane() {
    assert!(!CANVAS_ID.is_empty());
    assert!(!LOADING_SCREEN_ID.is_empty());
    assert!(LOADING_DELAY_MS > 0);
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(PARTICLE_OPACITY > 0.0 && PARTICLE_OPACITY <= 1.0);
    assert!(PARTICLE_RADIUS > 0.0);
    assert!(PARTICLE_COLOR <= 0xff_ffff);
}
