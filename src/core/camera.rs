//! Camera description and the pointer-driven parallax rig.

use super::constants::*;
use super::pointer::PointerState;
use super::smoother::smooth_vec3;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            target: CAMERA_LOOK_AT,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Parallax rig: the eye drifts after the pointer, the look-at point stays put.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub camera: Camera,
    factor: f32,
}

impl CameraRig {
    pub fn new(factor: f32) -> Self {
        Self {
            camera: Camera::default(),
            factor,
        }
    }

    #[inline]
    pub fn target_for(pointer: PointerState) -> Vec3 {
        Vec3::new(
            pointer.x * CAMERA_PARALLAX_X,
            pointer.y * CAMERA_PARALLAX_Y,
            CAMERA_DISTANCE,
        )
    }

    pub fn update(&mut self, pointer: PointerState) -> &Camera {
        let target = Self::target_for(pointer);
        self.camera.eye = smooth_vec3(self.camera.eye, target, self.factor);
        self.camera.target = CAMERA_LOOK_AT;
        &self.camera
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.camera.aspect = width.max(1) as f32 / height.max(1) as f32;
    }
}
