//! Camera description shared by the web and native renderers.
//!
//! The hero scene uses a fixed camera looking down -Z; the mesh plane sits at
//! the origin with a slight tilt. `viewport_size` reports the world-space
//! extents of the frustum at the plane, which is what the grid is sized from.

use crate::constants::{CAMERA_FOV_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR, MESH_TILT_X};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed hero camera at the configured distance, for a given aspect.
    pub fn hero(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// World-space (width, height) visible at `distance` in front of the eye.
    pub fn viewport_size(&self, distance: f32) -> (f32, f32) {
        let h = 2.0 * distance * (self.fovy_radians * 0.5).tan();
        (h * self.aspect, h)
    }

    /// Full MVP for the tilted hero mesh plane.
    pub fn hero_mvp(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix() * hero_model_matrix()
    }
}

/// Model transform for the hero mesh: a slight tilt away from the viewer.
#[inline]
pub fn hero_model_matrix() -> Mat4 {
    Mat4::from_rotation_x(MESH_TILT_X)
}
