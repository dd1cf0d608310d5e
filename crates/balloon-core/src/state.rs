//! Scene-side value types shared with the web frontend.
//!
//! Nothing here touches platform APIs; the renderer reads these to build
//! camera matrices, per-instance transforms and the lighting uniform.

use crate::constants::*;
use glam::{Mat4, Vec2, Vec3};

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

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
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

    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }

    /// Keep the aspect ratio in sync with the drawing surface; degenerate
    /// sizes are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Unproject a normalized-device point at `depth` (0 = near plane,
    /// 1 = far plane) back into world space.
    pub fn unproject(&self, ndc: Vec2, depth: f32) -> Vec3 {
        let inv = self.view_projection().inverse();
        inv.project_point3(Vec3::new(ndc.x, ndc.y, depth))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub target: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            position: Vec3::from_array(LIGHT_START_POSITION),
            target: Vec3::ZERO,
            color: LIGHT_COLOR,
            intensity: LIGHT_INTENSITY,
        }
    }
}

impl DirectionalLight {
    /// Unit vector pointing from the lit surface toward the light.
    pub fn to_light(&self) -> Vec3 {
        (self.position - self.target).normalize_or_zero()
    }
}

/// One floating balloon instance. Every instance shares the same mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Balloon {
    pub position: Vec3,
    pub scale: f32,
    /// Rise per frame, fixed at creation.
    pub speed: f32,
}

impl Balloon {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            glam::Quat::IDENTITY,
            self.position,
        )
    }

    /// Squared distance on the ground plane (x/z) to another point.
    #[inline]
    pub fn planar_distance_sq(&self, x: f32, z: f32) -> f32 {
        let dx = self.position.x - x;
        let dz = self.position.z - z;
        dx * dx + dz * dz
    }
}
