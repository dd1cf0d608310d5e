use crate::constants::UNPROJECT_DEPTH;
use crate::state::Camera;
use glam::{Vec2, Vec3};

/// Map a pointer position in client pixels to normalized device
/// coordinates (+Y up). A zero-sized surface maps to the center.
#[inline]
pub fn ndc_from_client(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new((x / width) * 2.0 - 1.0, 1.0 - (y / height) * 2.0)
}

/// World-space direction of the ray leaving the camera eye through `ndc`.
pub fn ray_direction(camera: &Camera, ndc: Vec2) -> Vec3 {
    let p = camera.unproject(ndc, UNPROJECT_DEPTH);
    (p - camera.eye).normalize()
}

/// Where a tap at `ndc` puts the light: `distance` units from the camera
/// along the tap ray.
pub fn aim_light(camera: &Camera, ndc: Vec2, distance: f32) -> Vec3 {
    camera.eye + ray_direction(camera, ndc) * distance
}
