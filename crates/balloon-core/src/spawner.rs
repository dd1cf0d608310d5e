use crate::config::WorldParams;
use crate::state::Balloon;
use glam::Vec3;
use rand::prelude::*;

/// Rejection-sampling placement of new balloons on the ground plane.
pub struct Spawner {
    rng: StdRng,
    half_width_x: f32,
    half_depth_z: f32,
    min_separation_sq: f32,
    max_attempts: u32,
    start_y: f32,
    scale: f32,
    speed_min: f32,
    speed_span: f32,
}

impl Spawner {
    pub fn new(params: &WorldParams, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            half_width_x: params.half_width_x,
            half_depth_z: params.half_depth_z,
            min_separation_sq: params.min_separation_sq(),
            max_attempts: params.max_attempts,
            start_y: params.start_y,
            scale: params.scale,
            speed_min: params.speed_min,
            speed_span: params.speed_span,
        }
    }

    /// Try up to `max_attempts` random spots and return a balloon for the
    /// first one that keeps its distance from everything in `existing`.
    /// `None` means every candidate was too close; nothing is consumed
    /// beyond the random draws.
    pub fn attempt_spawn(&mut self, existing: &[Balloon]) -> Option<Balloon> {
        for attempt in 0..self.max_attempts {
            let x = (self.rng.gen::<f32>() - 0.5) * 2.0 * self.half_width_x;
            let z = (self.rng.gen::<f32>() - 0.5) * 2.0 * self.half_depth_z;
            if self.is_clear(existing, x, z) {
                log::trace!("[spawn] accepted ({x:.2},{z:.2}) after {} attempt(s)", attempt + 1);
                let speed = self.speed_min + self.rng.gen::<f32>() * self.speed_span;
                return Some(Balloon {
                    position: Vec3::new(x, self.start_y, z),
                    scale: self.scale,
                    speed,
                });
            }
        }
        log::debug!(
            "[spawn] no free spot after {} attempts ({} balloons)",
            self.max_attempts,
            existing.len()
        );
        None
    }

    #[inline]
    pub fn is_clear(&self, existing: &[Balloon], x: f32, z: f32) -> bool {
        existing
            .iter()
            .all(|b| b.planar_distance_sq(x, z) >= self.min_separation_sq)
    }
}
