use crate::state::Balloon;

#[derive(Clone, Copy, Debug)]
pub struct KinematicsParams {
    pub ceiling_y: f32,
    pub sway_amplitude: f32,
}

/// Move every balloon one frame: rise by its own speed, then drift sideways
/// along a sine of wall-clock time and height. Balloons above the ceiling
/// are removed in the same pass. Returns how many were retired.
pub fn advance(balloons: &mut Vec<Balloon>, elapsed_sec: f32, params: &KinematicsParams) -> usize {
    let before = balloons.len();
    balloons.retain_mut(|b| {
        b.position.y += b.speed;
        b.position.x += (elapsed_sec + b.position.y).sin() * params.sway_amplitude;
        b.position.y <= params.ceiling_y
    });
    before - balloons.len()
}
