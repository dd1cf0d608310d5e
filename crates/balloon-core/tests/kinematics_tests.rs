// Host-side tests for per-frame balloon motion.

use balloon_core::kinematics::{advance, KinematicsParams};
use balloon_core::Balloon;
use glam::Vec3;

const PARAMS: KinematicsParams = KinematicsParams {
    ceiling_y: 5.0,
    sway_amplitude: 0.001,
};

fn balloon(y: f32, speed: f32) -> Balloon {
    Balloon {
        position: Vec3::new(0.0, y, 0.0),
        scale: 0.5,
        speed,
    }
}

#[test]
fn empty_set_is_a_no_op() {
    let mut balloons: Vec<Balloon> = Vec::new();
    assert_eq!(advance(&mut balloons, 12.5, &PARAMS), 0);
    assert!(balloons.is_empty());
}

#[test]
fn rises_by_own_speed_and_sways_with_height() {
    let mut balloons = vec![balloon(0.0, 0.01), balloon(1.0, 0.02)];
    let t = 3.0_f32;
    advance(&mut balloons, t, &PARAMS);
    assert!((balloons[0].position.y - 0.01).abs() < 1e-6);
    assert!((balloons[1].position.y - 1.02).abs() < 1e-6);
    let expected_x0 = (t + 0.01).sin() * 0.001;
    let expected_x1 = (t + 1.02).sin() * 0.001;
    assert!((balloons[0].position.x - expected_x0).abs() < 1e-7);
    assert!((balloons[1].position.x - expected_x1).abs() < 1e-7);
    assert_eq!(balloons[0].position.z, 0.0);
}

#[test]
fn crossing_ceiling_retires_in_same_pass() {
    let mut balloons = vec![
        balloon(4.995, 0.01), // crosses this frame
        balloon(0.0, 0.01),
        balloon(4.999, 0.02), // crosses this frame
        balloon(4.98, 0.01),  // stays at 4.99
    ];
    let retired = advance(&mut balloons, 0.0, &PARAMS);
    assert_eq!(retired, 2);
    assert_eq!(balloons.len(), 2);
    assert!(balloons.iter().all(|b| b.position.y <= PARAMS.ceiling_y));
    // survivors keep their relative order
    assert!(balloons[0].position.y < balloons[1].position.y);
}

#[test]
fn no_balloon_survives_two_frames_above_ceiling() {
    let mut balloons: Vec<Balloon> = (0..50)
        .map(|i| balloon(-2.5 + i as f32 * 0.15, 0.01 + (i % 10) as f32 * 0.001))
        .collect();
    let mut t = 0.0;
    for _ in 0..2000 {
        advance(&mut balloons, t, &PARAMS);
        assert!(balloons.iter().all(|b| b.position.y <= PARAMS.ceiling_y));
        t += 1.0 / 60.0;
    }
    assert!(balloons.is_empty());
}
