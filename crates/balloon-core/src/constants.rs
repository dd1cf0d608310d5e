// Tuning constants shared by the world model and the web front-end.

// Spawn placement rectangle (world units, planar x/z)
pub const SPAWN_HALF_WIDTH_X: f32 = 2.0;
pub const SPAWN_HALF_DEPTH_Z: f32 = 1.0;
pub const SPAWN_START_Y: f32 = -2.5; // balloons rise from below the frame
pub const SPAWN_MAX_ATTEMPTS: u32 = 10;
pub const SPAWN_MAX_ATTEMPTS_CAP: u32 = 1000; // upper bound for the max_attempts override
pub const MIN_SEPARATION: f32 = 0.3; // planar distance between balloons at spawn time

// Balloon instance
pub const BALLOON_SCALE: f32 = 0.5;
pub const RISE_SPEED_MIN: f32 = 0.01; // world units per frame
pub const RISE_SPEED_SPAN: f32 = 0.01;

// Kinematics
pub const RETIRE_CEILING_Y: f32 = 5.0;
pub const SWAY_AMPLITUDE: f32 = 0.001;

// Loudness gate (mean byte-frequency energy, 0..255)
pub const VOLUME_THRESHOLD: f32 = 60.0;
pub const ANALYSER_FFT_SIZE: u32 = 256;

// Camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Directional light
pub const LIGHT_START_POSITION: [f32; 3] = [3.0, 3.0, 5.0];
pub const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const LIGHT_INTENSITY: f32 = 1.2;
pub const LIGHT_DISTANCE: f32 = 5.0; // how far from the camera a tap places the light
pub const UNPROJECT_DEPTH: f32 = 0.5;
