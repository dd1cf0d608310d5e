/// Web front-end constants: DOM wiring, asset location and render tuning.
///
/// World tuning (spawn rectangle, speeds, thresholds) lives in
/// `balloon_core::constants`; only browser/GPU specifics are kept here.
// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const START_BUTTON_ID: &str = "startButton";

// Shared balloon model, fetched relative to the page
pub const BALLOON_MODEL_URL: &str = "./models/balloon.glb";

// Rear camera on phones; desktops ignore it
pub const VIDEO_FACING_MODE: &str = "environment";

// Background before the camera feed is live
pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.02, 0.03];

// Fraction of base color visible on the unlit side of a balloon
pub const AMBIENT_LIGHT: f32 = 0.15;

// Initial instance buffer capacity; doubled on demand
pub const INSTANCE_CAPACITY: usize = 256;
