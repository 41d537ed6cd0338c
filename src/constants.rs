// Frontend wiring and presentation constants. Animation tuning lives in
// `core::constants`; these only describe how the page is presented.

// DOM ids
pub const CANVAS_ID: &str = "app-canvas";
pub const LOADING_SCREEN_ID: &str = "loading-screen";

// Loading screen stays up while assets settle
pub const LOADING_DELAY_MS: i32 = 2500;

// Canvas backing store is capped at 2x to bound fill cost on dense displays
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Particles
pub const PARTICLE_COLOR: u32 = 0x00d4ff;
pub const PARTICLE_OPACITY: f32 = 0.6;
pub const PARTICLE_RADIUS: f32 = 0.015; // point size 0.03
