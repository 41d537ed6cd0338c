pub mod blink;
pub mod breathing;
pub mod camera;
pub mod clock;
pub mod config;
pub mod constants;
pub mod head;
pub mod lighting;
pub mod mesh;
pub mod particles;
pub mod pointer;
pub mod robot;
pub mod scene;
pub mod smoother;
pub mod state;
pub mod writes;

pub use blink::{closure_fraction, BlinkController, BlinkState};
pub use camera::{Camera, CameraRig};
pub use clock::{FrameClock, FrameTime};
pub use config::*;
pub use constants::*;
pub use head::{HeadAnimator, HeadPose};
pub use particles::{Particle, ParticleField};
pub use pointer::{normalize_client, PointerState, PointerTracker, SurfaceRect};
pub use robot::{build_scene, rgb, RobotNodes};
pub use scene::*;
pub use smoother::{smooth, smooth_vec2, smooth_vec3, SmoothedChannel};
pub use state::{AnimationState, FrameOutput};
pub use writes::{SceneWrites, TransformWrite};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
