//! Render-ready scene data
//!
//! The graphics backend lives in the host; this module turns `GameState`
//! into cameras, lights and instance buffers it can upload directly.

pub mod ascii;
pub mod camera;
pub mod instances;
pub mod scene;

pub use camera::{Camera, Spotlight, Viewport};
pub use instances::{CarInstance, CubeInstance, GoalInstance};
pub use scene::{Scene, ViewScene, status_message};
