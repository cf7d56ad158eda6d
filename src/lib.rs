//! Cube Drive - steer a car through a field of cubes to reach the goal
//!
//! Core modules:
//! - `sim`: Deterministic game logic (obstacle field, collisions, game state)
//! - `renderer`: Render-ready data (cameras, viewports, GPU instances)
//! - `platform`: Input mapping and clocks for the host window loop
//! - `settings`: Data-driven game configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::{Vec2, Vec3};

/// Game configuration constants
pub mod consts {
    /// Obstacle grid dimensions
    pub const ROWS: usize = 8;
    pub const COLUMNS: usize = 6;
    /// Percentage chance (0-100) that a grid slot holds a cube
    pub const FILL_PROBABILITY: u32 = 100;

    /// Lattice spacing between neighbouring cubes (both axes)
    pub const CELL_SPACING: f32 = 30.0;
    /// z of the first obstacle row (rows march toward -z)
    pub const FIRST_ROW_Z: f32 = -40.0;
    /// Cube half-extent, used as its collision radius
    pub const OBSTACLE_RADIUS: f32 = 3.0;

    /// Car bounding sphere radius
    pub const CAR_BOUND_RADIUS: f32 = 7.072;
    /// Distance of the bounding sphere center ahead of the pivot
    pub const CAR_BOUND_OFFSET: f32 = 5.0;

    /// Degrees per turn command
    pub const TURN_STEP_DEG: f32 = 5.0;
    /// Units per forward/backward command
    pub const MOVE_STEP: f32 = 1.0;

    /// Goal target area (x, z), checked against the car pivot
    pub const GOAL_X: f32 = 3.0;
    pub const GOAL_Z: f32 = -95.0;
    pub const GOAL_RADIUS: f32 = 10.0;
    /// Where the goal board is drawn (sits just behind the target area)
    pub const GOAL_MARKER_Z: f32 = -100.0;

    /// Delay before a finished round resets (ms)
    pub const RESET_DELAY_MS: u64 = 3000;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit vector on the ground plane (x, z) the car faces at `heading_deg`.
///
/// Heading 0 looks down -z; positive headings turn toward -x.
#[inline]
pub fn heading_to_forward(heading_deg: f32) -> Vec2 {
    let rad = heading_deg.to_radians();
    Vec2::new(-rad.sin(), -rad.cos())
}

/// Lift a ground-plane point (x, z) into world space at height `y`
#[inline]
pub fn ground_to_world(p: Vec2, y: f32) -> Vec3 {
    Vec3::new(p.x, y, p.y)
}
