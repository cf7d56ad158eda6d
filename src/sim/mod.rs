//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete input events only
//! - Seeded RNG only
//! - Time arrives as monotonic readings from the caller
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod schedule;
pub mod state;
pub mod tick;

pub use collision::{GOAL, Goal, car_bounding_sphere, car_collides, reached_goal, spheres_overlap};
pub use field::{Obstacle, ObstacleField, cell_center};
pub use schedule::ResetTimer;
pub use state::{
    CarPose, Command, GameEvent, GamePhase, GameState, GroundStyle, RngState, RoundConfig,
    SessionStats,
};
pub use tick::{TickInput, TickResult, apply_command, tick};
