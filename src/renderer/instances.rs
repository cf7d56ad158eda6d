//! GPU instance records for the scene's solid objects

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::consts::{GOAL_MARKER_Z, GOAL_X};
use crate::ground_to_world;
use crate::sim::{CarPose, Obstacle};

/// Goal board scale (width, height, depth)
pub const GOAL_BOARD_SCALE: Vec3 = Vec3::new(15.0, 15.0, 5.0);

/// One cube obstacle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CubeInstance {
    pub center: [f32; 3],
    pub half_extent: f32,
    pub color: [f32; 4],
}

impl CubeInstance {
    pub fn from_obstacle(obstacle: &Obstacle) -> Self {
        Self {
            center: obstacle.pos.to_array(),
            half_extent: obstacle.radius,
            color: rgb_to_linear(obstacle.color),
        }
    }
}

/// The player's car (body, cabin and wheels share one transform)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CarInstance {
    pub model: [[f32; 4]; 4],
    pub body_color: [f32; 4],
    pub cabin_color: [f32; 4],
    pub wheel_color: [f32; 4],
}

impl CarInstance {
    pub fn from_pose(car: &CarPose) -> Self {
        let model = Mat4::from_translation(ground_to_world(car.pos, 0.0))
            * Mat4::from_rotation_y(car.heading.to_radians());
        Self {
            model: model.to_cols_array_2d(),
            body_color: colors::CAR_BODY,
            cabin_color: colors::CAR_CABIN,
            wheel_color: colors::CAR_WHEEL,
        }
    }
}

/// The goal board with its target rings
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GoalInstance {
    pub model: [[f32; 4]; 4],
    pub board_color: [f32; 4],
}

impl GoalInstance {
    pub fn new() -> Self {
        let model = Mat4::from_translation(Vec3::new(GOAL_X, 0.0, GOAL_MARKER_Z))
            * Mat4::from_scale(GOAL_BOARD_SCALE);
        Self {
            model: model.to_cols_array_2d(),
            board_color: colors::GOAL_BOARD,
        }
    }
}

impl Default for GoalInstance {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte color to normalized RGBA
#[inline]
pub fn rgb_to_linear(rgb: [u8; 3]) -> [f32; 4] {
    [
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
        1.0,
    ]
}

/// Colors for game elements
pub mod colors {
    pub const CAR_BODY: [f32; 4] = [0.8, 0.0, 0.0, 1.0];
    pub const CAR_CABIN: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const CAR_WHEEL: [f32; 4] = [0.7, 0.7, 0.7, 1.0];
    pub const GOAL_BOARD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GOAL_ORANGE: [f32; 4] = [1.0, 0.65, 0.0, 1.0];
    pub const GOAL_YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const MESSAGE_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const DIVIDER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 0.0];
}

/// Target rings on the goal face, outermost first (board-local radius, color)
pub const GOAL_RINGS: [(f32, [f32; 4]); 3] = [
    (0.4, colors::GOAL_ORANGE),
    (0.3, colors::GOAL_YELLOW),
    (0.2, colors::GOAL_ORANGE),
];
