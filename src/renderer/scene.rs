//! Per-frame scene description handed to the graphics backend

use super::camera::{Camera, Spotlight, Viewport, chase_headlights, overhead_headlights};
use super::instances::{CarInstance, CubeInstance, GoalInstance};
use crate::sim::{GamePhase, GameState, GroundStyle};

/// Text shown over the overhead view once a round ends
pub fn status_message(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::Playing => None,
        GamePhase::Collided => Some("You Lose!"),
        GamePhase::Won => Some("You Win!"),
    }
}

/// One side of the split window
#[derive(Debug, Clone)]
pub struct ViewScene {
    pub viewport: Viewport,
    pub camera: Camera,
    pub headlights: [Spotlight; 2],
    /// The chase camera sits inside the car, so it skips drawing it
    pub draw_car: bool,
    pub message: Option<&'static str>,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct Scene {
    pub overhead: ViewScene,
    pub chase: ViewScene,
    pub cubes: Vec<CubeInstance>,
    pub car: CarInstance,
    pub goal: GoalInstance,
    pub ground: GroundStyle,
}

impl Scene {
    pub fn build(state: &GameState, window: (u32, u32)) -> Self {
        let (left, right) = Viewport::split(window);
        let car = &state.car;

        Self {
            overhead: ViewScene {
                viewport: left,
                camera: Camera::overhead(),
                headlights: overhead_headlights(car),
                draw_car: true,
                message: status_message(state.phase),
            },
            chase: ViewScene {
                viewport: right,
                camera: Camera::chase(car),
                headlights: chase_headlights(car),
                draw_car: false,
                message: None,
            },
            cubes: state
                .field
                .iter_present()
                .map(CubeInstance::from_obstacle)
                .collect(),
            car: CarInstance::from_pose(car),
            goal: GoalInstance::new(),
            ground: state.ground,
        }
    }

    /// Raw bytes for the cube instance buffer
    pub fn cube_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cubes)
    }
}
