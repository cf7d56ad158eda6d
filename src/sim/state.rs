//! Game state and core simulation types
//!
//! Everything the renderer needs to draw a frame lives in `GameState`.

use std::time::Duration;

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field::ObstacleField;
use super::schedule::ResetTimer;
use crate::consts::*;
use crate::{heading_to_forward, normalize_degrees};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Car accepts commands
    #[default]
    Playing,
    /// Car hit a cube; waiting for reset
    Collided,
    /// Car reached the goal; waiting for reset
    Won,
}

impl GamePhase {
    /// True once the round has ended either way
    pub fn is_over(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Which ground texture the renderer binds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroundStyle {
    #[default]
    Primary,
    Alternate,
}

impl GroundStyle {
    pub fn toggled(self) -> Self {
        match self {
            GroundStyle::Primary => GroundStyle::Alternate,
            GroundStyle::Alternate => GroundStyle::Primary,
        }
    }
}

/// Discrete driving command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    TurnLeft,
    TurnRight,
    Forward,
    Backward,
}

/// Car position on the ground plane plus heading
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CarPose {
    /// Pivot (x, z); the car always sits at y = 0
    pub pos: Vec2,
    /// Degrees from -z, in [0, 360)
    pub heading: f32,
}

impl CarPose {
    pub fn forward(&self) -> Vec2 {
        heading_to_forward(self.heading)
    }

    /// Pose after applying `command` to this one
    pub fn advanced(&self, command: Command, rules: &RoundConfig) -> CarPose {
        match command {
            Command::TurnLeft => CarPose {
                pos: self.pos,
                heading: normalize_degrees(self.heading + rules.turn_step_deg),
            },
            Command::TurnRight => CarPose {
                pos: self.pos,
                heading: normalize_degrees(self.heading - rules.turn_step_deg),
            },
            Command::Forward => CarPose {
                pos: self.pos + self.forward() * rules.move_step,
                heading: self.heading,
            },
            Command::Backward => CarPose {
                pos: self.pos - self.forward() * rules.move_step,
                heading: self.heading,
            },
        }
    }
}

/// Events emitted by the simulation (for logging, HUD and audio cues)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Moved { pos: Vec2 },
    Turned { heading: f32 },
    Collided { pos: Vec2, heading: f32 },
    Won { pos: Vec2 },
    Reset,
    GroundToggled(GroundStyle),
}

/// Round parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub rows: usize,
    pub columns: usize,
    /// Percent chance (0-100) that a slot holds a cube
    pub fill_probability: u32,
    pub turn_step_deg: f32,
    pub move_step: f32,
    /// Delay between a finished round and its reset
    pub reset_delay: Duration,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            columns: COLUMNS,
            fill_probability: FILL_PROBABILITY,
            turn_step_deg: TURN_STEP_DEG,
            move_step: MOVE_STEP,
            reset_delay: Duration::from_millis(RESET_DELAY_MS),
        }
    }
}

/// Running totals for this process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub wins: u32,
    pub collisions: u32,
    pub resets: u32,
}

/// RNG state wrapper for serialization.
///
/// Each round draws its layout from its own PCG stream, so layouts are
/// reproducible from the seed alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }

    /// Move on to the next round's stream
    pub fn advance(&mut self) {
        self.stream = self.stream.wrapping_add(1);
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed and current round's stream
    pub rng_state: RngState,
    pub config: RoundConfig,
    pub field: ObstacleField,
    pub car: CarPose,
    pub phase: GamePhase,
    pub ground: GroundStyle,
    pub reset_timer: ResetTimer,
    pub stats: SessionStats,
}

impl GameState {
    /// Create a new game with default rules
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, RoundConfig::default())
    }

    pub fn with_config(seed: u64, config: RoundConfig) -> Self {
        let rng_state = RngState::new(seed);
        let field = generate_field(&config, &rng_state);
        Self {
            rng_state,
            config,
            field,
            car: CarPose::default(),
            phase: GamePhase::Playing,
            ground: GroundStyle::default(),
            reset_timer: ResetTimer::new(),
            stats: SessionStats::default(),
        }
    }

    /// Start a new round: car back at the origin, fresh obstacle layout
    pub fn reset(&mut self) {
        self.rng_state.advance();
        self.field = generate_field(&self.config, &self.rng_state);
        self.car = CarPose::default();
        self.phase = GamePhase::Playing;
        self.reset_timer.cancel();
        self.stats.resets += 1;
        log::info!(
            "Round reset (#{}) with {} cubes",
            self.stats.resets,
            self.field.present_count()
        );
    }
}

fn generate_field(config: &RoundConfig, rng_state: &RngState) -> ObstacleField {
    let mut rng = rng_state.to_rng();
    ObstacleField::generate(
        config.rows,
        config.columns,
        config.fill_probability,
        &mut rng,
    )
}
