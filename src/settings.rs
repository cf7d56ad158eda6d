//! Game settings
//!
//! Loaded from a JSON file by the native driver; every field is optional and
//! falls back to the built-in default.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::RoundConfig;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Obstacle field ===
    /// Grid rows (rows march away from the car along -z)
    pub rows: usize,
    /// Grid columns
    pub columns: usize,
    /// Percent chance (0-100) that a slot holds a cube
    pub fill_probability: u32,
    /// Fixed run seed; `None` picks one from the clock
    pub seed: Option<u64>,

    // === Driving ===
    /// Degrees per turn command
    pub turn_step_deg: f32,
    /// Units per forward/backward command
    pub move_step: f32,

    // === Round flow ===
    /// Delay after a win or crash before the round resets
    pub reset_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: ROWS,
            columns: COLUMNS,
            fill_probability: FILL_PROBABILITY,
            seed: None,

            turn_step_deg: TURN_STEP_DEG,
            move_step: MOVE_STEP,

            reset_delay_ms: RESET_DELAY_MS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, then clamp anything out of range
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Clamp out-of-range values, logging each correction
    pub fn sanitize(&mut self) {
        if self.fill_probability > 100 {
            log::warn!(
                "fill_probability {} out of range, clamping to 100",
                self.fill_probability
            );
            self.fill_probability = 100;
        }
        if self.rows == 0 || self.columns == 0 {
            log::warn!(
                "Empty {}x{} grid requested, using {}x{}",
                self.rows,
                self.columns,
                ROWS,
                COLUMNS
            );
            self.rows = ROWS;
            self.columns = COLUMNS;
        }
    }

    /// Round rules derived from these settings
    pub fn round_config(&self) -> RoundConfig {
        RoundConfig {
            rows: self.rows,
            columns: self.columns,
            fill_probability: self.fill_probability,
            turn_step_deg: self.turn_step_deg,
            move_step: self.move_step,
            reset_delay: Duration::from_millis(self.reset_delay_ms),
        }
    }
}
