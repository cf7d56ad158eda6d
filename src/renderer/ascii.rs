//! Top-down text map for terminals
//!
//! Used by the headless driver in place of the overhead viewport. One
//! character covers `CELL` world units; -z is up the screen.

use glam::Vec2;

use crate::consts::*;
use crate::sim::GameState;

/// World units per character
const CELL: f32 = 5.0;
/// Visible x range
const X_MIN: f32 = -90.0;
const X_MAX: f32 = 90.0;
/// Visible z range (top of the map is the far end)
const Z_NEAR: f32 = 10.0;
const Z_FAR: f32 = -260.0;

/// Arrow for the car, picked by the nearest quarter turn
fn car_glyph(heading: f32) -> char {
    match ((heading + 45.0) / 90.0) as u32 % 4 {
        0 => '^',
        1 => '<',
        2 => 'v',
        _ => '>',
    }
}

fn to_cell(p: Vec2, width: usize, height: usize) -> Option<(usize, usize)> {
    let col = ((p.x - X_MIN) / CELL).floor();
    let row = ((Z_NEAR - p.y) / CELL).floor();
    if col < 0.0 || row < 0.0 {
        return None;
    }
    let (col, row) = (col as usize, row as usize);
    (col < width && row < height).then_some((row, col))
}

/// Draw the field, goal and car as lines of text
pub fn render_map(state: &GameState) -> String {
    let width = ((X_MAX - X_MIN) / CELL) as usize;
    let height = ((Z_NEAR - Z_FAR) / CELL) as usize;
    let mut grid = vec![vec!['.'; width]; height];

    if let Some((r, c)) = to_cell(Vec2::new(GOAL_X, GOAL_Z), width, height) {
        grid[r][c] = 'G';
    }
    for cube in state.field.iter_present() {
        if let Some((r, c)) = to_cell(Vec2::new(cube.pos.x, cube.pos.z), width, height) {
            grid[r][c] = '#';
        }
    }
    if let Some((r, c)) = to_cell(state.car.pos, width, height) {
        grid[r][c] = car_glyph(state.car.heading);
    }

    let mut out = String::with_capacity((width + 1) * height);
    for line in grid {
        out.extend(line);
        out.push('\n');
    }
    out
}
