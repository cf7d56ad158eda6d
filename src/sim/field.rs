//! Obstacle field: a fixed rows x columns grid of optional cubes
//!
//! Cubes are collision-tested as spheres whose radius is the cube's
//! half-extent. Absent slots are `None`.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A single cube obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Center in world space
    pub pos: Vec3,
    /// Collision radius (half the drawn cube edge)
    pub radius: f32,
    /// RGB color
    pub color: [u8; 3],
}

impl Obstacle {
    pub fn new(pos: Vec3, radius: f32, color: [u8; 3]) -> Self {
        Self { pos, radius, color }
    }
}

/// Grid of optional obstacles, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    rows: usize,
    columns: usize,
    cells: Vec<Option<Obstacle>>,
}

impl ObstacleField {
    /// A grid with every slot empty
    pub fn empty(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
        }
    }

    /// Roll a fresh field. Each slot is filled independently with
    /// `fill_probability` percent chance and gets a random color.
    pub fn generate<R: Rng>(
        rows: usize,
        columns: usize,
        fill_probability: u32,
        rng: &mut R,
    ) -> Self {
        debug_assert!(fill_probability <= 100, "fill probability is a percentage");

        let mut field = Self::empty(rows, columns);
        for row in 0..rows {
            for col in 0..columns {
                if rng.random_range(0..100) < fill_probability {
                    let color = [rng.random(), rng.random(), rng.random()];
                    let pos = cell_center(row, col, columns);
                    field.cells[row * columns + col] =
                        Some(Obstacle::new(pos, OBSTACLE_RADIUS, color));
                }
            }
        }

        log::debug!(
            "Generated {}x{} obstacle field with {} cubes",
            rows,
            columns,
            field.present_count()
        );
        field
    }

    /// Place an obstacle in a slot, replacing whatever was there
    pub fn insert(&mut self, row: usize, col: usize, obstacle: Obstacle) {
        assert!(row < self.rows && col < self.columns, "slot out of range");
        self.cells[row * self.columns + col] = Some(obstacle);
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Obstacle> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.cells[row * self.columns + col].as_ref()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All present obstacles in row-major order
    pub fn iter_present(&self) -> impl Iterator<Item = &Obstacle> {
        self.cells.iter().flatten()
    }

    pub fn present_count(&self) -> usize {
        self.iter_present().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

/// World-space center of grid slot (row, col).
///
/// Odd column counts put the middle column on x = 0; even counts shift the
/// lattice by half a cell so the two middle columns straddle x = 0.
pub fn cell_center(row: usize, col: usize, columns: usize) -> Vec3 {
    let offset = col as f32 - (columns / 2) as f32;
    let x = if columns % 2 == 1 {
        CELL_SPACING * offset
    } else {
        CELL_SPACING / 2.0 + CELL_SPACING * offset
    };
    let z = FIRST_ROW_Z - CELL_SPACING * row as f32;
    Vec3::new(x, 0.0, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_full_fill_populates_every_slot() {
        let mut rng = Pcg32::seed_from_u64(7);
        let field = ObstacleField::generate(ROWS, COLUMNS, 100, &mut rng);
        assert_eq!(field.present_count(), ROWS * COLUMNS);
        for obstacle in field.iter_present() {
            assert_eq!(obstacle.radius, OBSTACLE_RADIUS);
            assert_eq!(obstacle.pos.y, 0.0);
        }
    }

    #[test]
    fn test_zero_fill_is_empty() {
        let mut rng = Pcg32::seed_from_u64(7);
        let field = ObstacleField::generate(ROWS, COLUMNS, 0, &mut rng);
        assert!(field.is_empty());
        assert_eq!(field.rows(), ROWS);
        assert_eq!(field.columns(), COLUMNS);
    }

    #[test]
    fn test_partial_fill_is_seed_deterministic() {
        let a = ObstacleField::generate(ROWS, COLUMNS, 40, &mut Pcg32::seed_from_u64(99));
        let b = ObstacleField::generate(ROWS, COLUMNS, 40, &mut Pcg32::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_lattice_even_columns() {
        // 6 columns: x runs -75, -45, ..., 75
        assert_eq!(cell_center(0, 0, 6), Vec3::new(-75.0, 0.0, -40.0));
        assert_eq!(cell_center(0, 3, 6), Vec3::new(15.0, 0.0, -40.0));
        assert_eq!(cell_center(7, 5, 6), Vec3::new(75.0, 0.0, -250.0));
    }

    #[test]
    fn test_lattice_odd_columns() {
        // 5 columns: middle column centered on x = 0
        assert_eq!(cell_center(0, 2, 5), Vec3::new(0.0, 0.0, -40.0));
        assert_eq!(cell_center(1, 0, 5), Vec3::new(-60.0, 0.0, -70.0));
        assert_eq!(cell_center(1, 4, 5), Vec3::new(60.0, 0.0, -70.0));
    }

    #[test]
    fn test_get_and_insert() {
        let mut field = ObstacleField::empty(2, 2);
        assert!(field.get(1, 1).is_none());
        assert!(field.get(5, 0).is_none());

        let cube = Obstacle::new(Vec3::new(1.0, 0.0, 2.0), 3.0, [255, 0, 0]);
        field.insert(1, 1, cube);
        assert_eq!(field.get(1, 1), Some(&cube));
        assert_eq!(field.present_count(), 1);
        assert!(!field.is_empty());
    }
}
