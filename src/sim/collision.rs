//! Collision detection between the car and the world
//!
//! Everything reduces to sphere-sphere overlap. The car is approximated by a
//! single bounding sphere pushed forward of its pivot so it covers the nose;
//! the goal is a sphere tested against the bare pivot point.

use glam::{Vec2, Vec3};

use super::field::ObstacleField;
use crate::consts::*;
use crate::{ground_to_world, heading_to_forward};

/// The fixed goal target area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    pub center: Vec3,
    pub radius: f32,
}

impl Goal {
    pub const fn new() -> Self {
        Self {
            center: Vec3::new(GOAL_X, 0.0, GOAL_Z),
            radius: GOAL_RADIUS,
        }
    }
}

impl Default for Goal {
    fn default() -> Self {
        Self::new()
    }
}

/// The one goal in the world
pub const GOAL: Goal = Goal::new();

/// Check whether two spheres overlap. Touching counts.
#[inline]
pub fn spheres_overlap(c1: Vec3, r1: f32, c2: Vec3, r2: f32) -> bool {
    let reach = r1 + r2;
    (c1 - c2).length_squared() <= reach * reach
}

/// Bounding sphere (center, radius) of a car with its pivot at ground point
/// `pivot` (x, z) facing `heading_deg`
pub fn car_bounding_sphere(pivot: Vec2, heading_deg: f32) -> (Vec3, f32) {
    let center = pivot + heading_to_forward(heading_deg) * CAR_BOUND_OFFSET;
    (ground_to_world(center, 0.0), CAR_BOUND_RADIUS)
}

/// Check whether a car at `pivot` facing `heading_deg` hits any cube
pub fn car_collides(pivot: Vec2, heading_deg: f32, field: &ObstacleField) -> bool {
    let (center, radius) = car_bounding_sphere(pivot, heading_deg);
    field
        .iter_present()
        .any(|cube| spheres_overlap(center, radius, cube.pos, cube.radius))
}

/// Check whether the car pivot lies inside the goal area
pub fn reached_goal(pivot: Vec2) -> bool {
    spheres_overlap(ground_to_world(pivot, 0.0), 0.0, GOAL.center, GOAL.radius)
}
