//! Camera rigs and headlights for the two viewports
//!
//! Left half: a fixed camera looking over the start line.
//! Right half: a chase camera riding just ahead of the car's nose.

use glam::{Mat4, Vec3};

use crate::ground_to_world;
use crate::sim::CarPose;

/// Near/far planes and half-extent of the view frustum at the near plane
pub const NEAR_PLANE: f32 = 5.0;
pub const FAR_PLANE: f32 = 250.0;
pub const FRUSTUM_HALF_EXTENT: f32 = 5.0;

/// Overhead camera placement
pub const OVERHEAD_EYE: Vec3 = Vec3::new(0.0, 10.0, 20.0);
pub const OVERHEAD_TARGET: Vec3 = Vec3::ZERO;

/// Chase camera distance ahead of the pivot, and its look-at distance
pub const CHASE_EYE_AHEAD: f32 = 10.0;
pub const CHASE_TARGET_AHEAD: f32 = 11.0;

/// Headlight spot parameters
pub const HEADLIGHT_SIDE_OFFSET: f32 = 20.0;
pub const HEADLIGHT_CUTOFF_DEG: f32 = 20.0;
pub const HEADLIGHT_EXPONENT: f32 = 10.0;

/// Pixel rectangle inside the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Split the window into left and right halves
    pub fn split(window: (u32, u32)) -> (Viewport, Viewport) {
        let (w, h) = window;
        let half = w / 2;
        (
            Viewport {
                x: 0,
                y: 0,
                width: half,
                height: h,
            },
            Viewport {
                x: half,
                y: 0,
                width: w - half,
                height: h,
            },
        )
    }
}

/// A look-at camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera {
    /// Fixed camera above and behind the start
    pub fn overhead() -> Self {
        Self {
            eye: OVERHEAD_EYE,
            target: OVERHEAD_TARGET,
            up: Vec3::Y,
        }
    }

    /// Camera placed ahead of the car, looking where it drives
    pub fn chase(car: &CarPose) -> Self {
        let forward = car.forward();
        Self {
            eye: ground_to_world(car.pos + forward * CHASE_EYE_AHEAD, 0.0),
            target: ground_to_world(car.pos + forward * CHASE_TARGET_AHEAD, 0.0),
            up: Vec3::Y,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Symmetric frustum with a square near plane (90 degree vertical FOV)
    pub fn projection() -> Mat4 {
        let fov_y = 2.0 * (FRUSTUM_HALF_EXTENT / NEAR_PLANE).atan();
        Mat4::perspective_rh_gl(fov_y, 1.0, NEAR_PLANE, FAR_PLANE)
    }

    pub fn view_proj(&self) -> Mat4 {
        Self::projection() * self.view()
    }
}

/// A spotlight in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spotlight {
    pub position: Vec3,
    pub direction: Vec3,
    pub cutoff_deg: f32,
    pub exponent: f32,
}

impl Spotlight {
    fn headlight(position: Vec3, car: &CarPose) -> Self {
        Self {
            position,
            direction: ground_to_world(car.forward(), 0.0),
            cutoff_deg: HEADLIGHT_CUTOFF_DEG,
            exponent: HEADLIGHT_EXPONENT,
        }
    }
}

/// Headlights as lit in the overhead view: flanking the car on the x axis
pub fn overhead_headlights(car: &CarPose) -> [Spotlight; 2] {
    let p = car.pos;
    [
        Spotlight::headlight(Vec3::new(p.x + HEADLIGHT_SIDE_OFFSET, 0.0, p.y), car),
        Spotlight::headlight(Vec3::new(p.x - HEADLIGHT_SIDE_OFFSET, 0.0, p.y), car),
    ]
}

/// Headlights as lit in the chase view: nudged to swing with the heading
pub fn chase_headlights(car: &CarPose) -> [Spotlight; 2] {
    let p = car.pos;
    let rad = car.heading.to_radians();
    let (sin, cos) = rad.sin_cos();
    [
        Spotlight::headlight(
            Vec3::new(p.x + HEADLIGHT_SIDE_OFFSET + cos, 0.0, p.y + sin),
            car,
        ),
        Spotlight::headlight(
            Vec3::new(p.x - HEADLIGHT_SIDE_OFFSET - cos, 0.0, p.y - sin),
            car,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_split_halves() {
        let (left, right) = Viewport::split((801, 400));
        assert_eq!(left.width, 400);
        assert_eq!(right.x, 400);
        assert_eq!(right.width, 401);
        assert_eq!(left.height, 400);
    }

    #[test]
    fn test_chase_camera_at_origin() {
        let cam = Camera::chase(&CarPose::default());
        assert!((cam.eye - Vec3::new(0.0, 0.0, -10.0)).length() < 1e-5);
        assert!((cam.target - Vec3::new(0.0, 0.0, -11.0)).length() < 1e-5);
    }

    #[test]
    fn test_chase_camera_follows_heading() {
        let car = CarPose {
            pos: Vec2::new(5.0, -20.0),
            heading: 90.0,
        };
        let cam = Camera::chase(&car);
        assert!((cam.eye - Vec3::new(-5.0, 0.0, -20.0)).length() < 1e-4);
    }

    #[test]
    fn test_overhead_view_centers_target() {
        let cam = Camera::overhead();
        let clip = cam.view_proj() * OVERHEAD_TARGET.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_headlights_point_forward() {
        let car = CarPose::default();
        let lights = overhead_headlights(&car);
        assert_eq!(lights[0].position, Vec3::new(20.0, 0.0, 0.0));
        assert_eq!(lights[1].position, Vec3::new(-20.0, 0.0, 0.0));
        assert!((lights[0].direction - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);

        let lights = chase_headlights(&car);
        assert_eq!(lights[0].position, Vec3::new(21.0, 0.0, 0.0));
        assert_eq!(lights[1].position, Vec3::new(-21.0, 0.0, 0.0));
    }
}
