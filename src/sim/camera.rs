//! Smoothed follow camera
//!
//! Derived state only: physics never reads the camera. Screen position of any
//! entity is its world position minus the camera position.

use glam::Vec2;

use crate::consts::{CAMERA_ANCHOR_X, CAMERA_ANCHOR_Y, CAMERA_RATE};
use crate::lerp;

#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    /// World-space position of the viewport's top-left corner
    pub pos: Vec2,
}

impl Camera {
    /// Ease toward the player, keeping them at a fixed viewport anchor
    pub fn follow(&mut self, target: Vec2, viewport: Vec2, dt: f32) {
        let t = CAMERA_RATE * dt;
        self.pos.x = lerp(self.pos.x, target.x - viewport.x * CAMERA_ANCHOR_X, t);
        self.pos.y = lerp(self.pos.y, target.y - viewport.y * CAMERA_ANCHOR_Y, t);
    }

    /// World -> camera-relative coordinates
    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world - self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_converges_on_anchor() {
        let mut camera = Camera::default();
        let viewport = Vec2::new(1000.0, 500.0);
        let target = Vec2::new(2000.0, 400.0);

        for _ in 0..600 {
            camera.follow(target, viewport, 1.0 / 60.0);
        }

        assert!((camera.pos.x - (2000.0 - 350.0)).abs() < 1.0);
        assert!((camera.pos.y - (400.0 - 310.0)).abs() < 1.0);
    }

    #[test]
    fn test_to_screen_is_offset() {
        let camera = Camera {
            pos: Vec2::new(100.0, 50.0),
        };
        assert_eq!(
            camera.to_screen(Vec2::new(130.0, 80.0)),
            Vec2::new(30.0, 30.0)
        );
    }
}
