//! Ambient snow field
//!
//! Visual-only: nothing here feeds back into the simulation. Flake count
//! scales with the viewport area up to a cap, and the field re-seeds itself
//! on resize so density stays right.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Hard cap on flake count regardless of viewport size
pub const MAX_FLAKES: usize = 140;
/// Viewport area (pixels²) per flake
const AREA_PER_FLAKE: f32 = 24_000.0;

/// One falling snowflake, in screen space
#[derive(Debug, Clone, Copy)]
pub struct Flake {
    pub pos: Vec2,
    pub size: f32,
    /// Fall speed (pixels/s)
    fall: f32,
}

/// The drifting snow layer drawn over the scene
#[derive(Debug, Clone)]
pub struct SnowField {
    pub flakes: Vec<Flake>,
    rng: Pcg32,
}

impl SnowField {
    pub fn new(viewport: Vec2, seed: u64) -> Self {
        let mut field = Self {
            flakes: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        field.reset(viewport);
        field
    }

    /// Rebuild the flake set for the given viewport (call on resize or when
    /// the particles setting toggles back on)
    pub fn reset(&mut self, viewport: Vec2) {
        let count = ((viewport.x * viewport.y / AREA_PER_FLAKE) as usize).min(MAX_FLAKES);
        self.flakes.clear();
        for _ in 0..count {
            let flake = Flake {
                pos: Vec2::new(
                    self.rng.random_range(0.0..viewport.x),
                    self.rng.random_range(0.0..viewport.y),
                ),
                size: self.rng.random_range(1.0..3.0),
                fall: self.rng.random_range(20.0..60.0),
            };
            self.flakes.push(flake);
        }
    }

    /// Advance the drift; flakes wrap back to the top once below the viewport
    pub fn update(&mut self, dt: f32, viewport: Vec2) {
        for flake in &mut self.flakes {
            flake.pos.y += flake.fall * dt;
            flake.pos.x += (flake.pos.y * 0.02).sin() * 0.3;
            if flake.pos.y > viewport.y {
                flake.pos.y = -4.0;
                flake.pos.x = self.rng.random_range(0.0..viewport.x);
            }
        }
    }
}
