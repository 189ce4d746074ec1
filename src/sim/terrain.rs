//! Analytic terrain model
//!
//! The ground is a pure function of x: a baseline plus a sum of sine waves.
//! Generation, physics and rendering all sample the same function, so the
//! three never disagree about where the ice is.

use serde::{Deserialize, Serialize};

use crate::consts::GROUND_BASE;

/// One sine component of the ground profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    /// Peak offset from the baseline (pixels)
    pub amplitude: f32,
    /// Horizontal period (pixels)
    pub wavelength: f32,
}

/// Ground height field for the current level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terrain {
    pub ground_base: f32,
    pub waves: Vec<Wave>,
}

impl Default for Terrain {
    /// Long low swell plus a short higher-frequency ripple
    fn default() -> Self {
        Self {
            ground_base: GROUND_BASE,
            waves: vec![
                Wave {
                    amplitude: 16.0,
                    wavelength: 2800.0,
                },
                Wave {
                    amplitude: 10.0,
                    wavelength: 900.0,
                },
            ],
        }
    }
}

impl Terrain {
    /// Ground height (world y) at horizontal position x
    #[inline]
    pub fn height_at(&self, x: f32) -> f32 {
        let mut y = self.ground_base;
        for wave in &self.waves {
            y += (x / wave.wavelength * std::f32::consts::TAU).sin() * wave.amplitude;
        }
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_is_pure() {
        let terrain = Terrain::default();
        for x in [-500.0, 0.0, 123.456, 9999.0] {
            assert_eq!(terrain.height_at(x), terrain.height_at(x));
        }
    }

    #[test]
    fn test_height_stays_near_baseline() {
        let terrain = Terrain::default();
        let max_amp: f32 = terrain.waves.iter().map(|w| w.amplitude).sum();

        let mut x = 0.0;
        while x < 10_000.0 {
            let y = terrain.height_at(x);
            assert!((y - terrain.ground_base).abs() <= max_amp + 0.001);
            x += 37.0;
        }
    }

    #[test]
    fn test_height_is_continuous() {
        // No jumps bigger than the worst-case slope over a tiny step
        let terrain = Terrain::default();
        let step = 0.5;
        let mut prev = terrain.height_at(0.0);
        let mut x = step;
        while x < 5_000.0 {
            let y = terrain.height_at(x);
            assert!((y - prev).abs() < 1.0, "jump at x={}", x);
            prev = y;
            x += step;
        }
    }

    #[test]
    fn test_flat_without_waves() {
        let terrain = Terrain {
            ground_base: 300.0,
            waves: Vec::new(),
        };
        assert_eq!(terrain.height_at(-40.0), 300.0);
        assert_eq!(terrain.height_at(1234.0), 300.0);
    }
}
