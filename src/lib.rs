//! Floe Runner - a side-scrolling arctic arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, physics, collisions, game state)
//! - `render`: Per-frame scene construction for the host raster layer
//! - `settings`: Player preferences
//! - `highscores`: Best-run leaderboard

pub mod highscores;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::{Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Upper bound on a single frame's integration step (seconds).
    /// Slow frames under-simulate rather than explode.
    pub const MAX_FRAME_DT: f32 = 0.033;

    /// Gravity (pixels/s²)
    pub const GRAVITY: f32 = 980.0;

    /// Terrain defaults
    pub const GROUND_BASE: f32 = 420.0;

    /// Player movement
    pub const PLAYER_ACCEL: f32 = 120.0;
    pub const PLAYER_MAX_SPEED: f32 = 280.0;
    pub const GROUND_FRICTION: f32 = 0.96;
    pub const AIR_DRAG: f32 = 0.995;
    pub const JUMP_VELOCITY: f32 = -360.0;

    /// Slide modifiers (active while grounded with down held)
    pub const SLIDE_ACCEL_MULT: f32 = 1.2;
    pub const SLIDE_MAX_SPEED: f32 = 420.0;
    pub const SLIDE_FRICTION: f32 = 0.995;

    /// Boost (stamina burst)
    pub const BOOST_ACCEL: f32 = 900.0;
    pub const BOOST_MIN_STAMINA: f32 = 0.12;
    pub const STAMINA_DRAIN_RATE: f32 = 0.6;
    pub const STAMINA_REGEN_RATE: f32 = 0.25;

    /// Player body
    pub const PLAYER_WIDTH: f32 = 48.0;
    pub const PLAYER_HEIGHT: f32 = 42.0;
    pub const PLAYER_START_X: f32 = 100.0;
    /// Height above the terrain the player spawns at
    pub const PLAYER_SPAWN_CLEARANCE: f32 = 60.0;
    pub const START_LIVES: u32 = 3;

    /// Orca body and pursuit tuning
    pub const ORCA_WIDTH: f32 = 120.0;
    pub const ORCA_HEIGHT: f32 = 60.0;
    /// Distance behind the player the orca surfaces at
    pub const ORCA_SPAWN_GAP: f32 = 400.0;
    /// Hover clearance above the terrain
    pub const ORCA_HOVER: f32 = 10.0;
    pub const ORCA_START_SPEED: f32 = 120.0;
    /// Horizontal standoff the orca steers toward (behind the player)
    pub const ORCA_STANDOFF: f32 = 180.0;
    pub const ORCA_MIN_SPEED: f32 = 80.0;
    pub const ORCA_MAX_SPEED: f32 = 360.0;
    /// Pursuit gain applied to the standoff error
    pub const ORCA_PURSUIT_GAIN: f32 = 1.2;
    /// Vertical terrain-follow smoothing rate (per second)
    pub const ORCA_EASE_RATE: f32 = 4.0;
    /// How far the orca is knocked back when it catches the player
    pub const ORCA_KNOCKBACK: f32 = 160.0;

    /// Item body
    pub const ITEM_WIDTH: f32 = 28.0;
    pub const ITEM_HEIGHT: f32 = 18.0;
    /// XP granted per fish
    pub const FISH_XP: u64 = 10;

    /// Camera smoothing rate (per second) and screen anchor fractions
    pub const CAMERA_RATE: f32 = 6.0;
    pub const CAMERA_ANCHOR_X: f32 = 0.35;
    pub const CAMERA_ANCHOR_Y: f32 = 0.62;

    /// Level layout
    pub const LEVEL_START_X: f32 = 240.0;
    /// Runway past the target distance the generator keeps filling
    pub const LEVEL_TAIL: f32 = 400.0;
    /// Overshoot past the target that triggers level completion
    pub const LEVEL_COMPLETE_MARGIN: f32 = 80.0;
    pub const BASE_TARGET_DISTANCE: f32 = 600.0;
    pub const TARGET_GROWTH_PER_LEVEL: f32 = 0.3;

    /// Fall-out bound below the viewport and the respawn setback
    pub const FALL_OUT_MARGIN: f32 = 200.0;
    pub const RESPAWN_SETBACK: f32 = 80.0;
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
