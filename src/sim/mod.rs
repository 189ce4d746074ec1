//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `tick` entry per frame, dt capped in-core
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod level;
pub mod state;
pub mod terrain;
pub mod tick;

pub use camera::Camera;
pub use collision::{overlap, push_out_x};
pub use level::{generate_level, target_distance};
pub use state::{
    GameEvent, GamePhase, GameState, Item, ItemKind, Obstacle, Options, Orca, Player,
};
pub use terrain::{Terrain, Wave};
pub use tick::{TickInput, player_step, tick};
