//! Game state and core simulation types
//!
//! Everything the per-frame tick mutates lives here: the entities, the
//! session bookkeeping and the event queue the host drains for audio.

use glam::Vec2;

use super::camera::Camera;
use super::level;
use super::terrain::Terrain;
use crate::consts::*;
use crate::settings::{Difficulty, Settings};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title menu, no simulation running
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen mid-run; elapsed-time bookkeeping is compensated on resume
    Paused,
    /// Run ended
    GameOver,
}

/// Discrete notifications emitted during a tick, drained by the host
/// (audio collaborator). Fire-and-forget; nothing feeds back into the sim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player left the ground
    Jump,
    /// Player took a hit (obstacle, orca, or a fall)
    Hit,
    /// Fish collected
    Collect,
    /// Coin collected
    Coin,
    /// Target distance reached, next level generated
    LevelComplete,
}

/// Collectible variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Fish,
    Coin,
}

/// The player penguin
#[derive(Debug, Clone)]
pub struct Player {
    /// World-space center
    pub pos: Vec2,
    pub vel: Vec2,
    /// Full box extents (the collision box is centered on `pos`)
    pub size: Vec2,
    pub on_ground: bool,
    pub lives: u32,
    /// Boost resource, always within [0, 1]
    pub stamina: f32,
    pub face_right: bool,
    /// True only while grounded with down held
    pub sliding: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, 0.0),
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            on_ground: false,
            lives: START_LIVES,
            stamina: 1.0,
            face_right: true,
            sliding: false,
        }
    }

    /// Reposition for a level start or fall recovery. Lives are untouched;
    /// velocity, pose and stamina are restored.
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.on_ground = false;
        self.sliding = false;
        self.stamina = 1.0;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// The pursuing orca
#[derive(Debug, Clone)]
pub struct Orca {
    /// World-space center
    pub pos: Vec2,
    pub vx: f32,
    pub size: Vec2,
    pub active: bool,
}

impl Orca {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(-9999.0, 0.0),
            vx: 0.0,
            size: Vec2::new(ORCA_WIDTH, ORCA_HEIGHT),
            active: false,
        }
    }

    /// Surface behind the player, resting on the terrain
    pub fn spawn_behind(&mut self, player_x: f32, terrain: &Terrain) {
        self.active = true;
        self.pos.x = player_x - ORCA_SPAWN_GAP;
        self.pos.y = terrain.height_at(self.pos.x) - self.size.y / 2.0 - ORCA_HOVER;
        self.vx = ORCA_START_SPEED;
    }
}

impl Default for Orca {
    fn default() -> Self {
        Self::new()
    }
}

/// A collectible placed by the level generator
#[derive(Debug, Clone)]
pub struct Item {
    /// World-space top-left corner
    pub pos: Vec2,
    pub kind: ItemKind,
    pub size: Vec2,
    /// Monotonic: flips false -> true once, never back
    pub collected: bool,
}

impl Item {
    pub fn new(x: f32, y: f32, kind: ItemKind) -> Self {
        Self {
            pos: Vec2::new(x, y),
            kind,
            size: Vec2::new(ITEM_WIDTH, ITEM_HEIGHT),
            collected: false,
        }
    }
}

/// A static ice block in the player's path
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// World-space top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

/// Preference snapshot taken when a run starts; the sim never reads live
/// settings mid-level.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub difficulty: Difficulty,
    pub particles: bool,
}

/// Complete session state, threaded through `tick`
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed; level layouts derive from it
    pub seed: u64,
    pub phase: GamePhase,
    /// 1-based level number
    pub level: u32,
    pub xp: u64,
    pub coins: u32,
    /// Farthest distance reached this level (pixels past the start)
    pub max_distance: f32,
    /// Horizontal distance that completes the current level
    pub target_distance: f32,
    pub player: Player,
    pub orca: Orca,
    pub terrain: Terrain,
    pub obstacles: Vec<Obstacle>,
    pub items: Vec<Item>,
    pub camera: Camera,
    /// Current host viewport (width, height)
    pub viewport: Vec2,
    pub options: Options,
    /// Wall-clock seconds when the run (or the current resume span) started
    pub start_time: f64,
    /// Wall-clock seconds when the current pause began
    pub pause_time: f64,
    /// Events queued this tick, drained by the host each frame
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Menu,
            level: 1,
            xp: 0,
            coins: 0,
            max_distance: 0.0,
            target_distance: BASE_TARGET_DISTANCE,
            player: Player::new(),
            orca: Orca::new(),
            terrain: Terrain::default(),
            obstacles: Vec::new(),
            items: Vec::new(),
            camera: Camera::default(),
            viewport: Vec2::new(1280.0, 720.0),
            options: Options::default(),
            start_time: 0.0,
            pause_time: 0.0,
            events: Vec::new(),
        }
    }

    /// Host viewport changed; camera offsets and the fall bound follow.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Menu -> Playing. Resets run stats, snapshots preferences and builds
    /// level 1. `now` is host wall-clock seconds.
    pub fn start(&mut self, settings: &Settings, now: f64) {
        self.xp = 0;
        self.coins = 0;
        self.player.lives = START_LIVES;
        self.options = Options {
            difficulty: settings.difficulty,
            particles: settings.particles,
        };
        self.setup_level(1);
        self.phase = GamePhase::Playing;
        self.start_time = now;
        log::info!(
            "run started: seed={} difficulty={}",
            self.seed,
            self.options.difficulty.as_str()
        );
    }

    /// Rebuild the world for level `n`. Obstacles and items are regenerated
    /// wholesale; nothing carries over from the previous level.
    pub fn setup_level(&mut self, n: u32) {
        self.level = n;
        self.target_distance = level::target_distance(n, self.options.difficulty);
        self.terrain = Terrain::default();
        level::generate_level(self);

        let start = Vec2::new(
            PLAYER_START_X,
            self.terrain.height_at(PLAYER_START_X) - PLAYER_SPAWN_CLEARANCE,
        );
        self.player.reset(start);
        self.orca = Orca::new();
        self.max_distance = 0.0;
    }

    /// Internal level-up: emits the completion event and builds the next level
    pub fn next_level(&mut self) {
        self.events.push(GameEvent::LevelComplete);
        let next = self.level + 1;
        log::info!("level {} complete, advancing to {}", self.level, next);
        self.setup_level(next);
    }

    /// Playing -> Paused
    pub fn pause(&mut self, now: f64) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::Paused;
        self.pause_time = now;
    }

    /// Paused -> Playing. Shifts the recorded start forward by the paused
    /// span so elapsed-play-time logic never observes the gap.
    pub fn resume(&mut self, now: f64) {
        if self.phase != GamePhase::Paused {
            return;
        }
        self.start_time += now - self.pause_time;
        self.phase = GamePhase::Playing;
    }

    /// Playing -> GameOver. Final stats stay on the state for the host to
    /// read (and feed to the high-score collaborator).
    pub fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
        log::info!(
            "run over: level={} xp={} coins={}",
            self.level,
            self.xp,
            self.coins
        );
    }

    /// Paused/GameOver -> Menu, abandoning the run
    pub fn quit_to_menu(&mut self) {
        self.phase = GamePhase::Menu;
    }

    /// Play time in seconds, immune to pauses
    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.start_time
    }

    /// HUD distance readout
    pub fn distance_meters(&self) -> i64 {
        ((self.player.pos.x / 4.0).floor() as i64).max(0)
    }

    /// Level progress in [0, 1]
    pub fn progress(&self) -> f32 {
        (self.max_distance / self.target_distance).clamp(0.0, 1.0)
    }

    /// Take the events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
