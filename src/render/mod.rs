//! Per-frame scene construction
//!
//! The core never rasterizes. Each frame it flattens the simulation into a
//! `Scene`: camera-relative sprites, the ground polyline, parallax bands and
//! the snow layer. A host drawing layer turns that into pixels; colors and
//! shapes are its business.

pub mod particles;

use glam::Vec2;

use crate::sim::state::{GameState, ItemKind};
use particles::{Flake, SnowField};

/// How far past the viewport edges entities are still emitted
const CULL_MARGIN: f32 = 200.0;
/// Horizontal sampling stride for the ground polyline
const GROUND_STEP: f32 = 16.0;
/// Background bands and their camera-speed fraction
const PARALLAX_BANDS: usize = 6;
const PARALLAX_FACTOR: f32 = 0.2;

/// What a sprite depicts, with the pose facts needed to draw it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpriteKind {
    Player { face_right: bool, sliding: bool },
    Orca,
    Fish,
    Coin,
    Obstacle,
}

/// One drawable entity in camera-relative coordinates.
///
/// `pos` keeps the entity's native anchor: centers for the player, orca and
/// items, top-left corners for obstacles.
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub pos: Vec2,
    pub size: Vec2,
}

/// A background stripe scrolling at a fraction of camera speed
#[derive(Debug, Clone, Copy)]
pub struct ParallaxBand {
    /// Top-left corner, screen space
    pub pos: Vec2,
    pub size: Vec2,
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone)]
pub struct Scene {
    pub sprites: Vec<Sprite>,
    /// Ground surface polyline across the viewport, camera-relative
    pub ground: Vec<Vec2>,
    pub parallax: Vec<ParallaxBand>,
    /// Snowflakes in screen space; empty when particles are disabled
    pub snow: Vec<Flake>,
}

/// Flatten the current simulation state into a drawable scene
pub fn build_scene(state: &GameState, snow: &SnowField) -> Scene {
    let camera = &state.camera;
    let viewport = state.viewport;
    let visible_x = (camera.pos.x - CULL_MARGIN)..(camera.pos.x + viewport.x + CULL_MARGIN);

    let mut sprites = Vec::new();

    for ob in &state.obstacles {
        if visible_x.contains(&ob.pos.x) {
            sprites.push(Sprite {
                kind: SpriteKind::Obstacle,
                pos: camera.to_screen(ob.pos),
                size: ob.size,
            });
        }
    }

    for item in &state.items {
        if item.collected || !visible_x.contains(&item.pos.x) {
            continue;
        }
        let kind = match item.kind {
            ItemKind::Fish => SpriteKind::Fish,
            ItemKind::Coin => SpriteKind::Coin,
        };
        sprites.push(Sprite {
            kind,
            pos: camera.to_screen(item.pos),
            size: item.size,
        });
    }

    if state.orca.active {
        sprites.push(Sprite {
            kind: SpriteKind::Orca,
            pos: camera.to_screen(state.orca.pos),
            size: state.orca.size,
        });
    }

    sprites.push(Sprite {
        kind: SpriteKind::Player {
            face_right: state.player.face_right,
            sliding: state.player.sliding,
        },
        pos: camera.to_screen(state.player.pos),
        size: state.player.size,
    });

    Scene {
        sprites,
        ground: ground_polyline(state),
        parallax: parallax_bands(camera.pos.x, viewport),
        snow: if state.options.particles {
            snow.flakes.clone()
        } else {
            Vec::new()
        },
    }
}

/// Sample the terrain across the viewport in camera-relative coordinates
fn ground_polyline(state: &GameState) -> Vec<Vec2> {
    let camera = &state.camera;
    let mut points = Vec::new();
    let mut sx = -GROUND_STEP;
    while sx <= state.viewport.x + GROUND_STEP {
        let world_y = state.terrain.height_at(camera.pos.x + sx);
        points.push(Vec2::new(sx, world_y - camera.pos.y));
        sx += GROUND_STEP;
    }
    points
}

/// Background stripes drifting at a fraction of the camera's speed
fn parallax_bands(camera_x: f32, viewport: Vec2) -> Vec<ParallaxBand> {
    let half_w = viewport.x / 2.0;
    let scroll = (camera_x * PARALLAX_FACTOR) % half_w;
    (0..PARALLAX_BANDS)
        .map(|i| ParallaxBand {
            pos: Vec2::new(-scroll + i as f32 * half_w - half_w, viewport.y * 0.62),
            size: Vec2::new(half_w - 40.0, 6.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::{Item, Obstacle};

    fn scene_state() -> GameState {
        let mut state = GameState::new(42);
        state.start(&Settings::default(), 0.0);
        state
    }

    fn snow_for(state: &GameState) -> SnowField {
        SnowField::new(state.viewport, 7)
    }

    #[test]
    fn test_player_sprite_is_camera_relative() {
        let mut state = scene_state();
        state.camera.pos = Vec2::new(50.0, 20.0);
        let scene = build_scene(&state, &snow_for(&state));

        let player = scene
            .sprites
            .iter()
            .find(|s| matches!(s.kind, SpriteKind::Player { .. }))
            .unwrap();
        assert_eq!(player.pos, state.player.pos - state.camera.pos);
    }

    #[test]
    fn test_far_entities_are_culled() {
        let mut state = scene_state();
        state.obstacles.clear();
        state.items.clear();
        state
            .obstacles
            .push(Obstacle::new(state.viewport.x + 10_000.0, 400.0, 60.0, 30.0));
        let scene = build_scene(&state, &snow_for(&state));
        assert!(
            !scene
                .sprites
                .iter()
                .any(|s| s.kind == SpriteKind::Obstacle)
        );
    }

    #[test]
    fn test_collected_items_are_skipped() {
        let mut state = scene_state();
        state.obstacles.clear();
        state.items.clear();
        let mut item = Item::new(200.0, 300.0, ItemKind::Coin);
        item.collected = true;
        state.items.push(item);
        state.items.push(Item::new(260.0, 300.0, ItemKind::Coin));

        let scene = build_scene(&state, &snow_for(&state));
        let coins = scene
            .sprites
            .iter()
            .filter(|s| s.kind == SpriteKind::Coin)
            .count();
        assert_eq!(coins, 1);
    }

    #[test]
    fn test_orca_hidden_until_active() {
        let mut state = scene_state();
        assert!(
            !build_scene(&state, &snow_for(&state))
                .sprites
                .iter()
                .any(|s| s.kind == SpriteKind::Orca)
        );

        state.orca.spawn_behind(state.player.pos.x, &state.terrain);
        assert!(
            build_scene(&state, &snow_for(&state))
                .sprites
                .iter()
                .any(|s| s.kind == SpriteKind::Orca)
        );
    }

    #[test]
    fn test_snow_respects_particles_option() {
        let mut state = scene_state();
        let snow = snow_for(&state);

        state.options.particles = true;
        assert!(!build_scene(&state, &snow).snow.is_empty());

        state.options.particles = false;
        assert!(build_scene(&state, &snow).snow.is_empty());
    }

    #[test]
    fn test_ground_polyline_spans_viewport() {
        let state = scene_state();
        let scene = build_scene(&state, &snow_for(&state));
        assert!(scene.ground.len() > 2);
        assert!(scene.ground.first().unwrap().x <= 0.0);
        assert!(scene.ground.last().unwrap().x >= state.viewport.x);
    }

    #[test]
    fn test_parallax_band_count() {
        let state = scene_state();
        let scene = build_scene(&state, &snow_for(&state));
        assert_eq!(scene.parallax.len(), PARALLAX_BANDS);
    }
}
