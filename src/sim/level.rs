//! Procedural level generation
//!
//! Deterministic shape, stochastic content: a cursor walks the level span
//! dropping obstacles and item clusters. All randomness comes from a `Pcg32`
//! seeded from the run seed and the level number, so a given (seed, level,
//! difficulty) triple always produces the same layout.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{GameState, Item, ItemKind, Obstacle};
use crate::consts::*;
use crate::settings::Difficulty;

/// Horizontal distance that completes level `level` (1-based)
pub fn target_distance(level: u32, difficulty: Difficulty) -> f32 {
    let scale = 1.0 + (level - 1) as f32 * TARGET_GROWTH_PER_LEVEL;
    (BASE_TARGET_DISTANCE * scale * difficulty.multiplier()).floor()
}

/// Obstacle probability per cursor step, ramping with level
fn obstacle_chance(level: u32) -> f64 {
    (0.15 + (level - 1) as f64 * 0.04).min(0.4)
}

/// Rebuild `state.obstacles` and `state.items` for the current level.
/// Clears both collections first; uncollected items never survive a level.
pub fn generate_level(state: &mut GameState) {
    let mut rng = Pcg32::seed_from_u64(level_seed(state.seed, state.level));

    state.obstacles.clear();
    state.items.clear();

    let end = state.target_distance + LEVEL_TAIL;
    let chance = obstacle_chance(state.level);

    let mut x = LEVEL_START_X;
    while x < end {
        if rng.random_bool(chance) {
            let w = rng.random_range(60..=120) as f32;
            let h = rng.random_range(20..=40) as f32;
            let top = state.terrain.height_at(x) - h;
            state.obstacles.push(Obstacle::new(x, top, w, h));
            x += w + rng.random_range(80..=180) as f32;
        } else {
            x += rng.random_range(80..=160) as f32;
        }

        // Item cluster at the advanced cursor. The column height samples the
        // terrain at 24px strides while the items sit at 26px strides.
        let count = rng.random_range(2..=4);
        for i in 0..count {
            let clearance = rng.random_range(60..=140) as f32;
            let iy = state.terrain.height_at(x + i as f32 * 24.0) - clearance;
            let ix = x + i as f32 * 26.0;
            let kind = if rng.random_bool(0.18) {
                ItemKind::Coin
            } else {
                ItemKind::Fish
            };
            if ix <= end {
                state.items.push(Item::new(ix, iy, kind));
            }
        }
    }

    log::info!(
        "level {}: target={} obstacles={} items={}",
        state.level,
        state.target_distance,
        state.obstacles.len(),
        state.items.len()
    );
}

/// Per-level RNG seed mixed from the run seed and the level number
fn level_seed(seed: u64, level: u32) -> u64 {
    (level as u64).wrapping_mul(2654435761).wrapping_add(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn built_state(seed: u64, level: u32, difficulty: Difficulty) -> GameState {
        let mut state = GameState::new(seed);
        let settings = Settings {
            difficulty,
            ..Default::default()
        };
        state.start(&settings, 0.0);
        if level > 1 {
            state.setup_level(level);
        }
        state
    }

    #[test]
    fn test_target_distance_formula() {
        assert_eq!(target_distance(1, Difficulty::Normal), 600.0);
        assert_eq!(target_distance(2, Difficulty::Normal), 780.0);
        assert_eq!(target_distance(5, Difficulty::Normal), 1320.0);
        assert_eq!(target_distance(1, Difficulty::Easy), 540.0);
        assert_eq!(target_distance(1, Difficulty::Hard), 750.0);
        assert_eq!(target_distance(3, Difficulty::Hard), 1200.0);
    }

    #[test]
    fn test_placements_within_level_bounds() {
        for level in [1, 3, 7] {
            let state = built_state(99, level, Difficulty::Normal);
            let end = state.target_distance + LEVEL_TAIL;
            for ob in &state.obstacles {
                assert!(ob.pos.x >= 0.0 && ob.pos.x <= end, "obstacle at {}", ob.pos.x);
            }
            for item in &state.items {
                assert!(item.pos.x >= 0.0 && item.pos.x <= end, "item at {}", item.pos.x);
            }
        }
    }

    #[test]
    fn test_obstacles_rest_on_terrain() {
        let mut seen = 0;
        for seed in 0..10 {
            let state = built_state(seed, 3, Difficulty::Normal);
            for ob in &state.obstacles {
                let ground = state.terrain.height_at(ob.pos.x);
                assert!((ob.pos.y + ob.size.y - ground).abs() < 0.001);
                seen += 1;
            }
        }
        assert!(seen > 0, "no obstacles across ten seeds");
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = built_state(1234, 2, Difficulty::Hard);
        let b = built_state(1234, 2, Difficulty::Hard);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        assert_eq!(a.items.len(), b.items.len());
        for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(oa.pos, ob.pos);
            assert_eq!(oa.size, ob.size);
        }
        for (ia, ib) in a.items.iter().zip(&b.items) {
            assert_eq!(ia.pos, ib.pos);
            assert_eq!(ia.kind, ib.kind);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = built_state(1, 1, Difficulty::Normal);
        let b = built_state(2, 1, Difficulty::Normal);
        let same = a.obstacles.len() == b.obstacles.len()
            && a.items.len() == b.items.len()
            && a.items
                .iter()
                .zip(&b.items)
                .all(|(ia, ib)| ia.pos == ib.pos);
        assert!(!same);
    }

    #[test]
    fn test_regeneration_replaces_collections() {
        let mut state = built_state(55, 1, Difficulty::Normal);
        state.items[0].collected = true;
        state.setup_level(2);
        assert!(state.items.iter().all(|i| !i.collected));
    }
}
