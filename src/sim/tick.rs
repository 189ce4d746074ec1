//! Per-frame simulation tick
//!
//! The single entry point that advances a session. One call per display
//! frame; `dt` is wall-clock-derived and capped here, so slow frames
//! under-simulate instead of blowing up the integration. Update order within
//! a tick is fixed: player physics -> camera -> pickups -> progress -> orca
//! -> level-complete -> fall-out.

use glam::Vec2;

use super::collision::{overlap, push_out_x};
use super::state::{GameEvent, GamePhase, GameState, ItemKind, Obstacle, Orca, Player};
use super::terrain::Terrain;
use crate::consts::*;
use crate::lerp;

/// Polled logical input actions for a single tick. Key bindings are a host
/// concern; the sim only sees actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub slide: bool,
    pub boost: bool,
    /// Pause toggle (host sends this edge-triggered)
    pub pause: bool,
}

/// Advance the session by one frame. `now` is host wall-clock seconds and
/// only feeds elapsed-play-time logic; all kinematics use `dt`.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, now: f64) {
    if input.pause {
        match state.phase {
            GamePhase::Playing => state.pause(now),
            GamePhase::Paused => state.resume(now),
            _ => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    let dt = dt.min(MAX_FRAME_DT);

    {
        let GameState {
            player,
            terrain,
            obstacles,
            events,
            ..
        } = state;
        player_step(player, terrain, obstacles, input, dt, events);
    }

    let player_pos = state.player.pos;
    state.camera.follow(player_pos, state.viewport, dt);

    collect_items(state);

    state.max_distance = state
        .max_distance
        .max((state.player.pos.x - PLAYER_START_X).floor());

    let trigger = state.options.difficulty.orca_trigger_secs();
    if !state.orca.active && state.elapsed(now) > trigger as f64 {
        state.orca.spawn_behind(state.player.pos.x, &state.terrain);
        log::info!("orca surfaced at x={:.0}", state.orca.pos.x);
    }
    {
        let GameState {
            orca,
            player,
            terrain,
            events,
            ..
        } = state;
        orca_step(orca, player, terrain, dt, events);
    }
    if state.player.lives == 0 {
        state.end_run();
        return;
    }

    if state.player.pos.x >= state.target_distance + LEVEL_COMPLETE_MARGIN {
        state.next_level();
        return;
    }

    // Fell out of the world: costs a life, respawns slightly behind.
    // The respawn height samples the terrain at the pre-setback x.
    if state.player.pos.y > state.viewport.y + FALL_OUT_MARGIN {
        state.player.lives = state.player.lives.saturating_sub(1);
        state.events.push(GameEvent::Hit);
        let x = state.player.pos.x;
        let respawn = Vec2::new(
            x - RESPAWN_SETBACK,
            state.terrain.height_at(x) - PLAYER_SPAWN_CLEARANCE,
        );
        state.player.reset(respawn);
        if state.player.lives == 0 {
            state.end_run();
        }
    }
}

/// One integration step for the player.
///
/// The friction/max-speed/accel coefficients are read from the slide flag of
/// the previous tick; the flag itself is refreshed from input afterwards.
pub fn player_step(
    player: &mut Player,
    terrain: &Terrain,
    obstacles: &[Obstacle],
    input: &TickInput,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    let (accel, friction, max_speed) = if player.sliding {
        (
            PLAYER_ACCEL * SLIDE_ACCEL_MULT,
            SLIDE_FRICTION,
            SLIDE_MAX_SPEED,
        )
    } else {
        (PLAYER_ACCEL, GROUND_FRICTION, PLAYER_MAX_SPEED)
    };

    if input.left {
        player.vel.x -= accel * dt;
        player.face_right = false;
    }
    if input.right {
        player.vel.x += accel * dt;
        player.face_right = true;
    }
    player.sliding = input.slide && player.on_ground;

    // No double jump: only a grounded player can leave the ice
    if input.jump && player.on_ground {
        player.vel.y = JUMP_VELOCITY;
        player.on_ground = false;
        events.push(GameEvent::Jump);
    }

    // Boost burns stamina in the facing direction; otherwise stamina refills
    if input.boost && player.stamina > BOOST_MIN_STAMINA {
        let dir = if player.face_right { 1.0 } else { -1.0 };
        player.vel.x += dir * BOOST_ACCEL * dt;
        player.stamina = (player.stamina - STAMINA_DRAIN_RATE * dt).max(0.0);
    } else {
        player.stamina = (player.stamina + STAMINA_REGEN_RATE * dt).clamp(0.0, 1.0);
    }

    player.vel.y += GRAVITY * dt;
    player.pos += player.vel * dt;

    // Friction uses the grounded flag from before the snap below
    player.vel.x *= if player.on_ground { friction } else { AIR_DRAG };

    let ground = terrain.height_at(player.pos.x);
    if player.pos.y + player.size.y / 2.0 >= ground {
        player.pos.y = ground - player.size.y / 2.0;
        player.vel.y = 0.0;
        player.on_ground = true;
    } else {
        player.on_ground = false;
    }

    player.vel.x = player.vel.x.clamp(-max_speed, max_speed);

    // Every obstacle resolves independently; simultaneous overlaps each
    // apply their own push-out and knockback
    for ob in obstacles {
        if overlap(player.pos, player.size, ob.pos, ob.size) {
            player.pos.x = push_out_x(player.pos.x, player.size.x, ob.pos.x, ob.size.x);
            player.vel.x *= -0.2;
            events.push(GameEvent::Hit);
        }
    }
}

/// Pursuit update: ease onto the terrain, steer toward a standoff point
/// behind the player, bite on contact.
///
/// The contact test passes the orca as the center-anchored box and the
/// player as the corner-anchored one.
pub fn orca_step(
    orca: &mut Orca,
    player: &mut Player,
    terrain: &Terrain,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    if !orca.active {
        return;
    }

    let target_y = terrain.height_at(orca.pos.x) - orca.size.y / 2.0 - ORCA_HOVER;
    orca.pos.y = lerp(orca.pos.y, target_y, ORCA_EASE_RATE * dt);

    let desired = (player.pos.x - ORCA_STANDOFF) - orca.pos.x;
    orca.vx = (desired * ORCA_PURSUIT_GAIN).clamp(ORCA_MIN_SPEED, ORCA_MAX_SPEED);
    orca.pos.x += orca.vx * dt;

    if overlap(orca.pos, orca.size, player.pos, player.size) {
        player.lives = player.lives.saturating_sub(1);
        events.push(GameEvent::Hit);
        orca.pos.x -= ORCA_KNOCKBACK;
    }
}

/// Pick up every uncollected item the player overlaps. `collected` is
/// monotonic, so an item can only ever pay out once.
fn collect_items(state: &mut GameState) {
    let GameState {
        player,
        items,
        xp,
        coins,
        events,
        ..
    } = state;

    for item in items.iter_mut() {
        if item.collected {
            continue;
        }
        if overlap(player.pos, player.size, item.pos, item.size) {
            item.collected = true;
            match item.kind {
                ItemKind::Fish => {
                    *xp += FISH_XP;
                    events.push(GameEvent::Collect);
                }
                ItemKind::Coin => {
                    *coins += 1;
                    events.push(GameEvent::Coin);
                }
            }
        }
    }
}
