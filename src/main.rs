//! Floe Runner entry point
//!
//! The playable build embeds the library from a host shell that owns the
//! canvas, input and audio. This binary runs a scripted headless demo of the
//! simulation loop, which doubles as a smoke test of a whole run.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use floe_runner::render::particles::SnowField;
    use floe_runner::render::build_scene;
    use floe_runner::settings::Settings;
    use floe_runner::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Floe Runner (headless demo) starting...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let settings = Settings::load();
    let mut state = GameState::new(seed);
    state.set_viewport(1280.0, 720.0);
    state.start(&settings, 0.0);

    let mut snow = SnowField::new(state.viewport, seed);

    // 60 Hz fixed-step harness, 90 simulated seconds of scripted play:
    // run right, hop periodically, boost in bursts.
    let dt = 1.0 / 60.0;
    let frames = 90 * 60;
    for frame in 0..frames {
        let now = frame as f64 * dt as f64;
        let input = TickInput {
            right: true,
            jump: frame % 150 == 0,
            boost: frame % 240 < 40,
            ..Default::default()
        };

        tick(&mut state, &input, dt, now);
        snow.update(dt, state.viewport);

        for event in state.drain_events() {
            log::debug!("event at {:.2}s: {:?}", now, event);
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let scene = build_scene(&state, &snow);
    log::info!(
        "demo finished: level={} xp={} coins={} lives={} distance={}m ({} sprites in final frame)",
        state.level,
        state.xp,
        state.coins,
        state.player.lives,
        state.distance_meters(),
        scene.sprites.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm build is a library; the host shell drives the loop.
}
