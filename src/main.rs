//! Block Breaker entry point
//!
//! The real frontend is whatever windowing framework hosts the simulation.
//! Natively this runs a headless demo: launch, let the ball fly with the
//! paddle parked, and report how the run ended.

/// Give up on the demo after this many simulated frames (~2 minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAME_LIMIT: u32 = 60 * 120;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use block_breaker::Settings;
    use block_breaker::consts::SIM_DT;
    use block_breaker::platform::{FixedStep, KeyState, KeyTracker};
    use block_breaker::sim::{GameEvent, GameState};

    env_logger::init();
    log::info!("Block Breaker (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let mut state = GameState::with_settings(settings);
    let mut keys = KeyTracker::new();
    let mut step = FixedStep::default();
    let mut blocks_destroyed = 0;

    for frame in 0..DEMO_FRAME_LIMIT {
        // Hold launch for the first few frames; the tracker fires it once
        let input = keys.update(KeyState {
            launch: frame < 5,
            ..Default::default()
        });
        step.run_frame(&mut state, input, SIM_DT);

        blocks_destroyed += step
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::BlockDestroyed { .. }))
            .count();

        if state.phase.is_ended() {
            break;
        }
    }

    log::info!(
        "Demo finished: {:?} after {} ticks, {} blocks destroyed, score {}",
        state.phase,
        state.time_ticks,
        blocks_destroyed,
        state.score
    );
    println!("{:?} - score {}", state.phase, state.score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives the simulation directly through the library
}
