//! Lane Hopper entry point
//!
//! Headless driver: runs the simulation in real time at the fixed logical
//! timestep, logs the events each frame produces, persists the final score
//! when a run ends, and dumps the last frame snapshot as JSON on exit.
//!
//! Usage: `lane-hopper [seed] [frames]`

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use lane_hopper::sim::{Clock, GameEvent, GameState, TickInput, tick};
use lane_hopper::{GameConfig, RenderSnapshot, SIM_DT, ScoreStore};

fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FF_EE00);
    let frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(600);

    let store = ScoreStore::new(ScoreStore::default_path());
    let mut state = GameState::new(GameConfig::default(), seed, 0);
    let mut clock = Clock::new();

    log::info!("running {frames} frames with seed {seed:#x}");

    let start = Instant::now();
    let mut last = start;
    let mut ran = 0u64;
    while ran < frames {
        let now = Instant::now();
        let frame_dt = now.duration_since(last).as_secs_f32();
        last = now;
        let now_ms = start.elapsed().as_millis() as u64;

        for _ in 0..clock.advance(frame_dt) {
            tick(&mut state, &TickInput::default(), SIM_DT, now_ms);
            for event in &state.events {
                log::info!("frame {}: {event:?}", state.frame);
                if let GameEvent::GameOver { final_score, .. } = event {
                    match store.record(*final_score, "Player", epoch_ms()) {
                        Some(rank) => log::info!("score {final_score} ranked #{rank}"),
                        None => log::info!("score {final_score} did not make the board"),
                    }
                }
            }
            ran += 1;
            if ran >= frames {
                break;
            }
        }

        std::thread::sleep(Duration::from_millis(4));
    }

    let snapshot = RenderSnapshot::capture(&state);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::warn!("failed to serialize snapshot: {err}"),
    }
}
