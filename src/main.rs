//! Tunnel entry point
//!
//! Native headless host: drives the simulation at its tick rate into an
//! in-memory framebuffer and logs what the field looks like.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use tunnel::sim::{TunnelState, tick};
use tunnel::{Framebuffer, Settings};

/// How long the headless run lasts
const RUN_SECONDS: u64 = 20;

fn main() {
    env_logger::init();
    log::info!("Tunnel (headless) starting...");

    let settings = Settings::default();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut canvas = Framebuffer::new(settings.width as usize, settings.height as usize);
    let mut state = TunnelState::new(seed, settings, &mut canvas);
    log::info!(
        "Field {}x{} at {} ticks/s, seed {}",
        canvas.width(),
        canvas.height(),
        settings.tick_rate,
        state.seed
    );

    let interval = Duration::from_secs_f64(settings.tick_interval());
    let total_ticks = RUN_SECONDS * settings.tick_rate as u64;
    let mut next_frame = Instant::now();

    for _ in 0..total_ticks {
        let report = tick(&mut state, &mut canvas);

        if state.time_ticks % settings.tick_rate as u64 == 0 {
            log::info!(
                "t={}s rings={} lit={} drift=({:.2}, {:.2}) pruned={} spawned={}",
                state.time_ticks / settings.tick_rate as u64,
                state.field.len(),
                canvas.lit_pixels(),
                state.drift.direction.x,
                state.drift.direction.y,
                report.pruned,
                report.spawned
            );
            if log::log_enabled!(log::Level::Debug) {
                match serde_json::to_string(&state.snapshot()) {
                    Ok(json) => log::debug!("Snapshot: {}", json),
                    Err(e) => log::warn!("Snapshot failed: {:?}", e),
                }
            }
        }

        // Fixed cadence; a late frame resets the schedule instead of bursting
        next_frame += interval;
        let now = Instant::now();
        if next_frame > now {
            std::thread::sleep(next_frame - now);
        } else {
            next_frame = now;
        }
    }

    log::info!("Tunnel finished after {} ticks", state.time_ticks);
}
