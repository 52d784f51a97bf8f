//! Per-frame tick
//!
//! One tick runs to completion: draw every ring in spawn order, prune the ones
//! that grew past the limit, then maybe spawn a new ring behind the newest.

use rand::Rng;

use crate::canvas::Canvas;
use crate::consts::{COLOR_SPAN, PALETTE_LIMIT, PRUNE_DIAMETER, SPAWN_DIAMETER, SPAWN_OFFSET_STEP};

use super::state::TunnelState;

/// What a tick did to the ring population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Rings removed for growing past the limit
    pub pruned: usize,
    /// Whether a new ring was appended
    pub spawned: bool,
}

/// Palette index for a ring's diameter (may run past the palette)
#[inline]
pub fn color_index(diameter: f64) -> usize {
    ((diameter / COLOR_SPAN) * 255.0) as usize
}

/// Advance one tick using the state's own seeded RNG
pub fn tick<C, K>(state: &mut TunnelState<C>, canvas: &mut K) -> TickReport
where
    C: Copy,
    K: Canvas<Color = C>,
{
    let mut rng = state.rng.clone();
    let report = tick_with(state, canvas, &mut rng);
    state.rng = rng;
    report
}

/// Advance one tick drawing drift samples from `rng`
pub fn tick_with<C, K, R>(state: &mut TunnelState<C>, canvas: &mut K, rng: &mut R) -> TickReport
where
    C: Copy,
    K: Canvas<Color = C>,
    R: Rng + ?Sized,
{
    state.time_ticks += 1;
    canvas.begin_frame();

    for ring in state.field.iter_mut() {
        // Past the last entry the ring keeps whatever color it already has
        let index = color_index(ring.diameter());
        let color = if index <= PALETTE_LIMIT {
            state.palette.get(index)
        } else {
            None
        };
        ring.update(&state.table, color);
        ring.draw(&state.table, canvas);
    }

    let pruned = state.field.remove_where(|ring| ring.diameter() > PRUNE_DIAMETER);
    if pruned > 0 {
        log::trace!("Tick {}: pruned {} rings", state.time_ticks, pruned);
    }

    let spawned = maybe_spawn(state, rng);
    TickReport { pruned, spawned }
}

/// Spawn behind the newest ring once it has grown enough and there is room
fn maybe_spawn<C: Copy, R: Rng + ?Sized>(state: &mut TunnelState<C>, rng: &mut R) -> bool {
    if !state.field.has_room() {
        return false;
    }
    let offset = match state.field.newest() {
        Some(newest) if newest.diameter() > SPAWN_DIAMETER => newest.offset(),
        _ => return false,
    };

    state.drift.change_direction(rng);
    let spawned = state.add_ring(0.0, offset + SPAWN_OFFSET_STEP);
    if spawned {
        log::trace!("Tick {}: spawned ring #{}", state.time_ticks, state.field.len());
    }
    spawned
}
