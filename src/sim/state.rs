//! Simulation context
//!
//! Owns everything one animation needs: the immutable lookup tables and
//! palette, the mutable drift cell, the ring field and the seeded RNG.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::canvas::Canvas;
use crate::consts::DEFAULT_RING_COLOR;
use crate::settings::Settings;

use super::field::RingField;
use super::lookup::{AngleTable, Drift};
use super::palette::Palette;
use super::ring::{Ring, RingMotion};

/// Serializable view of the field for logging and regression checks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSnapshot {
    pub time_ticks: u64,
    pub drift: DVec2,
    pub rings: Vec<RingMotion>,
}

/// Complete animation state
#[derive(Debug, Clone)]
pub struct TunnelState<C> {
    /// Seed the RNG was built from
    pub seed: u64,
    pub settings: Settings,
    pub table: AngleTable,
    pub palette: Palette<C>,
    pub drift: Drift,
    pub field: RingField<C>,
    /// Ticks advanced so far
    pub time_ticks: u64,
    /// Color a ring carries until the palette supplies one
    pub default_color: C,
    pub(crate) rng: Pcg32,
}

impl<C: Copy> TunnelState<C> {
    /// Build the tables and palette, then add the first ring at (1, 1)
    pub fn new<K: Canvas<Color = C>>(seed: u64, settings: Settings, canvas: &mut K) -> Self {
        let mut state = Self::without_rings(seed, settings, canvas);
        state.add_ring(1.0, 1.0);
        state
    }

    /// Same as `new` but with an empty field
    pub fn without_rings<K: Canvas<Color = C>>(
        seed: u64,
        settings: Settings,
        canvas: &mut K,
    ) -> Self {
        let table = AngleTable::generate();
        let palette = Palette::build(&table, canvas);
        let (r, g, b) = DEFAULT_RING_COLOR;
        let default_color = canvas.make_color(r, g, b);
        log::debug!(
            "Tunnel state created: seed={}, field={}x{}, palette={} colors",
            seed,
            settings.width,
            settings.height,
            palette.len()
        );
        Self {
            seed,
            settings,
            table,
            palette,
            drift: Drift::default(),
            field: RingField::default(),
            time_ticks: 0,
            default_color,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Append a ring at the field center, snapshotting the current drift
    ///
    /// Returns false when the field is already full.
    pub fn add_ring(&mut self, diameter: f64, offset: f64) -> bool {
        let (cx, cy) = self.settings.center();
        let ring = Ring::new(
            DVec2::new(cx, cy),
            diameter,
            offset,
            self.drift.direction,
            self.settings.height,
            self.default_color,
        );
        self.field.push(ring)
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            time_ticks: self.time_ticks,
            drift: self.drift.direction,
            rings: self.field.iter().map(|ring| ring.motion).collect(),
        }
    }
}
