//! Angular lookup tables and the shared drift vector
//!
//! The tables cover 0..=360 degrees in `PRECISION` degree steps: entry `i`
//! holds `sin(i * (π/180) * PRECISION)`, so index 1800 is a full turn.

use glam::DVec2;
use rand::Rng;

use crate::consts::{DRIFT_CHANCE, INITIAL_DRIFT, INVERSE, PRECISION};

/// Precomputed sine/cosine tables, immutable once generated
#[derive(Debug, Clone)]
pub struct AngleTable {
    length: usize,
    sin: Vec<f64>,
    cos: Vec<f64>,
}

impl AngleTable {
    /// Build both tables for indices `0..=length`
    pub fn generate() -> Self {
        let length = (360.0 * INVERSE) as usize;
        let (sin, cos) = (0..=length)
            .map(|i| {
                let angle = i as f64 * (std::f64::consts::PI / 180.0) * PRECISION;
                (angle.sin(), angle.cos())
            })
            .unzip();
        log::debug!("Generated angle tables with {} entries", length + 1);
        Self { length, sin, cos }
    }

    /// Table length used for wrapping (1800 at 0.2 precision)
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Sine entry at an exact index in `0..=len`
    #[inline]
    pub fn sin(&self, index: usize) -> f64 {
        self.check(index);
        self.sin[index]
    }

    /// Cosine entry at an exact index in `0..=len`
    #[inline]
    pub fn cos(&self, index: usize) -> f64 {
        self.check(index);
        self.cos[index]
    }

    /// Table index for a continuous position: truncate, then wrap by `len`
    ///
    /// Panics on negative or non-finite positions.
    #[inline]
    pub fn index_of(&self, position: f64) -> usize {
        assert!(
            position.is_finite() && position >= 0.0,
            "angle table position out of range: {position}"
        );
        position as usize % self.length
    }

    /// Sine at a continuous position
    #[inline]
    pub fn sin_at(&self, position: f64) -> f64 {
        self.sin[self.index_of(position)]
    }

    /// Cosine at a continuous position
    #[inline]
    pub fn cos_at(&self, position: f64) -> f64 {
        self.cos[self.index_of(position)]
    }

    #[inline]
    fn check(&self, index: usize) {
        assert!(
            index <= self.length,
            "angle table index {index} outside 0..={}",
            self.length
        );
    }
}

/// Which drift components a `change_direction` call touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DriftChange {
    pub x: bool,
    pub y: bool,
}

/// Slowly wandering direction shared by every newly spawned ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    pub direction: DVec2,
}

impl Default for Drift {
    fn default() -> Self {
        Self {
            direction: DVec2::new(INITIAL_DRIFT.0, INITIAL_DRIFT.1),
        }
    }
}

impl Drift {
    /// Randomly nudge each component with a 2% chance
    ///
    /// Each component draws a chance sample; only when it fires is a second
    /// sample drawn for the nudge `0.5 - r`.
    pub fn change_direction<R: Rng + ?Sized>(&mut self, rng: &mut R) -> DriftChange {
        let mut change = DriftChange::default();
        if rng.random::<f64>() > DRIFT_CHANCE {
            self.direction.x += 0.5 - rng.random::<f64>();
            change.x = true;
        }
        if rng.random::<f64>() > DRIFT_CHANCE {
            self.direction.y += 0.5 - rng.random::<f64>();
            change.y = true;
        }
        if change.x || change.y {
            log::trace!("Drift changed to ({:.3}, {:.3})", self.direction.x, self.direction.y);
        }
        change
    }
}
