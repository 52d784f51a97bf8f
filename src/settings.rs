//! Host settings
//!
//! Field dimensions and tick cadence. The animation has no user-facing options,
//! so these are fixed at their defaults outside of tests.

use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, TICK_RATE};

/// Field and cadence settings handed to the simulation at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Field width in pixels
    pub width: f64,
    /// Field height in pixels (also scales ring radius)
    pub height: f64,
    /// Ticks per second the host drives
    pub tick_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            tick_rate: TICK_RATE,
        }
    }
}

impl Settings {
    /// Settings for a field of the given size at the default cadence
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Spawn point of every ring
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Seconds per tick
    pub fn tick_interval(&self) -> f64 {
        1.0 / self.tick_rate.max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_field() {
        let settings = Settings::default();
        assert_eq!(settings.center(), (320.0, 240.0));
        assert_eq!(settings.tick_rate, 30);
        assert!((settings.tick_interval() - 1.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings::with_size(800.0, 600.0);
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, back);
    }
}
