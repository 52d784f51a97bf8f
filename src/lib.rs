//! Tunnel - concentric rings expanding out of a drifting center
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lookup tables, palette, rings, per-frame tick)
//! - `canvas`: Host drawing contract plus a headless framebuffer
//! - `settings`: Host-facing field dimensions and tick cadence

pub mod canvas;
pub mod settings;
pub mod sim;

pub use canvas::{Canvas, Framebuffer, Rgb};
pub use settings::Settings;

/// Animation constants
pub mod consts {
    /// Angular step of the lookup tables, in degrees (5 samples per degree)
    pub const PRECISION: f64 = 0.2;
    /// Table entries per degree
    pub const INVERSE: f64 = 1.0 / PRECISION;

    /// Diameter added to every ring each tick before table acceleration
    pub const GROW_SPEED: f64 = 2.0;
    /// Offset added to every ring each tick
    pub const SPIN_SPEED: f64 = 2.5;
    /// Degrees between plotted samples of a ring
    pub const DRAW_STEP: u32 = 10;
    /// Minimum plotted radius
    pub const BASE_RADIUS: f64 = 16.0;

    /// Maximum number of live rings
    pub const RING_LIMIT: usize = 256;
    /// Rings wider than this are removed at the end of the tick
    pub const PRUNE_DIAMETER: f64 = 400.0;
    /// The newest ring must be wider than this before another one spawns
    pub const SPAWN_DIAMETER: f64 = 6.0;
    /// Phase lead of a new ring over the previous newest ring
    pub const SPAWN_OFFSET_STEP: f64 = 2.0;

    /// Highest palette index (palette holds LIMIT + 1 colors)
    pub const PALETTE_LIMIT: usize = 256;
    /// Diameter span mapped onto the full palette
    pub const COLOR_SPAN: f64 = 60.0;
    /// Color every ring carries until the palette supplies one
    pub const DEFAULT_RING_COLOR: (u8, u8, u8) = (80, 30, 30);

    /// Drift component changes only when a uniform sample exceeds this
    pub const DRIFT_CHANCE: f64 = 0.98;
    /// Drift vector at table generation
    pub const INITIAL_DRIFT: (f64, f64) = (5.0, 0.0);

    /// Default field size
    pub const FIELD_WIDTH: f64 = 640.0;
    pub const FIELD_HEIGHT: f64 = 480.0;
    /// Host tick cadence
    pub const TICK_RATE: u32 = 30;
}
