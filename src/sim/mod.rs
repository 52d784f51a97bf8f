//! Deterministic simulation module
//!
//! All animation logic lives here. This module must stay pure:
//! - One tick at a time, each run to completion
//! - Seeded RNG only (or an injected one)
//! - Stable ring order (spawn order)
//! - Drawing only through the `Canvas` contract

pub mod field;
pub mod lookup;
pub mod palette;
pub mod ring;
pub mod state;
pub mod tick;

pub use field::RingField;
pub use lookup::{AngleTable, Drift, DriftChange};
pub use palette::{Palette, palette_channels};
pub use ring::{Ring, RingMotion};
pub use state::{FieldSnapshot, TunnelState};
pub use tick::{TickReport, color_index, tick, tick_with};
