//! Ring color palette
//!
//! Grey bands that brighten along the sine table with a blue channel that
//! climbs one step per entry until it saturates.

use crate::canvas::{Canvas, Rgb};
use crate::consts::PALETTE_LIMIT;

use super::lookup::AngleTable;

/// Round a channel value into 0..=255
#[inline]
fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// The palette as plain RGB, `PALETTE_LIMIT + 1` entries
pub fn palette_channels(table: &AngleTable) -> Vec<Rgb> {
    let mut base = 1.0_f64;
    (0..=PALETTE_LIMIT)
        .map(|i| {
            let blue = (base + i as f64).min(255.0);
            let color = Rgb::new(channel(base), channel(base), channel(blue));
            // Base is never reset, only the blue channel saturates
            base += table.sin(i);
            color
        })
        .collect()
}

/// Host color handles indexed by growth stage
#[derive(Debug, Clone)]
pub struct Palette<C> {
    colors: Vec<C>,
}

impl<C: Copy> Palette<C> {
    /// Build the palette through the host's color constructor
    pub fn build<K: Canvas<Color = C>>(table: &AngleTable, canvas: &mut K) -> Self {
        let colors = palette_channels(table)
            .into_iter()
            .map(|rgb| canvas.make_color(rgb.r, rgb.g, rgb.b))
            .collect();
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, None past the last entry
    pub fn get(&self, index: usize) -> Option<C> {
        self.colors.get(index).copied()
    }
}
