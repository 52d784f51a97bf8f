//! A single expanding, spinning ring

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::consts::{BASE_RADIUS, DRAW_STEP, GROW_SPEED, INVERSE, SPIN_SPEED};

use super::lookup::AngleTable;

/// Growth state of a ring, independent of its color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingMotion {
    /// Center of the ring
    pub pos: DVec2,
    /// Growth parameter (drives both radius and palette index)
    pub diameter: f64,
    /// Angular phase in table positions
    pub offset: f64,
    /// Drift captured at spawn
    pub direction: DVec2,
}

impl RingMotion {
    /// Sine index that sets this tick's growth acceleration
    #[inline]
    pub fn growth_index(&self, table: &AngleTable) -> usize {
        // Integer division of the truncated stage by 8
        (self.diameter.rem_euclid(table.len() as f64) / 8.0) as usize
    }

    /// Advance one tick: grow, spin, wrap, then drift
    pub fn advance(&mut self, table: &AngleTable) {
        // Gets faster as it gets wider
        self.diameter += GROW_SPEED + self.diameter * table.sin(self.growth_index(table));
        self.offset += SPIN_SPEED;

        // Rings are pruned long before this; kept so free-running rings wrap
        let length = table.len() as f64;
        if self.diameter >= length {
            self.diameter = 0.0;
        }
        if self.offset >= length {
            self.offset = 0.0;
        }

        self.pos.x += table.cos_at(self.offset) * self.direction.x;
        self.pos.y += table.sin_at(self.offset) * self.direction.y;
    }

    /// Radius the ring is drawn at
    #[inline]
    pub fn radius(&self, table: &AngleTable, height: f64) -> f64 {
        BASE_RADIUS + height * table.sin_at(self.diameter)
    }

    /// The 37 sample points of the ring outline, `i = 0, 10, ..., 360` degrees
    pub fn outline<'a>(
        &'a self,
        table: &'a AngleTable,
        height: f64,
    ) -> impl Iterator<Item = DVec2> + 'a {
        let radius = self.radius(table, height);
        (0..=360 / DRAW_STEP).map(move |i| {
            let degrees = (i * DRAW_STEP) as f64;
            let theta = table.index_of(degrees * INVERSE + self.offset);
            self.pos + DVec2::new(table.cos(theta), table.sin(theta)) * radius
        })
    }
}

/// A ring plus the host color it is currently drawn with
#[derive(Debug, Clone)]
pub struct Ring<C> {
    pub motion: RingMotion,
    /// Last color assigned from the palette
    pub color: C,
    /// Field height, scales the drawn radius
    height: f64,
}

impl<C: Copy> Ring<C> {
    pub fn new(
        pos: DVec2,
        diameter: f64,
        offset: f64,
        direction: DVec2,
        height: f64,
        color: C,
    ) -> Self {
        Self {
            motion: RingMotion {
                pos,
                diameter,
                offset,
                direction,
            },
            color,
            height,
        }
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        self.motion.diameter
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.motion.offset
    }

    #[inline]
    pub fn pos(&self) -> DVec2 {
        self.motion.pos
    }

    /// Store a new color if one is given, then advance one tick
    pub fn update(&mut self, table: &AngleTable, color: Option<C>) {
        if let Some(color) = color {
            self.color = color;
        }
        self.motion.advance(table);
    }

    /// Plot the outline in the stored color
    pub fn draw<K: Canvas<Color = C>>(&self, table: &AngleTable, canvas: &mut K) {
        for point in self.motion.outline(table, self.height) {
            canvas.plot(point.x, point.y, self.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Framebuffer, Rgb};

    /// Apply the growth formula directly with std trig
    fn reference_diameters(start: f64, steps: usize) -> Vec<f64> {
        let mut diameter = start;
        let mut trace = Vec::with_capacity(steps);
        for _ in 0..steps {
            let index = ((diameter % 1800.0) / 8.0).floor();
            let angle = index * (std::f64::consts::PI / 180.0) * 0.2;
            diameter += 2.0 + diameter * angle.sin();
            if diameter >= 1800.0 {
                diameter = 0.0;
            }
            trace.push(diameter);
        }
        trace
    }

    fn ring_at(diameter: f64, offset: f64, direction: DVec2) -> Ring<Rgb> {
        let center = DVec2::new(320.0, 240.0);
        Ring::new(center, diameter, offset, direction, 480.0, Rgb::new(80, 30, 30))
    }

    #[test]
    fn test_first_update_from_one() {
        let table = AngleTable::generate();
        let mut ring = ring_at(1.0, 1.0, DVec2::new(5.0, 0.0));
        ring.update(&table, None);
        // sin[0] == 0, so the first step is pure grow speed
        assert_eq!(ring.diameter(), 3.0);
        assert_eq!(ring.offset(), 3.5);
        // Offset 3.5 truncates to index 3
        assert!((ring.pos().x - (320.0 + table.cos(3) * 5.0)).abs() < 1e-12);
        assert_eq!(ring.pos().y, 240.0);
    }

    #[test]
    fn test_growth_golden_trace() {
        let table = AngleTable::generate();
        let mut ring = ring_at(1.0, 1.0, DVec2::new(5.0, 0.0));
        let expected = reference_diameters(1.0, 40);
        for (step, want) in expected.iter().enumerate() {
            ring.update(&table, None);
            assert!(
                (ring.diameter() - want).abs() <= 1e-9 * want.max(1.0),
                "step {step}: {} != {want}",
                ring.diameter()
            );
        }
    }

    #[test]
    fn test_growth_monotonic() {
        let table = AngleTable::generate();
        let mut ring = ring_at(1.0, 1.0, DVec2::new(5.0, 0.0));
        let mut last = ring.diameter();
        while ring.diameter() <= 400.0 {
            ring.update(&table, None);
            assert!(ring.diameter() >= last);
            last = ring.diameter();
        }
    }

    #[test]
    fn test_offset_wraps() {
        let table = AngleTable::generate();
        let mut ring = ring_at(0.0, 1798.0, DVec2::ZERO);
        ring.update(&table, None);
        assert_eq!(ring.offset(), 0.0);
    }

    #[test]
    fn test_diameter_wraps() {
        let table = AngleTable::generate();
        let mut ring = ring_at(1799.0, 0.0, DVec2::ZERO);
        ring.update(&table, None);
        assert_eq!(ring.diameter(), 0.0);
    }

    #[test]
    fn test_snapshot_direction_used() {
        let table = AngleTable::generate();
        let mut ring = ring_at(0.0, 0.0, DVec2::new(0.0, 3.0));
        ring.update(&table, None);
        assert_eq!(ring.pos().x, 320.0);
        assert!((ring.pos().y - (240.0 + table.sin(2) * 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_update_keeps_color_without_override() {
        let table = AngleTable::generate();
        let mut ring = ring_at(1.0, 1.0, DVec2::ZERO);
        ring.update(&table, None);
        assert_eq!(ring.color, Rgb::new(80, 30, 30));
        ring.update(&table, Some(Rgb::new(1, 2, 3)));
        assert_eq!(ring.color, Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_outline_points() {
        let table = AngleTable::generate();
        let ring = ring_at(0.0, 0.0, DVec2::ZERO);
        let points: Vec<_> = ring.motion.outline(&table, 480.0).collect();
        assert_eq!(points.len(), 37);
        // Diameter 0 gives the base radius
        assert!((points[0] - DVec2::new(336.0, 240.0)).length() < 1e-9);
        // 360 degrees lands on index 1800 mod 1800 == 0
        assert_eq!(points[36], points[0]);
        // Sample 1 sits at 10 degrees, table index 50
        let expected = DVec2::new(320.0, 240.0) + DVec2::new(table.cos(50), table.sin(50)) * 16.0;
        assert!((points[1] - expected).length() < 1e-9);
    }

    #[test]
    fn test_draw_plots_in_color() {
        let table = AngleTable::generate();
        let mut fb = Framebuffer::new(640, 480);
        let ring = ring_at(10.0, 7.0, DVec2::ZERO);
        ring.draw(&table, &mut fb);
        let lit = fb.lit_pixels();
        assert!(lit > 0 && lit <= 37);
        let first = ring.motion.outline(&table, 480.0).next().unwrap();
        assert_eq!(fb.pixel(first.x as usize, first.y as usize), Some(Rgb::new(80, 30, 30)));
    }
}
