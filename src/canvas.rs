//! Host drawing contract
//!
//! The simulation never touches pixels directly. It asks the host for opaque
//! color handles and plots single points through them.

use serde::{Deserialize, Serialize};

/// Drawing surface supplied by the host
pub trait Canvas {
    /// Opaque color handle produced by the host
    type Color: Copy;

    /// Map three 0-255 channels to a color handle
    fn make_color(&mut self, r: u8, g: u8, b: u8) -> Self::Color;

    /// Plot one point; out-of-bounds coordinates are clipped silently
    fn plot(&mut self, x: f64, y: f64, color: Self::Color);

    /// Called once at the start of every tick, before any ring is drawn
    fn begin_frame(&mut self) {}
}

/// Plain 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Headless RGB pixel grid
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Fill the whole grid with one color
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Pixel at integer coordinates, None when outside the grid
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Number of pixels that are not black
    pub fn lit_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| **p != Rgb::BLACK).count()
    }
}

impl Canvas for Framebuffer {
    type Color = Rgb;

    fn make_color(&mut self, r: u8, g: u8, b: u8) -> Rgb {
        Rgb::new(r, g, b)
    }

    fn plot(&mut self, x: f64, y: f64, color: Rgb) {
        // Truncate like a pixel setter would; negatives and NaN fall outside
        if !(x >= 0.0 && y >= 0.0) {
            return;
        }
        let (px, py) = (x as usize, y as usize);
        if px < self.width && py < self.height {
            self.pixels[py * self.width + px] = color;
        }
    }

    fn begin_frame(&mut self) {
        self.clear(Rgb::BLACK);
    }
}
