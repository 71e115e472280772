/// RGB raster surface that the core rasterizer plots into, drawn to the
/// terminal two pixels per cell
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use cube3d_core::{PixelSink, Rgb};
use std::io::Write;

/// Upper half block: foreground paints the top pixel, background the bottom one
const HALF_BLOCK: char = '\u{2580}';

pub struct Canvas {
    width: usize,
    height: usize,
    background: Rgb,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            background: Rgb::BLACK,
            pixels: vec![Rgb::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Resize and clear
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels = vec![self.background; width * height];
    }

    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Queue the canvas with its top-left cell at (`left`, `top`)
    pub fn draw<W: Write>(&self, writer: &mut W, left: u16, top: u16) -> std::io::Result<()> {
        let mut last: Option<(Rgb, Rgb)> = None;

        for row in 0..self.height.div_ceil(2) {
            writer.queue(cursor::MoveTo(left, top + row as u16))?;
            for x in 0..self.width {
                let upper = self.pixel(x, row * 2).unwrap_or(self.background);
                let lower = self.pixel(x, row * 2 + 1).unwrap_or(self.background);

                if last != Some((upper, lower)) {
                    writer.queue(SetForegroundColor(to_color(upper)))?;
                    writer.queue(SetBackgroundColor(to_color(lower)))?;
                    last = Some((upper, lower));
                }
                writer.queue(Print(HALF_BLOCK))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl PixelSink for Canvas {
    /// Alpha-blend `color` over the pixel; out-of-bounds writes are dropped
    fn plot(&mut self, x: i64, y: i64, coverage: f64, color: Rgb) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        if coverage.is_nan() {
            return;
        }
        let alpha = coverage.clamp(0.0, 1.0);
        let idx = y as usize * self.width + x as usize;
        self.pixels[idx] = blend(self.pixels[idx], color, alpha);
    }
}

fn blend(dst: Rgb, src: Rgb, alpha: f64) -> Rgb {
    let mix = |d: u8, s: u8| (d as f64 + (s as f64 - d as f64) * alpha).round() as u8;
    Rgb::new(mix(dst.r, src.r), mix(dst.g, src.g), mix(dst.b, src.b))
}

fn to_color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}
