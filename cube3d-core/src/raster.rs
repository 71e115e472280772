/// Antialiased line rasterization (Xiaolin Wu's algorithm)
use crate::vector::Vector2;

/// An opaque 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const RED: Rgb = Rgb::new(0xFF, 0x00, 0x00);
    pub const GREEN: Rgb = Rgb::new(0x00, 0xFF, 0x00);
    pub const YELLOW: Rgb = Rgb::new(0xFF, 0xFF, 0x00);
    pub const AZURE: Rgb = Rgb::new(0x00, 0x9F, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Destination for rasterized pixels.
///
/// `coverage` is in `[0, 1]` and is meant as an alpha weight for `color`;
/// blending and bounds handling belong to the implementor.
pub trait PixelSink {
    fn plot(&mut self, x: i64, y: i64, coverage: f64, color: Rgb);
}

/// One recorded pixel write
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub x: i64,
    pub y: i64,
    pub coverage: f64,
    pub color: Rgb,
}

/// Collects plots in emission order
impl PixelSink for Vec<Plot> {
    fn plot(&mut self, x: i64, y: i64, coverage: f64, color: Rgb) {
        self.push(Plot { x, y, coverage, color });
    }
}

#[inline]
fn round(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[inline]
fn fpart(x: f64) -> f64 {
    x - x.floor()
}

#[inline]
fn rfpart(x: f64) -> f64 {
    1.0 - fpart(x)
}

/// Draw an antialiased line from `from` to `to` into `sink`.
///
/// Emits two pixels per endpoint plus two per whole column strictly between
/// the endpoint columns (columns along the dominant axis). The two coverages
/// of an interior column sum to 1. Nothing is emitted if any coordinate is
/// not finite.
///
/// There is no clipping: every column between the endpoints is visited, so
/// the cost grows with the segment's length even when it lies entirely off
/// the sink's surface. Pixel coordinates saturate at the `i64` range.
pub fn draw_line<S: PixelSink + ?Sized>(sink: &mut S, from: Vector2, to: Vector2, color: Rgb) {
    if !from.is_finite() || !to.is_finite() {
        return;
    }

    let (mut x0, mut y0, mut x1, mut y1) = (from.x, from.y, to.x, to.y);

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    // Working space is transposed for steep lines; undo that on emission.
    let mut plot = |x: i64, y: i64, coverage: f64| {
        if steep {
            sink.plot(y, x, coverage, color);
        } else {
            sink.plot(x, y, coverage, color);
        }
    };

    // First endpoint
    let x_end = round(x0);
    let y_end = y0 + gradient * (x_end - x0);
    let x_gap = rfpart(x0 + 0.5);
    let x_pixel1 = x_end as i64;
    let y_pixel1 = y_end.floor() as i64;
    plot(x_pixel1, y_pixel1, rfpart(y_end) * x_gap);
    plot(x_pixel1, y_pixel1.saturating_add(1), fpart(y_end) * x_gap);

    let mut intersection = y_end + gradient;

    // Second endpoint
    let x_end = round(x1);
    let y_end = y1 + gradient * (x_end - x1);
    let x_gap = fpart(x1 + 0.5);
    let x_pixel2 = x_end as i64;
    let y_pixel2 = y_end.floor() as i64;
    plot(x_pixel2, y_pixel2, rfpart(y_end) * x_gap);
    plot(x_pixel2, y_pixel2.saturating_add(1), fpart(y_end) * x_gap);

    for x in x_pixel1.saturating_add(1)..x_pixel2 {
        let y = intersection.floor() as i64;
        plot(x, y, rfpart(intersection));
        plot(x, y.saturating_add(1), fpart(intersection));
        intersection += gradient;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Plot> {
        let mut plots = Vec::new();
        draw_line(&mut plots, Vector2::new(x0, y0), Vector2::new(x1, y1), Rgb::WHITE);
        plots
    }

    #[test]
    fn test_shallow_line_emission_count() {
        let plots = line(0.0, 0.0, 3.0, 1.0);
        // Two per endpoint column (0 and 3) plus two for each of columns 1 and 2.
        assert_eq!(plots.len(), 4 + 2 * 2);
        let mut columns: Vec<i64> = plots.iter().map(|p| p.x).collect();
        columns.dedup();
        assert_eq!(columns, vec![0, 3, 1, 2]);
    }

    #[test]
    fn test_horizontal_line_full_coverage_on_row() {
        let plots = line(0.0, 5.0, 10.0, 5.0);
        for p in &plots[4..] {
            if p.y == 5 {
                assert!((p.coverage - 1.0).abs() < 1e-12);
            } else {
                assert_eq!(p.y, 6);
                assert!(p.coverage.abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_steep_line_is_transposed_back() {
        let plots = line(2.0, 0.0, 3.0, 10.0);
        // Columns in working space are rows on screen.
        let rows: Vec<i64> = plots[4..].iter().step_by(2).map(|p| p.y).collect();
        assert_eq!(rows, (1..10).collect::<Vec<_>>());
        for p in &plots {
            assert!((2..=4).contains(&p.x), "x = {}", p.x);
        }
    }

    #[test]
    fn test_direction_does_not_matter() {
        let forward = line(1.2, 3.7, 17.9, 9.1);
        let backward = line(17.9, 9.1, 1.2, 3.7);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_interior_coverage_sums_to_one() {
        let plots = line(0.3, 0.6, 40.8, 13.2);
        for pair in plots[4..].chunks(2) {
            assert_eq!(pair[0].x, pair[1].x);
            assert_eq!(pair[0].y + 1, pair[1].y);
            assert!((pair[0].coverage + pair[1].coverage - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_non_finite_emits_nothing() {
        assert!(line(f64::INFINITY, 0.0, 1.0, 1.0).is_empty());
        assert!(line(0.0, f64::NEG_INFINITY, 1.0, 1.0).is_empty());
        assert!(line(0.0, 0.0, f64::NAN, 1.0).is_empty());
        assert!(line(0.0, 0.0, 1.0, f64::NAN).is_empty());
    }

    #[test]
    fn test_single_point_uses_unit_gradient_fallback() {
        let plots = line(4.0, 4.0, 4.0, 4.0);
        assert_eq!(plots.len(), 4);
        assert!(plots.iter().all(|p| p.coverage.is_finite()));
    }

    #[test]
    fn test_huge_finite_coordinates_saturate() {
        let plots = line(0.0, 1e19, 1.0, 1e19);
        assert_eq!(plots.len(), 4);
        assert!(plots.iter().all(|p| p.y == i64::MAX));

        let plots = line(1e19, 0.0, 1e19, 1.0);
        assert_eq!(plots.len(), 4);
        assert!(plots.iter().all(|p| p.x == i64::MAX));
    }

    #[test]
    fn test_color_is_passed_through() {
        let mut plots = Vec::new();
        draw_line(&mut plots, Vector2::new(0.0, 0.0), Vector2::new(5.0, 2.0), Rgb::AZURE);
        assert!(plots.iter().all(|p| p.color == Rgb::AZURE));
    }

    #[test]
    fn test_coverage_in_unit_range() {
        let plots = line(-3.4, 7.25, 12.6, -8.9);
        assert!(plots.iter().all(|p| (0.0..=1.0).contains(&p.coverage)));
    }
}
