/// Frame rendering: sequences the 12 cube edges through the line rasterizer
use crate::geometry::{Cube2D, EdgeKind};
use crate::raster::{draw_line, PixelSink, Rgb};

/// Colour of an edge, picked by its group and, for connecting edges, by the
/// front-face vertex it starts from
pub fn edge_color(start: usize, kind: EdgeKind) -> Rgb {
    match kind {
        EdgeKind::Connecting if start < 2 => Rgb::YELLOW,
        EdgeKind::Connecting => Rgb::AZURE,
        EdgeKind::Front => Rgb::RED,
        EdgeKind::Back => Rgb::GREEN,
    }
}

/// Draw every edge of a projected cube.
///
/// Edges with a non-finite endpoint are skipped by the rasterizer.
pub fn draw_cube<S: PixelSink + ?Sized>(cube: &Cube2D, sink: &mut S) {
    for (start, from, to, kind) in cube.edges() {
        draw_line(sink, from, to, edge_color(start, kind));
    }
}
