/// Rotation of points about arbitrary lines in space
use crate::vector::Vector3;

/// Principal axis selector for cube rotations.
///
/// Only ever used one at a time; it picks the pair of opposite faces whose
/// centroids define the pivot line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Vertex indices of the two faces perpendicular to this axis, in the
    /// fixed cube topology (0-3 front, 4-7 back, `i` joined to `i + 4`)
    pub fn opposite_faces(self) -> ([usize; 4], [usize; 4]) {
        match self {
            Axis::X => ([0, 3, 4, 7], [1, 2, 5, 6]),
            Axis::Y => ([0, 1, 4, 5], [2, 3, 6, 7]),
            Axis::Z => ([0, 1, 2, 3], [4, 5, 6, 7]),
        }
    }

    /// World-space unit vector along this axis
    pub fn unit(self) -> Vector3 {
        match self {
            Axis::X => Vector3::new(1.0, 0.0, 0.0),
            Axis::Y => Vector3::new(0.0, 1.0, 0.0),
            Axis::Z => Vector3::new(0.0, 0.0, 1.0),
        }
    }
}

/// Rotate `p` by `theta` radians about the line through `q` with unit
/// direction `d`, right-handed about `d`.
///
/// Point-line form of Rodrigues' rotation: for `p = (x, y, z)`,
/// `q = (a, b, c)` and `d = (u, v, w)`. `d` must already be normalised.
pub fn rotate_about_line(p: Vector3, q: Vector3, d: Vector3, theta: f64) -> Vector3 {
    let (x, y, z) = (p.x, p.y, p.z);
    let (a, b, c) = (q.x, q.y, q.z);
    let (u, v, w) = (d.x, d.y, d.z);

    let along = u * x + v * y + w * z;
    let (sin, cos) = theta.sin_cos();
    let one_minus_cos = 1.0 - cos;

    Vector3::new(
        (a * (v * v + w * w) - u * (b * v + c * w - along)) * one_minus_cos
            + x * cos
            + (-c * v + b * w - w * y + v * z) * sin,
        (b * (u * u + w * w) - v * (a * u + c * w - along)) * one_minus_cos
            + y * cos
            + (c * u - a * w + w * x - u * z) * sin,
        (c * (u * u + v * v) - w * (a * u + b * v - along)) * one_minus_cos
            + z * cos
            + (-b * u + a * v - v * x + u * y) * sin,
    )
}

/// Perpendicular distance from `p` to the line through `q` with unit direction `d`
pub fn distance_to_line(p: Vector3, q: Vector3, d: Vector3) -> f64 {
    p.sub(q).cross(d).magnitude()
}
