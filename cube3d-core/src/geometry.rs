/// Cube models in world space and on the screen plane
use crate::error::GeometryError;
use crate::transform::{rotate_about_line, Axis};
use crate::vector::{Vector2, Vector3};

/// Number of vertices in a cube
pub const VERTEX_COUNT: usize = 8;

/// Edge group, by the faces the edge belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Joins vertex `i` on the front face to `i + 4` on the back face
    Connecting,
    Front,
    Back,
}

/// The 12 edges of the fixed topology, as vertex index pairs.
///
/// Vertices 0-3 run counter-clockwise around the front face, 4-7 around the
/// back face, and vertex `i` is joined to `i + 4`.
pub const EDGES: [(usize, usize, EdgeKind); 12] = [
    (0, 4, EdgeKind::Connecting),
    (1, 5, EdgeKind::Connecting),
    (2, 6, EdgeKind::Connecting),
    (3, 7, EdgeKind::Connecting),
    (0, 1, EdgeKind::Front),
    (1, 2, EdgeKind::Front),
    (2, 3, EdgeKind::Front),
    (3, 0, EdgeKind::Front),
    (4, 5, EdgeKind::Back),
    (5, 6, EdgeKind::Back),
    (6, 7, EdgeKind::Back),
    (7, 4, EdgeKind::Back),
];

/// A rigid cube defined by its 8 corners in world space.
///
/// `points[0]` is the front-bottom-left corner and `points[1..4]` follow it
/// counter-clockwise; `points[4..8]` repeat that order on the back face.
/// The order is never changed by any operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube3D {
    pub points: [Vector3; VERTEX_COUNT],
}

impl Cube3D {
    pub fn new(points: [Vector3; VERTEX_COUNT]) -> Self {
        Self { points }
    }

    /// Unit cube with its front-bottom-left corner at the origin
    pub fn unit() -> Self {
        Self::from_corner(Vector3::ZERO, 1.0)
    }

    /// Axis-aligned cube with front face at `origin.z` and back face at
    /// `origin.z + size`
    pub fn from_corner(origin: Vector3, size: f64) -> Self {
        let Vector3 { x, y, z } = origin;
        let (x1, y1, z1) = (x + size, y + size, z + size);
        Self::new([
            Vector3::new(x, y, z),
            Vector3::new(x1, y, z),
            Vector3::new(x1, y1, z),
            Vector3::new(x, y1, z),
            Vector3::new(x, y, z1),
            Vector3::new(x1, y, z1),
            Vector3::new(x1, y1, z1),
            Vector3::new(x, y1, z1),
        ])
    }

    /// Centroid of all 8 vertices
    pub fn center(&self) -> Vector3 {
        Vector3::mean(&self.points)
    }

    /// Front-to-back extent along z, measured on the first connecting edge
    pub fn depth(&self) -> f64 {
        (self.points[0].z - self.points[4].z).abs()
    }

    pub fn translate(&mut self, distance: Vector3) {
        for p in &mut self.points {
            *p = p.add(distance);
        }
    }

    /// Centroid of the face made of the given vertex indices
    pub fn face_centroid(&self, face: [usize; 4]) -> Vector3 {
        Vector3::mean(&face.map(|i| self.points[i]))
    }

    /// The pivot line for `axis`: a point on it and its unit direction
    pub fn pivot_line(&self, axis: Axis) -> Result<(Vector3, Vector3), GeometryError> {
        let (first, second) = axis.opposite_faces();
        let start = self.face_centroid(first);
        let end = self.face_centroid(second);

        let direction = end
            .sub(start)
            .unit_vector()
            .ok_or(GeometryError::DegenerateAxis { axis })?;
        if !start.is_finite() {
            return Err(GeometryError::DegenerateAxis { axis });
        }
        Ok((start, direction))
    }

    /// Rotate the whole cube about the line joining the centroids of the two
    /// faces perpendicular to `axis`.
    ///
    /// On error the cube is left untouched.
    pub fn rotate_about(&mut self, axis: Axis, degrees: f64) -> Result<(), GeometryError> {
        let (pivot, direction) = self.pivot_line(axis)?;
        let theta = degrees.to_radians();

        for p in &mut self.points {
            *p = rotate_about_line(*p, pivot, direction, theta);
        }

        log::debug!(
            "Rotated cube {degrees} degrees about {axis:?} (pivot {pivot}, direction {direction})"
        );
        Ok(())
    }

    /// Smallest distance from any vertex to `point`
    pub fn min_distance_to(&self, point: Vector3) -> f64 {
        self.points
            .iter()
            .map(|p| p.distance(point))
            .fold(f64::INFINITY, f64::min)
    }
}

impl Default for Cube3D {
    fn default() -> Self {
        Self::unit()
    }
}

/// Screen-space image of a [`Cube3D`], in the same vertex order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube2D {
    pub points: [Vector2; VERTEX_COUNT],
}

impl Cube2D {
    pub fn new(points: [Vector2; VERTEX_COUNT]) -> Self {
        Self { points }
    }

    /// Every edge in topology order as (start index, start, end, group)
    pub fn edges(&self) -> impl Iterator<Item = (usize, Vector2, Vector2, EdgeKind)> + '_ {
        EDGES
            .iter()
            .map(move |&(a, b, kind)| (a, self.points[a], self.points[b], kind))
    }
}
