/// Camera and perspective projection
use crate::geometry::{Cube2D, Cube3D};
use crate::vector::{Vector2, Vector3};

/// View-plane vector of the pinhole model: the image plane sits at unit
/// distance along +z, which gives a 90 degree field of view.
const VIEW_PLANE: Vector3 = Vector3::new(0.0, 0.0, 1.0);

/// A camera fixed to look along +z with no rotation; only its position moves
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub position: Vector3,
}

impl Camera {
    pub fn new(position: Vector3) -> Self {
        Self { position }
    }

    /// Move the camera onto the cube's centroid, then back along -z by the
    /// cube depth plus `margin`
    pub fn recenter_on(&mut self, cube: &Cube3D, margin: f64) {
        let mut position = cube.center();
        position.z -= cube.depth() + margin;
        log::debug!("Camera recentred at {position}");
        self.position = position;
    }

    /// Project a single world-space point.
    ///
    /// A point on the camera's depth plane (`d.z == 0`) projects to a
    /// non-finite coordinate; that is propagated, not reported.
    pub fn project_point(&self, point: Vector3, screen_width: f64, screen_height: f64) -> Vector2 {
        let d = point.sub(self.position);

        let bx = (VIEW_PLANE.z / d.z) * d.x - VIEW_PLANE.x;
        let by = (VIEW_PLANE.z / d.z) * d.y - VIEW_PLANE.y;

        Vector2::new(
            map_range(bx, -1.0, 1.0, 0.0, screen_width),
            map_range(by, -1.0, 1.0, 0.0, screen_height),
        )
    }

    /// Project all 8 vertices of `cube` onto a `screen_width` x `screen_height` screen
    pub fn project(&self, cube: &Cube3D, screen_width: f64, screen_height: f64) -> Cube2D {
        Cube2D::new(
            cube.points
                .map(|p| self.project_point(p, screen_width, screen_height)),
        )
    }
}

/// Perspective-project `cube` as seen from `camera`
pub fn project(cube: &Cube3D, camera: Vector3, screen_width: f64, screen_height: f64) -> Cube2D {
    Camera::new(camera).project(cube, screen_width, screen_height)
}

/// Linearly map `value` from `[from_min, from_max]` to `[to_min, to_max]`
pub fn map_range(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    (value - from_min) / (from_max - from_min) * (to_max - to_min) + to_min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(-1.0, -1.0, 1.0, 0.0, 400.0), 0.0);
        assert_eq!(map_range(0.0, -1.0, 1.0, 0.0, 400.0), 200.0);
        assert_eq!(map_range(1.0, -1.0, 1.0, 0.0, 400.0), 400.0);
        assert_eq!(map_range(2.0, -1.0, 1.0, 0.0, 400.0), 600.0);
    }

    #[test]
    fn test_point_on_optical_axis_hits_screen_center() {
        let camera = Camera::new(Vector3::new(1.0, 2.0, -3.0));
        let p = camera.project_point(Vector3::new(1.0, 2.0, 10.0), 400.0, 300.0);
        assert_eq!(p, Vector2::new(200.0, 150.0));
    }

    #[test]
    fn test_ninety_degree_field_of_view() {
        // A point at 45 degrees off-axis lands on the screen edge.
        let camera = Camera::default();
        let p = camera.project_point(Vector3::new(4.0, -4.0, 4.0), 400.0, 400.0);
        assert!((p.x - 400.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
    }

    #[test]
    fn test_depth_plane_projects_non_finite() {
        let camera = Camera::new(Vector3::new(0.0, 0.0, 5.0));
        let p = camera.project_point(Vector3::new(1.0, 1.0, 5.0), 400.0, 400.0);
        assert!(!p.is_finite());
    }

    #[test]
    fn test_recenter_on_reference_cube() {
        let cube = Cube3D::from_corner(Vector3::new(0.0, 0.0, 5.0), 5.0);
        let mut camera = Camera::default();
        camera.recenter_on(&cube, 5.0);
        assert_eq!(camera.position, Vector3::new(2.5, 2.5, -2.5));
    }
}
