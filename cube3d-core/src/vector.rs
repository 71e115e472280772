/// 2D and 3D vector values used throughout the core
use std::fmt;

/// A point or offset on the screen plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({}, {})", self.x, self.y)
    }
}

/// A point or direction in world space; `z` is depth
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn div(self, divisor: f64) -> Self {
        Self::new(self.x / divisor, self.y / divisor, self.z / divisor)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean norm, computed with nested `hypot` to avoid intermediate overflow
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Unit vector in the same direction.
    ///
    /// Returns `None` when the magnitude is zero or not finite; a zero vector
    /// has no direction and callers must decide how to fail.
    pub fn unit_vector(self) -> Option<Self> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return None;
        }
        Some(self.div(magnitude))
    }

    pub fn distance(self, other: Self) -> f64 {
        self.sub(other).magnitude()
    }

    /// Arithmetic mean of a set of points, `ZERO` for an empty slice
    pub fn mean(points: &[Self]) -> Self {
        if points.is_empty() {
            return Self::ZERO;
        }
        points
            .iter()
            .fold(Self::ZERO, |sum, p| sum.add(*p))
            .div(points.len() as f64)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<f64>> for Vector3 {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Vector3> for nalgebra::Point3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Point3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_product_right_handed() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_cross_matches_nalgebra() {
        let a = Vector3::new(1.5, -2.0, 0.25);
        let b = Vector3::new(-3.0, 0.5, 4.0);
        let na: nalgebra::Vector3<f64> = a.into();
        let nb: nalgebra::Vector3<f64> = b.into();
        let expected = Vector3::from(na.cross(&nb));
        assert!(a.cross(b).sub(expected).magnitude() < 1e-12);
    }

    #[test]
    fn test_dot_and_magnitude() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_eq!(v.dot(v), 49.0);
        assert!((v.magnitude() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_magnitude_does_not_overflow() {
        let v = Vector3::new(1e300, 1e300, 0.0);
        assert!(v.magnitude().is_finite());
    }

    #[test]
    fn test_unit_vector() {
        let u = Vector3::new(0.0, 0.0, 5.0).unit_vector().unwrap();
        assert_eq!(u, Vector3::new(0.0, 0.0, 1.0));

        let u = Vector3::new(1.0, 2.0, -2.0).unit_vector().unwrap();
        assert!((u.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_vector_of_zero_is_none() {
        assert!(Vector3::ZERO.unit_vector().is_none());
        assert!(Vector3::new(f64::NAN, 0.0, 0.0).unit_vector().is_none());
    }

    #[test]
    fn test_scale_div_add_sub() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, 0.5, 0.5);
        assert_eq!(a.add(b), Vector3::new(1.5, 2.5, 3.5));
        assert_eq!(a.sub(b), Vector3::new(0.5, 1.5, 2.5));
        assert_eq!(a.scale(2.0), Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a.div(2.0), Vector3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_mean() {
        let points = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(2.0, 4.0, 0.0),
            Vector3::new(0.0, 4.0, 8.0),
        ];
        assert_eq!(Vector3::mean(&points), Vector3::new(1.0, 2.0, 2.0));
        assert_eq!(Vector3::mean(&[]), Vector3::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1.0, 2.5, -3.0).to_string(), "Vector3(1, 2.5, -3)");
        assert_eq!(Vector2::new(0.5, 4.0).to_string(), "Vector2(0.5, 4)");
    }
}
