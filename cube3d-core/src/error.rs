/// Error types for geometric operations
use thiserror::Error;

use crate::transform::Axis;

/// Geometry preconditions that were violated
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum GeometryError {
    /// The two face centroids selected by `axis` coincide (or are not finite),
    /// so there is no rotation axis to turn about.
    #[error("degenerate rotation axis {axis:?}: face centroids do not define a direction")]
    DegenerateAxis { axis: Axis },
}
