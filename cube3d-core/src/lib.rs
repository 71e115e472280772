/// Cube3D Core Library - geometry, projection and rasterization for a wireframe cube
///
/// This library holds everything that does not touch a terminal or window:
/// vector algebra, the cube model and its rotations, perspective projection,
/// Wu's antialiased line rasterizer and the frame renderer that ties them together.
pub mod error;
pub mod geometry;
pub mod projection;
pub mod raster;
pub mod render;
pub mod scene;
pub mod transform;
pub mod vector;

// Re-export commonly used types
pub use error::GeometryError;
pub use geometry::{Cube2D, Cube3D, EdgeKind, EDGES};
pub use projection::{project, Camera};
pub use raster::{draw_line, PixelSink, Plot, Rgb};
pub use render::draw_cube;
pub use scene::{Command, Direction, Mode, Scene, SceneSettings, Sign};
pub use transform::Axis;
pub use vector::{Vector2, Vector3};
