/// Interactive scene state: the cube, the camera and the command set that drives them
use crate::error::GeometryError;
use crate::geometry::{Cube2D, Cube3D};
use crate::projection::Camera;
use crate::raster::PixelSink;
use crate::render::draw_cube;
use crate::transform::Axis;
use crate::vector::Vector3;

/// How directional input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Translate,
    Rotate,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Translate => Mode::Rotate,
            Mode::Rotate => Mode::Translate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn apply(self, magnitude: f64) -> f64 {
        match self {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        }
    }
}

/// Directional input, independent of the current mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    /// Away from the camera
    Forward,
    /// Toward the camera
    Backward,
}

/// A discrete operation on the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Translate(Axis, Sign),
    Rotate(Axis, Sign),
    RecenterCamera,
    ToggleMode,
}

impl Command {
    /// Map a direction onto a translate or rotate command for `mode`
    pub fn from_direction(direction: Direction, mode: Mode) -> Self {
        use Direction::*;
        use Sign::*;

        match mode {
            Mode::Translate => match direction {
                Left => Command::Translate(Axis::X, Negative),
                Right => Command::Translate(Axis::X, Positive),
                Up => Command::Translate(Axis::Y, Negative),
                Down => Command::Translate(Axis::Y, Positive),
                Forward => Command::Translate(Axis::Z, Positive),
                Backward => Command::Translate(Axis::Z, Negative),
            },
            Mode::Rotate => match direction {
                Left => Command::Rotate(Axis::Y, Negative),
                Right => Command::Rotate(Axis::Y, Positive),
                Up => Command::Rotate(Axis::X, Positive),
                Down => Command::Rotate(Axis::X, Negative),
                Forward => Command::Rotate(Axis::Z, Positive),
                Backward => Command::Rotate(Axis::Z, Negative),
            },
        }
    }
}

/// Step sizes and limits applied by [`Scene::apply`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSettings {
    /// World units per translate command
    pub translate_step: f64,
    /// Degrees per rotate command
    pub rotate_step_degrees: f64,
    /// Extra standoff behind the cube when the camera is recentred
    pub camera_margin: f64,
    /// Translating toward the camera stops once a vertex is this close
    pub min_camera_distance: f64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            translate_step: 0.25,
            rotate_step_degrees: 2.5,
            camera_margin: 5.0,
            min_camera_distance: 0.5,
        }
    }
}

/// Everything the command loop owns
#[derive(Debug, Clone)]
pub struct Scene {
    pub cube: Cube3D,
    pub camera: Camera,
    pub mode: Mode,
    pub settings: SceneSettings,
}

impl Scene {
    pub fn new(cube: Cube3D, camera: Camera, settings: SceneSettings) -> Self {
        Self {
            cube,
            camera,
            mode: Mode::default(),
            settings,
        }
    }

    /// The start-up scene: a 5-unit cube spanning z = 5..10, viewed from
    /// (2.5, 2.5, -2.5)
    pub fn reference() -> Self {
        Self::new(
            Cube3D::from_corner(Vector3::new(0.0, 0.0, 5.0), 5.0),
            Camera::new(Vector3::new(2.5, 2.5, -2.5)),
            SceneSettings::default(),
        )
    }

    /// Interpret a direction under the current mode and apply it
    pub fn steer(&mut self, direction: Direction) -> Result<(), GeometryError> {
        self.apply(Command::from_direction(direction, self.mode))
    }

    pub fn apply(&mut self, command: Command) -> Result<(), GeometryError> {
        match command {
            Command::Translate(axis, sign) => {
                if axis == Axis::Z && sign == Sign::Negative && !self.may_approach_camera() {
                    log::debug!("Cube is at the camera, ignoring {command:?}");
                    return Ok(());
                }
                let distance = axis.unit().scale(sign.apply(self.settings.translate_step));
                self.cube.translate(distance);
            }
            Command::Rotate(axis, sign) => {
                self.cube
                    .rotate_about(axis, sign.apply(self.settings.rotate_step_degrees))?;
            }
            Command::RecenterCamera => {
                self.camera.recenter_on(&self.cube, self.settings.camera_margin);
            }
            Command::ToggleMode => {
                self.mode = self.mode.toggled();
                log::info!("Switched to {:?} mode", self.mode);
            }
        }
        Ok(())
    }

    fn may_approach_camera(&self) -> bool {
        self.cube.min_distance_to(self.camera.position) > self.settings.min_camera_distance
    }

    pub fn project(&self, screen_width: f64, screen_height: f64) -> Cube2D {
        self.camera.project(&self.cube, screen_width, screen_height)
    }

    /// Project the cube and draw one frame into `sink`
    pub fn render<S: PixelSink + ?Sized>(
        &self,
        sink: &mut S,
        screen_width: f64,
        screen_height: f64,
    ) {
        draw_cube(&self.project(screen_width, screen_height), sink);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::reference()
    }
}
