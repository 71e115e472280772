//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (optional, user overrides)
//! 3. Environment variables (`CUBE3D_SECTION__KEY`)

use cube3d_core::{Camera, Cube3D, Scene, SceneSettings, Vector3};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Initial cube placement
    #[serde(default)]
    pub cube: CubeConfig,
    /// Initial camera placement
    #[serde(default)]
    pub camera: CameraConfig,
    /// Step sizes for keyboard commands
    #[serde(default)]
    pub controls: ControlsConfig,
    /// Logging
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from the `config` directory under the working directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // CUBE3D_CONTROLS__TRANSLATE_STEP=0.5 -> controls.translate_step = 0.5
        figment = figment.merge(Env::prefixed("CUBE3D_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the cube or the controls degenerate
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cube.size.is_finite() && self.cube.size > 0.0) {
            return Err(ConfigError::invalid(format!(
                "cube.size must be a positive number, got {}",
                self.cube.size
            )));
        }
        let finite = [
            ("controls.translate_step", self.controls.translate_step),
            ("controls.rotate_step_degrees", self.controls.rotate_step_degrees),
            ("controls.camera_margin", self.controls.camera_margin),
            ("controls.min_camera_distance", self.controls.min_camera_distance),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::invalid(format!("{name} must be finite, got {value}")));
            }
        }
        Ok(())
    }

    pub fn to_scene_settings(&self) -> SceneSettings {
        SceneSettings {
            translate_step: self.controls.translate_step,
            rotate_step_degrees: self.controls.rotate_step_degrees,
            camera_margin: self.controls.camera_margin,
            min_camera_distance: self.controls.min_camera_distance,
        }
    }

    /// Build the start-up scene described by this configuration
    pub fn build_scene(&self) -> Result<Scene, ConfigError> {
        self.validate()?;
        let [x, y, z] = self.cube.origin;
        let cube = Cube3D::from_corner(Vector3::new(x, y, z), self.cube.size);
        let [cx, cy, cz] = self.camera.start_position;
        let camera = Camera::new(Vector3::new(cx, cy, cz));
        Ok(Scene::new(cube, camera, self.to_scene_settings()))
    }
}

/// Cube configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    /// Front-bottom-left corner [x, y, z]
    pub origin: [f64; 3],
    /// Edge length
    pub size: f64,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            origin: [0.0, 0.0, 5.0],
            size: 5.0,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting position [x, y, z]
    pub start_position: [f64; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: [2.5, 2.5, -2.5],
        }
    }
}

/// Controls configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// World units per translate key press
    pub translate_step: f64,
    /// Degrees per rotate key press
    pub rotate_step_degrees: f64,
    /// Standoff added behind the cube when recentring the camera
    pub camera_margin: f64,
    /// Closest a vertex may be moved toward the camera
    pub min_camera_distance: f64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        let settings = SceneSettings::default();
        Self {
            translate_step: settings.translate_step,
            rotate_step_degrees: settings.rotate_step_degrees,
            camera_margin: settings.camera_margin,
            min_camera_distance: settings.min_camera_distance,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` takes precedence
    pub log_level: String,
    /// File receiving log output while the terminal is in raw mode
    pub log_file: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: "cube3d.log".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, Error)]
#[error("Configuration error: {message}")]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: String) -> Self {
        Self { message }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}
