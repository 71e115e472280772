//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use cube3d_terminal::config::AppConfig;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;

fn workspace_config_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../config")
}

fn scratch_config_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cube3d-config-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let config = AppConfig::load_from(workspace_config_dir()).unwrap();
    let builtin = AppConfig::default();
    assert_eq!(config.cube.origin, builtin.cube.origin);
    assert_eq!(config.cube.size, builtin.cube.size);
    assert_eq!(config.camera.start_position, builtin.camera.start_position);
    assert_eq!(config.controls.translate_step, builtin.controls.translate_step);
    assert_eq!(config.debug.log_level, builtin.debug.log_level);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("CUBE3D_CONTROLS__TRANSLATE_STEP", "0.75");
    let config = AppConfig::load_from(workspace_config_dir());
    std::env::remove_var("CUBE3D_CONTROLS__TRANSLATE_STEP");

    let config = config.unwrap();
    assert_eq!(config.controls.translate_step, 0.75);
    assert_eq!(config.controls.rotate_step_degrees, 2.5);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = scratch_config_dir("user");
    fs::write(dir.join("default.toml"), "[cube]\nsize = 5.0\n").unwrap();
    fs::write(
        dir.join("user.toml"),
        "[cube]\nsize = 2.0\n\n[camera]\nstart_position = [1.0, 1.0, -8.0]\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.cube.size, 2.0);
    assert_eq!(config.camera.start_position, [1.0, 1.0, -8.0]);

    let scene = config.build_scene().unwrap();
    assert_eq!(scene.cube.depth(), 2.0);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let dir = std::env::temp_dir().join("cube3d-config-does-not-exist");
    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.cube.size, 5.0);
}

#[test]
#[serial]
fn test_invalid_values_are_reported() {
    let dir = scratch_config_dir("invalid");
    fs::write(dir.join("user.toml"), "[cube]\nsize = -1.0\n").unwrap();
    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().contains("cube.size"));

    fs::write(dir.join("user.toml"), "[controls]\ntranslate_step = \"fast\"\n").unwrap();
    assert!(AppConfig::load_from(&dir).is_err());

    fs::remove_dir_all(&dir).unwrap();
}
