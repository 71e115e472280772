/// Cube3D Terminal - interactive wireframe cube
///
/// Controls:
///   - Arrow keys: move the cube in X/Y (translate mode) or turn it about Y/X (rotate mode)
///   - + / -: move the cube away from / toward the camera, or roll it about Z
///   - Space: recentre the camera on the cube
///   - R: switch between translate and rotate mode
///   - Q/ESC: Quit
use cube3d_terminal::{logging, AppConfig, AppError, TerminalApp};

fn main() -> Result<(), AppError> {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    logging::init(&config.debug)?;
    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Cube3D terminal renderer");

    let scene = config.build_scene()?;
    log::info!(
        "Cube centred at {}, camera at {}",
        scene.cube.center(),
        scene.camera.position
    );

    let mut app = TerminalApp::new(scene)?;
    app.run()?;

    log::info!("Shutting down");
    Ok(())
}
