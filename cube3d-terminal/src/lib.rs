/// Terminal front end for the wireframe cube
use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use cube3d_core::Scene;
use std::io::{stdout, Write};

pub mod canvas;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;

pub use canvas::Canvas;
pub use config::AppConfig;
pub use error::AppError;
pub use input::{map_key, Action};

/// Rows reserved above the canvas for the status line
const STATUS_ROWS: u16 = 1;

/// Square pixel viewport placed inside the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Side length in pixels
    pub side: usize,
    /// Terminal column of the left edge
    pub left: u16,
    /// Terminal row of the top edge
    pub top: u16,
}

impl Viewport {
    /// Largest square that fits under the status line, two pixels per cell
    /// vertically, centred horizontally
    pub fn fit(columns: u16, rows: u16) -> Self {
        let usable_rows = rows.saturating_sub(STATUS_ROWS) as usize;
        let side = (columns as usize).min(usable_rows * 2);
        let left = ((columns as usize - side) / 2) as u16;
        Self {
            side,
            left,
            top: STATUS_ROWS,
        }
    }
}

/// Main application struct for terminal rendering
pub struct TerminalApp {
    scene: Scene,
    canvas: Canvas,
    viewport: Viewport,
    running: bool,
}

impl TerminalApp {
    pub fn new(scene: Scene) -> Result<Self, AppError> {
        let (columns, rows) = terminal::size()?;
        let viewport = Viewport::fit(columns, rows);

        Ok(Self {
            scene,
            canvas: Canvas::new(viewport.side, viewport.side),
            viewport,
            running: true,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    /// One render per applied command; blocks between events
    fn main_loop(&mut self) -> Result<(), AppError> {
        self.render()?;

        while self.running {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = map_key(key) {
                        self.handle(action)?;
                        if self.running {
                            self.render()?;
                        }
                    }
                }
                Event::Resize(columns, rows) => {
                    self.resize(columns, rows);
                    self.render()?;
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Apply a single action to the scene
    pub fn handle(&mut self, action: Action) -> Result<(), AppError> {
        log::debug!("{action:?}");
        match action {
            Action::Quit => self.running = false,
            Action::Steer(direction) => self.scene.steer(direction)?,
            Action::Apply(command) => self.scene.apply(command)?,
        }
        Ok(())
    }

    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.viewport = Viewport::fit(columns, rows);
        self.canvas.resize(self.viewport.side, self.viewport.side);
        log::info!("Viewport resized to {} pixels", self.viewport.side);
    }

    /// Clear the canvas and rasterize the current scene into it
    pub fn draw_frame(&mut self) {
        self.canvas.clear();
        let side = self.viewport.side as f64;
        self.scene.render(&mut self.canvas, side, side);
    }

    fn render(&mut self) -> Result<(), AppError> {
        self.draw_frame();

        let mut stdout = stdout();
        queue!(stdout, terminal::Clear(ClearType::All))?;
        self.canvas
            .draw(&mut stdout, self.viewport.left, self.viewport.top)?;

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Cube3D | Mode: {:?} | Camera: {} | Arrows/+/-=Move Space=Recenter R=Mode Q=Quit",
                self.scene.mode, self.scene.camera.position
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
