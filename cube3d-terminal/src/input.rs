/// Keyboard mapping from terminal key events to scene commands
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use cube3d_core::{Command, Direction};

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Directional input, interpreted by the scene's current mode
    Steer(Direction),
    Apply(Command),
    Quit,
}

/// Map a key event to an action.
///
/// Releases and repeats reported by some terminals are ignored so one
/// physical press yields one command.
pub fn map_key(event: KeyEvent) -> Option<Action> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match event.code {
        KeyCode::Left => Action::Steer(Direction::Left),
        KeyCode::Right => Action::Steer(Direction::Right),
        KeyCode::Up => Action::Steer(Direction::Up),
        KeyCode::Down => Action::Steer(Direction::Down),
        KeyCode::Char('+') | KeyCode::Char('=') => Action::Steer(Direction::Forward),
        KeyCode::Char('-') | KeyCode::Char('_') => Action::Steer(Direction::Backward),
        KeyCode::Char(' ') => Action::Apply(Command::RecenterCamera),
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Apply(Command::ToggleMode),
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}
