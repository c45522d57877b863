use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// High-level input events produced by the keyboard layer.
///
/// The game session consumes `Direction`, `Pause` and `Restart`; the
/// remaining events are handled by the loop shell (display and audio).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Restart,
    ToggleGrid,
    VolumeUp,
    VolumeDown,
    Quit,
}

/// Polls the terminal for up to `timeout` and maps the next key press to a
/// [`GameInput`]. Returns `Ok(None)` on timeout or unmapped events.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(map_key_event(key)),
        _ => Ok(None),
    }
}

/// Maps a single key event to a [`GameInput`].
///
/// Key releases are ignored (Windows terminals report them alongside
/// presses); repeats pass through so held arrow keys keep steering.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(GameInput::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(GameInput::Direction(Direction::Up)),
            's' => Some(GameInput::Direction(Direction::Down)),
            'a' => Some(GameInput::Direction(Direction::Left)),
            'd' => Some(GameInput::Direction(Direction::Right)),
            ' ' => Some(GameInput::Pause),
            'r' => Some(GameInput::Restart),
            'g' => Some(GameInput::ToggleGrid),
            '+' | '=' => Some(GameInput::VolumeUp),
            '-' => Some(GameInput::VolumeDown),
            'q' => Some(GameInput::Quit),
            _ => None,
        },
        _ => None,
    }
}
