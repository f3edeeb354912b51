use std::fmt;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
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

    /// Returns the unit vector `(dx, dy)`; rows grow downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Restart,
    ResetProgress,
    Quit,
}

impl GameInput {
    /// Maps a key press to a game input.
    #[must_use]
    pub fn from_key_event(ev: KeyEvent) -> Option<Self> {
        if ev.kind != KeyEventKind::Press {
            return None;
        }
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Self::Quit),
            (_, KeyCode::Esc | KeyCode::Char('q' | 'Q')) => Some(Self::Quit),
            (_, KeyCode::Up | KeyCode::Char('w' | 'W')) => Some(Self::Direction(Direction::Up)),
            (_, KeyCode::Down | KeyCode::Char('s' | 'S')) => {
                Some(Self::Direction(Direction::Down))
            }
            (_, KeyCode::Left | KeyCode::Char('a' | 'A')) => {
                Some(Self::Direction(Direction::Left))
            }
            (_, KeyCode::Right | KeyCode::Char('d' | 'D')) => {
                Some(Self::Direction(Direction::Right))
            }
            (_, KeyCode::Char('p' | 'P')) => Some(Self::Pause),
            (_, KeyCode::Char(' ')) => Some(Self::Restart),
            (_, KeyCode::Char('r' | 'R')) => Some(Self::ResetProgress),
            _ => None,
        }
    }
}

/// Polls the terminal for key presses without blocking the frame clock.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for one input event.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(GameInput::from_key_event(key)),
            _ => Ok(None),
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use rstest::rstest;

    use super::{Direction, GameInput, direction_change_is_valid};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn opposite_deltas_cancel_out() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = direction.delta();
            let (ox, oy) = direction.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn reversals_are_invalid() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(
            Direction::Right,
            Direction::Left
        ));
        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Right, Direction::Up));
    }

    #[rstest]
    #[case(KeyCode::Left, Some(GameInput::Direction(Direction::Left)))]
    #[case(KeyCode::Char('w'), Some(GameInput::Direction(Direction::Up)))]
    #[case(KeyCode::Char('p'), Some(GameInput::Pause))]
    #[case(KeyCode::Char(' '), Some(GameInput::Restart))]
    #[case(KeyCode::Char('r'), Some(GameInput::ResetProgress))]
    #[case(KeyCode::Esc, Some(GameInput::Quit))]
    #[case(KeyCode::Char('x'), None)]
    fn key_mapping(#[case] code: KeyCode, #[case] expected: Option<GameInput>) {
        assert_eq!(GameInput::from_key_event(KeyEvent::from(code)), expected);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(GameInput::from_key_event(ev), Some(GameInput::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let ev = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(GameInput::from_key_event(ev), None);
    }
}
