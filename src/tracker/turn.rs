use super::{Detector, Snapshot};
use crate::config::LEFT_TURN_TIMEOUT_TICKS;
use crate::input::Direction;

/// Fires once a requested left turn is actually taken.
///
/// A left key press arms the detector; if the snake has not turned left
/// within [`LEFT_TURN_TIMEOUT_TICKS`] ticks it disarms and waits for the next
/// attempt.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct LeftTurnDetector {
    armed: bool,
    ticks_since_request: u32,
}

impl Detector for LeftTurnDetector {
    fn observe(&mut self, snapshot: &Snapshot<'_>) -> bool {
        if !self.armed {
            return false;
        }
        self.ticks_since_request += 1;
        if snapshot.snake.direction() == Direction::Left {
            return true;
        }
        if self.ticks_since_request > LEFT_TURN_TIMEOUT_TICKS {
            self.armed = false;
        }
        false
    }

    fn on_direction_request(&mut self, direction: Direction) {
        if direction == Direction::Left {
            self.armed = true;
            self.ticks_since_request = 0;
        }
    }
}
