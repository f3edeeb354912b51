use super::{Detector, Snapshot};
use crate::config::{SELF_COLLISION_MIN_LENGTH, SELF_COLLISION_SUSTAIN_TICKS};

/// Fires after a long run of ticks with a long snake that never overlapped
/// itself.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SelfCollisionDetector {
    clean_ticks: u32,
}

impl Detector for SelfCollisionDetector {
    fn observe(&mut self, snapshot: &Snapshot<'_>) -> bool {
        if snapshot.snake.has_duplicate_cells() {
            tracing::debug!(head = %snapshot.snake.head(), "body overlaps itself");
            self.clean_ticks = 0;
            return false;
        }
        if snapshot.snake.len() > SELF_COLLISION_MIN_LENGTH {
            self.clean_ticks += 1;
        }
        self.clean_ticks >= SELF_COLLISION_SUSTAIN_TICKS
    }
}
