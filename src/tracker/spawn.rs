use super::{Detector, Snapshot};
use crate::config::SAFE_SPAWN_STREAK;
use crate::snake::Position;

/// Counts consecutive respawns that landed outside the snake.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SafeSpawnDetector {
    streak: u32,
}

impl Detector for SafeSpawnDetector {
    fn observe(&mut self, _snapshot: &Snapshot<'_>) -> bool {
        self.streak >= SAFE_SPAWN_STREAK
    }

    fn on_food_spawned(&mut self, food: Position, occupied: &[Position]) {
        if occupied.contains(&food) {
            tracing::debug!(%food, "food spawned inside the snake");
            self.streak = 0;
        } else {
            self.streak += 1;
        }
    }
}
