use super::{Detector, Snapshot};
use crate::config::GROWTH_WATCH_TICKS;
use crate::snake::Position;

/// Fires on the first tick where the score went up *and* the food moved.
///
/// Either signal alone is not enough: a counter bump with the pellet still in
/// place means the food was never consumed.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct FoodEatenDetector {
    prev_score: u32,
    prev_food: Option<Position>,
}

impl Detector for FoodEatenDetector {
    fn observe(&mut self, snapshot: &Snapshot<'_>) -> bool {
        if snapshot.score > self.prev_score && Some(snapshot.food) != self.prev_food {
            return true;
        }
        self.prev_score = snapshot.score;
        self.prev_food = Some(snapshot.food);
        false
    }
}

/// Fires once a meal settles into exactly one extra cell.
///
/// Each new meal (score above the high-water mark) snapshots the body length
/// and opens a watch window of [`GROWTH_WATCH_TICKS`]. When it closes, growth
/// of at most one cell means fixed; anything more drops the snapshot and the
/// detector waits for the next meal.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct GrowthDetector {
    score_high_water: u32,
    length_at_meal: Option<usize>,
    watched_ticks: u32,
}

impl Detector for GrowthDetector {
    fn observe(&mut self, snapshot: &Snapshot<'_>) -> bool {
        let length = snapshot.snake.len();

        if snapshot.score > self.score_high_water {
            self.score_high_water = snapshot.score;
            self.length_at_meal = Some(length);
            self.watched_ticks = 0;
            return false;
        }

        let Some(length_at_meal) = self.length_at_meal else {
            return false;
        };
        self.watched_ticks += 1;
        if self.watched_ticks <= GROWTH_WATCH_TICKS {
            return false;
        }
        let grew_by = length.saturating_sub(length_at_meal);
        if grew_by <= 1 {
            return true;
        }
        tracing::debug!(grew_by, "meal overgrew the snake; waiting for the next one");
        self.length_at_meal = None;
        false
    }
}
