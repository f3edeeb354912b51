use super::{Detector, Snapshot};
use crate::config::{BOUNDARY_MARGIN_ROWS, BOUNDARY_MIN_VISITS, BOUNDARY_SUSTAIN_TICKS};

/// Watches the bottom wall: the snake must come close to it on separate
/// occasions without ever being seen past it.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct BoundaryDetector {
    wall_visits: u32,
    in_margin: bool,
    contained_ticks: u32,
}

impl Detector for BoundaryDetector {
    fn observe(&mut self, snapshot: &Snapshot<'_>) -> bool {
        let rows = i32::from(snapshot.bounds.height);
        let row = snapshot.snake.head().y;

        if row >= rows {
            tracing::debug!(row, "head escaped through the bottom wall");
            self.contained_ticks = 0;
            self.in_margin = false;
            return false;
        }

        let near_wall = row >= rows - BOUNDARY_MARGIN_ROWS;
        if near_wall && !self.in_margin {
            self.wall_visits += 1;
        }
        self.in_margin = near_wall;
        self.contained_ticks += 1;
        self.wall_visits >= BOUNDARY_MIN_VISITS && self.contained_ticks >= BOUNDARY_SUSTAIN_TICKS
    }
}

#[cfg(test)]
mod tests {
    use super::BoundaryDetector;
    use crate::config::{BOUNDARY_SUSTAIN_TICKS, DEFAULT_GRID};
    use crate::defects::Defects;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};
    use crate::tracker::Detector;
    use crate::tracker::test_support::snapshot;

    fn at_row(detector: &mut BoundaryDetector, row: i32) -> bool {
        let snake = Snake::new(Position::new(5, row), Direction::Right, 1, Defects::none());
        detector.observe(&snapshot(&snake, Position::new(0, 0), 0))
    }

    #[test]
    fn needs_two_separate_visits_and_containment() {
        let bottom = i32::from(DEFAULT_GRID.height) - 1;
        let mut detector = BoundaryDetector::default();

        assert!(!at_row(&mut detector, bottom));
        assert!(!at_row(&mut detector, 5));
        assert!(!at_row(&mut detector, bottom));
        for _ in 3..BOUNDARY_SUSTAIN_TICKS - 1 {
            assert!(!at_row(&mut detector, 5));
        }
        assert!(at_row(&mut detector, 5));
    }

    #[test]
    fn one_long_stay_near_the_wall_is_one_visit() {
        let bottom = i32::from(DEFAULT_GRID.height) - 1;
        let mut detector = BoundaryDetector::default();

        for _ in 0..BOUNDARY_SUSTAIN_TICKS * 3 {
            assert!(!at_row(&mut detector, bottom));
        }
        for _ in 0..BOUNDARY_SUSTAIN_TICKS * 3 {
            assert!(!at_row(&mut detector, 5));
        }
    }

    #[test]
    fn never_near_the_wall_never_fires() {
        let mut detector = BoundaryDetector::default();
        for _ in 0..BOUNDARY_SUSTAIN_TICKS * 3 {
            assert!(!at_row(&mut detector, 5));
        }
    }

    #[test]
    fn escaping_resets_containment() {
        let rows = i32::from(DEFAULT_GRID.height);
        let mut detector = BoundaryDetector::default();

        for _ in 0..BOUNDARY_SUSTAIN_TICKS - 1 {
            assert!(!at_row(&mut detector, rows - 1));
        }
        assert!(!at_row(&mut detector, rows + 1));
        assert!(!at_row(&mut detector, rows - 1));
        for _ in 2..BOUNDARY_SUSTAIN_TICKS {
            assert!(!at_row(&mut detector, 5));
        }
        assert!(at_row(&mut detector, 5));
    }
}
