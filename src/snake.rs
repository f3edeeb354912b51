use std::collections::{HashSet, VecDeque};
use std::fmt;

use crate::config::GridSize;
use crate::defects::{Defect, Defects};
use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates.
///
/// Signed so that a head pushed past a wall by a faulty bounds check is still
/// representable and observable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring position one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Why a step ended the episode.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    Body,
}

/// Mutable snake state: body, heading, queued heading and owed growth.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    queued_direction: Direction,
    pending_growth: u32,
    defects: Defects,
}

impl Snake {
    /// Creates a straight snake of `length` cells with its head at `head`,
    /// trailing away from `direction`.
    #[must_use]
    pub fn new(head: Position, direction: Direction, length: usize, defects: Defects) -> Self {
        let behind = direction.opposite();
        let body = std::iter::successors(Some(head), |p| Some(p.step(behind)))
            .take(length.max(1))
            .collect();

        Self {
            body,
            direction,
            queued_direction: direction,
            pending_growth: 0,
            defects,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[cfg(test)]
    pub(crate) fn from_segments(
        segments: Vec<Position>,
        direction: Direction,
        defects: Defects,
    ) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        Self {
            body: VecDeque::from(segments),
            direction,
            queued_direction: direction,
            pending_growth: 0,
            defects,
        }
    }

    /// Queues a heading for the next step.
    ///
    /// Reversals of the current heading are dropped silently.
    pub fn queue_direction(&mut self, direction: Direction) {
        if !direction_change_is_valid(self.direction, direction) {
            return;
        }
        if direction == Direction::Left && self.defects.is_active(Defect::LeftTurnBlocked) {
            return;
        }
        self.queued_direction = direction;
    }

    /// Owes the snake `cells` more segments, paid out one per step.
    pub fn grow(&mut self, cells: u32) {
        self.pending_growth = self.pending_growth.saturating_add(cells);
    }

    /// Advances one cell. Returns the collision that ended the episode, if any;
    /// the body is left untouched in that case.
    pub fn step(&mut self, bounds: GridSize) -> Result<(), Collision> {
        self.direction = self.queued_direction;
        let next = self.head().step(self.direction);

        let row_limit = if self.defects.is_active(Defect::VerticalBoundByWidth) {
            bounds.width
        } else {
            bounds.height
        };
        if next.x < 0
            || next.y < 0
            || next.x >= i32::from(bounds.width)
            || next.y >= i32::from(row_limit)
        {
            return Err(Collision::Wall);
        }

        let collided = if self.defects.is_active(Defect::CollisionByDuplicates) {
            self.has_duplicate_cells()
        } else {
            self.blocks(next)
        };
        if collided {
            return Err(Collision::Body);
        }

        self.body.push_front(next);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            let _ = self.body.pop_back();
        }
        Ok(())
    }

    /// Returns true if moving the head into `next` would hit the body. The
    /// tail only counts when it is not about to move out of the way.
    fn blocks(&self, next: Position) -> bool {
        let vacating = usize::from(self.pending_growth == 0);
        self.body
            .iter()
            .take(self.body.len() - vacating)
            .any(|&segment| segment == next)
    }

    /// Returns true if any two segments share a cell.
    #[must_use]
    pub fn has_duplicate_cells(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.body.len());
        !self.body.iter().all(|segment| seen.insert(*segment))
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the heading used by the most recent step.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the heading the next step will use.
    #[must_use]
    pub fn queued_direction(&self) -> Direction {
        self.queued_direction
    }

    /// Returns the cells still owed from past meals.
    #[must_use]
    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// Copies the body, head first.
    #[must_use]
    pub fn cells(&self) -> Vec<Position> {
        self.body.iter().copied().collect()
    }
}
