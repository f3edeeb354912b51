use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GridSize;
use crate::defects::{Defect, Defects};
use crate::snake::Position;

/// The single food pellet and the seeded generator that places it.
#[derive(Debug, Clone)]
pub struct Food<R = StdRng> {
    rng: R,
    position: Position,
    defects: Defects,
}

impl Food<StdRng> {
    /// Creates food driven by a deterministic generator seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64, defects: Defects) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), defects)
    }
}

impl<R: Rng> Food<R> {
    /// Creates food driven by an explicit generator. The pellet starts at the
    /// origin until the first [`Food::spawn`].
    #[must_use]
    pub fn with_rng(rng: R, defects: Defects) -> Self {
        Self {
            rng,
            position: Position::new(0, 0),
            defects,
        }
    }

    /// Moves the pellet to a random cell outside `occupied`.
    ///
    /// Returns `false` and leaves the pellet in place when every cell of the
    /// grid is occupied.
    pub fn spawn(&mut self, bounds: GridSize, occupied: &[Position]) -> bool {
        if self.defects.is_active(Defect::SpawnIgnoresBody) {
            self.position = self.sample(bounds);
            return true;
        }

        if !has_free_cell(bounds, occupied) {
            return false;
        }
        loop {
            let candidate = self.sample(bounds);
            if !occupied.contains(&candidate) {
                self.position = candidate;
                return true;
            }
        }
    }

    fn sample(&mut self, bounds: GridSize) -> Position {
        Position {
            x: self.rng.gen_range(0..i32::from(bounds.width)),
            y: self.rng.gen_range(0..i32::from(bounds.height)),
        }
    }
}

impl<R> Food<R> {
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Places the pellet directly, bypassing the generator.
    pub fn place(&mut self, position: Position) {
        self.position = position;
    }
}

fn has_free_cell(bounds: GridSize, occupied: &[Position]) -> bool {
    (0..i32::from(bounds.height)).any(|y| {
        (0..i32::from(bounds.width)).any(|x| !occupied.contains(&Position { x, y }))
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::Food;
    use crate::config::GridSize;
    use crate::defects::{Defect, Defects};
    use crate::snake::Position;

    const SMALL: GridSize = GridSize {
        width: 4,
        height: 3,
    };

    fn top_row() -> Vec<Position> {
        (0..4).map(|x| Position::new(x, 0)).collect()
    }

    #[test]
    fn food_spawn_never_overlaps_occupied() {
        let mut food = Food::new(7, Defects::none());
        let occupied = top_row();

        for _ in 0..200 {
            assert!(food.spawn(SMALL, &occupied));
            assert!(!occupied.contains(&food.position()));
            assert!(food.position().is_within_bounds(SMALL));
        }
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = Food::new(42, Defects::none());
        let mut b = Food::with_rng(StdRng::seed_from_u64(42), Defects::none());
        let occupied = top_row();

        for _ in 0..50 {
            a.spawn(SMALL, &occupied);
            b.spawn(SMALL, &occupied);
            assert_eq!(a.position(), b.position());
        }
    }

    #[test]
    fn full_grid_leaves_food_in_place() {
        let mut food = Food::new(1, Defects::none());
        food.place(Position::new(2, 2));
        let everything: Vec<_> = (0..3)
            .flat_map(|y| (0..4).map(move |x| Position::new(x, y)))
            .collect();

        assert!(!food.spawn(SMALL, &everything));
        assert_eq!(food.position(), Position::new(2, 2));
    }

    #[test]
    fn ignoring_body_defect_can_land_on_the_snake() {
        let mut food = Food::new(3, Defects::none().with(Defect::SpawnIgnoresBody));
        let occupied = top_row();

        let landed = (0..200).any(|_| {
            food.spawn(SMALL, &occupied);
            occupied.contains(&food.position())
        });
        assert!(landed, "a third of the grid is occupied; 200 raw samples should hit it");
    }
}
