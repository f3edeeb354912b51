//! Per-stage fix detection.
//!
//! Each stage owns one [`Detector`]: a small state machine that samples the
//! game once per tick (plus a couple of edge-triggered notifications) and
//! decides, over a confirmation window, whether that stage's bug is gone.
//! Detectors only read the game; their counters are private and are thrown
//! away whenever the stage changes or the episode restarts.

mod boundary;
mod collision;
mod eating;
mod speed;
mod spawn;
mod turn;

use enum_dispatch::enum_dispatch;

pub use self::boundary::BoundaryDetector;
pub use self::collision::SelfCollisionDetector;
pub use self::eating::{FoodEatenDetector, GrowthDetector};
pub use self::spawn::SafeSpawnDetector;
pub use self::speed::SpeedBoundDetector;
pub use self::turn::LeftTurnDetector;

use crate::config::GridSize;
use crate::defects::Defect;
use crate::input::Direction;
use crate::snake::{Position, Snake};
use crate::stage::Stage;

/// Read-only view of the game handed to the active detector each tick.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub snake: &'a Snake,
    pub food: Position,
    pub score: u32,
    /// Current speed in ticks per second.
    pub tick_rate: u32,
    pub bounds: GridSize,
}

/// The capability shared by all stage detectors.
#[enum_dispatch]
pub trait Detector {
    /// Samples one tick. Returns true once the stage's bug is judged fixed.
    fn observe(&mut self, snapshot: &Snapshot<'_>) -> bool;

    /// A directional key was pressed.
    fn on_direction_request(&mut self, _direction: Direction) {}

    /// Food was just respawned after being eaten.
    fn on_food_spawned(&mut self, _food: Position, _occupied: &[Position]) {}
}

/// Detector that never fires; used past the last stage.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct InertDetector;

impl Detector for InertDetector {
    fn observe(&mut self, _snapshot: &Snapshot<'_>) -> bool {
        false
    }
}

/// One detector instance per stage, dispatched statically.
#[enum_dispatch(Detector)]
#[derive(Debug, Clone)]
pub enum StageDetector {
    LeftTurn(LeftTurnDetector),
    FoodEaten(FoodEatenDetector),
    Growth(GrowthDetector),
    SafeSpawn(SafeSpawnDetector),
    SpeedBound(SpeedBoundDetector),
    Boundary(BoundaryDetector),
    SelfCollision(SelfCollisionDetector),
    Inert(InertDetector),
}

impl StageDetector {
    /// Builds a fresh detector for `stage`.
    #[must_use]
    pub fn for_stage(stage: Stage) -> Self {
        match stage.defect() {
            Some(Defect::LeftTurnBlocked) => LeftTurnDetector::default().into(),
            Some(Defect::FoodHitScaled) => FoodEatenDetector::default().into(),
            Some(Defect::GrowthOverflow) => GrowthDetector::default().into(),
            Some(Defect::SpawnIgnoresBody) => SafeSpawnDetector::default().into(),
            Some(Defect::SpeedUncapped) => SpeedBoundDetector::default().into(),
            Some(Defect::VerticalBoundByWidth) => BoundaryDetector::default().into(),
            Some(Defect::CollisionByDuplicates) => SelfCollisionDetector::default().into(),
            None => InertDetector.into(),
        }
    }
}

/// Routes ticks and notifications to the detector of the current stage.
#[derive(Debug, Clone)]
pub struct BugTracker {
    stage: Stage,
    detector: StageDetector,
}

impl BugTracker {
    #[must_use]
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            detector: StageDetector::for_stage(stage),
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Samples one tick. Returns true if the current stage was just fixed.
    pub fn tick(&mut self, snapshot: &Snapshot<'_>) -> bool {
        let fixed = self.detector.observe(snapshot);
        if fixed {
            tracing::info!(
                stage = self.stage.number(),
                defect = ?self.stage.defect(),
                "stage fixed"
            );
        }
        fixed
    }

    pub fn notify_directional_request(&mut self, direction: Direction) {
        self.detector.on_direction_request(direction);
    }

    pub fn notify_food_spawned(&mut self, food: Position, occupied: &[Position]) {
        self.detector.on_food_spawned(food, occupied);
    }
}
