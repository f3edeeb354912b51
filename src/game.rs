use crate::config::{
    GROWTH_PER_FOOD, GridSize, INITIAL_LENGTH, INITIAL_SPEED, OVERFLOW_GROWTH_PER_FOOD,
    PIXELS_PER_CELL, SPEED_CAP, SPEED_INCREMENT, SPEED_SCORE_INTERVAL, STATE_LOG_INTERVAL_FRAMES,
};
use crate::defects::{Defect, Defects};
use crate::food::Food;
use crate::input::{Direction, GameInput};
use crate::snake::{Collision, Position, Snake};
use crate::stage::Stage;
use crate::tracker::{BugTracker, Snapshot};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
    /// The snake fills the grid; there is nowhere left to put food.
    BoardFull,
    /// Every stage has been fixed.
    AllFixed,
}

/// Complete mutable state for one episode, plus the stage it is played at.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    /// Speed in ticks per second.
    pub tick_rate: u32,
    pub frame: u64,
    pub status: GameStatus,
    pub death_reason: Option<Collision>,
    stage: Stage,
    tracker: BugTracker,
    defects: Defects,
    bounds: GridSize,
    seed: u64,
}

impl GameState {
    /// Starts an episode at `stage` with a food generator seeded by `seed`.
    #[must_use]
    pub fn new(bounds: GridSize, stage: Stage, defects: Defects, seed: u64) -> Self {
        let head = Position::new(i32::from(bounds.width / 2), i32::from(bounds.height / 2));
        let snake = Snake::new(head, Direction::Right, INITIAL_LENGTH, defects);
        let mut food = Food::new(seed, defects);
        food.spawn(bounds, &snake.cells());

        Self {
            snake,
            food,
            score: 0,
            tick_rate: INITIAL_SPEED,
            frame: 0,
            status: if stage.is_complete() {
                GameStatus::AllFixed
            } else {
                GameStatus::Playing
            },
            death_reason: None,
            stage,
            tracker: BugTracker::new(stage),
            defects,
            bounds,
            seed,
        }
    }

    /// Starts a new episode at the current stage. Detector progress is lost.
    pub fn restart(&mut self) {
        *self = Self::new(self.bounds, self.stage, self.defects, self.seed);
    }

    /// Drops back to stage one and starts a new episode.
    pub fn reset_progress(&mut self) {
        tracing::info!("progress reset to stage 1");
        self.stage = Stage::FIRST;
        self.restart();
    }

    /// Advances simulation by one tick. Returns true when the stage advanced
    /// during this tick.
    pub fn tick(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }

        self.frame += 1;
        if let Err(collision) = self.snake.step(self.bounds) {
            tracing::info!(?collision, score = self.score, "game over");
            self.death_reason = Some(collision);
            self.status = GameStatus::GameOver;
            return false;
        }

        self.check_food();
        self.update_speed();

        let snapshot = Snapshot {
            snake: &self.snake,
            food: self.food.position(),
            score: self.score,
            tick_rate: self.tick_rate,
            bounds: self.bounds,
        };
        let advanced = self.tracker.tick(&snapshot);
        if advanced {
            self.advance_stage();
        }

        if self.frame % STATE_LOG_INTERVAL_FRAMES == 0 {
            tracing::debug!(
                direction = %self.snake.direction(),
                head = %self.snake.head(),
                food = %self.food.position(),
                length = self.snake.len(),
                pending_growth = self.snake.pending_growth(),
                tick_rate = self.tick_rate,
                score = self.score,
                stage = self.stage.number(),
                "state"
            );
        }
        advanced
    }

    /// Applies one input event that does not replace the episode.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Playing {
                    self.snake.queue_direction(direction);
                    self.tracker.notify_directional_request(direction);
                }
            }
            GameInput::Pause => {
                self.status = match self.status {
                    GameStatus::Playing => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Playing,
                    other => other,
                };
            }
            GameInput::Restart | GameInput::ResetProgress | GameInput::Quit => {}
        }
    }

    fn check_food(&mut self) {
        if !self.head_reaches_food() {
            return;
        }

        self.score += 1;
        self.snake.grow(if self.defects.is_active(Defect::GrowthOverflow) {
            OVERFLOW_GROWTH_PER_FOOD
        } else {
            GROWTH_PER_FOOD
        });

        let occupied = self.snake.cells();
        if !self.food.spawn(self.bounds, &occupied) {
            tracing::info!(score = self.score, "board is full");
            self.status = GameStatus::BoardFull;
            return;
        }
        self.tracker
            .notify_food_spawned(self.food.position(), &occupied);
        tracing::info!(score = self.score, food = %self.food.position(), "ate food");
    }

    fn head_reaches_food(&self) -> bool {
        let head = self.snake.head();
        let head = if self.defects.is_active(Defect::FoodHitScaled) {
            // Pixel coordinates of the cell, not its grid coordinates.
            Position::new(head.x * PIXELS_PER_CELL, head.y * PIXELS_PER_CELL)
        } else {
            head
        };
        head == self.food.position()
    }

    fn update_speed(&mut self) {
        self.tick_rate = if self.defects.is_active(Defect::SpeedUncapped) {
            let frames = u32::try_from(self.frame).unwrap_or(u32::MAX);
            INITIAL_SPEED.saturating_add(frames.saturating_mul(SPEED_INCREMENT))
        } else {
            let steps = self.score / SPEED_SCORE_INTERVAL;
            (INITIAL_SPEED + steps * SPEED_INCREMENT).min(SPEED_CAP)
        };
    }

    fn advance_stage(&mut self) {
        self.stage = self.stage.next();
        if self.stage.is_complete() {
            tracing::info!("all bugs fixed");
            self.status = GameStatus::AllFixed;
        } else {
            tracing::info!(stage = self.stage.number(), "advanced to next stage");
        }
        self.tracker = BugTracker::new(self.stage);
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn defects(&self) -> Defects {
        self.defects
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}
