use snake_bug_quest::config::DEFAULT_GRID;
use snake_bug_quest::defects::{Defect, Defects};
use snake_bug_quest::game::{GameState, GameStatus};
use snake_bug_quest::input::{Direction, GameInput};
use snake_bug_quest::progress;
use snake_bug_quest::snake::Position;
use snake_bug_quest::stage::Stage;

#[test]
fn corrected_game_clears_the_first_two_stages() {
    let mut state = GameState::new(DEFAULT_GRID, Stage::FIRST, Defects::none(), 42);

    state.apply_input(GameInput::Direction(Direction::Up));
    assert!(!state.tick());
    state.apply_input(GameInput::Direction(Direction::Left));
    assert!(state.tick());
    assert_eq!(state.stage(), Stage::clamped(2));

    let next = state.snake.head().step(Direction::Left);
    state.food.place(next);
    assert!(state.tick());
    assert_eq!(state.stage(), Stage::clamped(3));
    assert_eq!(state.status, GameStatus::Playing);
}

#[test]
fn scaled_food_hit_keeps_stage_two_open() {
    let defects = Defects::none().with(Defect::FoodHitScaled);
    let mut state = GameState::new(DEFAULT_GRID, Stage::clamped(2), defects, 42);

    let next = state.snake.head().step(Direction::Right);
    state.food.place(next);
    assert!(!state.tick());
    assert_eq!(state.score, 0);
    assert_eq!(state.stage(), Stage::clamped(2));
}

#[test]
fn advanced_stage_survives_a_save_and_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("progress.json");
    let mut state = GameState::new(DEFAULT_GRID, progress::load_stage(&path), Defects::none(), 42);
    assert_eq!(state.stage(), Stage::FIRST);

    state.apply_input(GameInput::Direction(Direction::Down));
    state.tick();
    state.apply_input(GameInput::Direction(Direction::Left));
    assert!(state.tick());
    progress::save_stage(&path, state.stage()).expect("save");

    assert_eq!(progress::load_stage(&path), Stage::clamped(2));

    progress::reset(&path).expect("reset");
    state.reset_progress();
    assert_eq!(progress::load_stage(&path), state.stage());
}

#[test]
fn head_position_after_left_turn_is_one_cell_left() {
    let mut state = GameState::new(DEFAULT_GRID, Stage::FIRST, Defects::none(), 42);
    state.apply_input(GameInput::Direction(Direction::Up));
    state.tick();
    state.apply_input(GameInput::Direction(Direction::Left));
    state.tick();
    assert_eq!(state.snake.head(), Position::new(11, 9));
}
