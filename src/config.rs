use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

/// Grid used by the shipped game.
pub const DEFAULT_GRID: GridSize = GridSize {
    width: 24,
    height: 20,
};

/// Terminal columns used to draw one grid cell.
pub const CELL_COLUMNS: u16 = 2;

/// Width of the side panel in terminal columns.
pub const PANEL_WIDTH: u16 = 30;

/// Body length of a freshly spawned snake.
pub const INITIAL_LENGTH: usize = 3;

/// Cells of growth granted per food.
pub const GROWTH_PER_FOOD: u32 = 1;

/// Cells of growth granted per food while the growth defect is active.
pub const OVERFLOW_GROWTH_PER_FOOD: u32 = 3;

/// Starting speed in ticks per second.
pub const INITIAL_SPEED: u32 = 6;

/// Speed gained per ramp step.
pub const SPEED_INCREMENT: u32 = 1;

/// Score needed per ramp step.
pub const SPEED_SCORE_INTERVAL: u32 = 5;

/// Maximum speed in ticks per second.
pub const SPEED_CAP: u32 = 14;

/// Pixel size of one cell in the scaled food-hit defect. Larger than either
/// grid axis, so only the origin cell maps back onto the grid.
pub const PIXELS_PER_CELL: i32 = 25;

/// Seed used for food placement unless overridden on the command line.
pub const DEFAULT_SEED: u64 = 42;

/// Frame clock for input polling and redraws.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Frames between periodic state log lines.
pub const STATE_LOG_INTERVAL_FRAMES: u64 = 40;

// Detector thresholds.

/// Ticks a left request stays armed before the turn detector gives up.
pub const LEFT_TURN_TIMEOUT_TICKS: u32 = 8;

/// Ticks to wait after eating before judging growth.
pub const GROWTH_WATCH_TICKS: u32 = 8;

/// Consecutive clean spawns required by the safe-spawn detector.
pub const SAFE_SPAWN_STREAK: u32 = 3;

/// Score the player must reach before speed compliance counts.
pub const SPEED_MIN_SCORE: u32 = 8;

/// Ticks the speed must stay under the cap.
pub const SPEED_SUSTAIN_TICKS: u32 = 60;

/// Rows above the bottom wall that count as "near" it.
pub const BOUNDARY_MARGIN_ROWS: i32 = 3;

/// Near-wall ticks required by the boundary detector.
pub const BOUNDARY_MIN_VISITS: u32 = 2;

/// Ticks without escaping the grid required by the boundary detector.
pub const BOUNDARY_SUSTAIN_TICKS: u32 = 40;

/// Body length the snake must exceed before self-collision checks count.
pub const SELF_COLLISION_MIN_LENGTH: usize = 5;

/// Clean ticks required by the self-collision detector.
pub const SELF_COLLISION_SUSTAIN_TICKS: u32 = 80;

// Palette.

pub const COLOR_FIELD_BG: Color = Color::Rgb(15, 15, 26);
pub const COLOR_BORDER: Color = Color::Rgb(30, 30, 45);
pub const COLOR_SNAKE_HEAD: Color = Color::Rgb(0, 255, 120);
pub const COLOR_SNAKE_BODY: Color = Color::Rgb(0, 220, 80);
pub const COLOR_FOOD: Color = Color::Rgb(255, 60, 60);
pub const COLOR_PANEL_BG: Color = Color::Rgb(22, 22, 38);
pub const COLOR_TEXT: Color = Color::Rgb(200, 200, 220);
pub const COLOR_HIGHLIGHT: Color = Color::Rgb(80, 200, 255);
pub const COLOR_STAGE: Color = Color::Rgb(255, 200, 60);
pub const COLOR_GAME_OVER: Color = Color::Rgb(255, 70, 70);
pub const COLOR_WIN: Color = Color::Rgb(80, 255, 120);

/// Glyph pair for one snake body cell.
pub const GLYPH_SNAKE_BODY: &str = "██";

/// Glyph pair for the food pellet.
pub const GLYPH_FOOD: &str = "◖◗";

pub const GLYPH_SNAKE_HEAD_UP: &str = "▲▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀█";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "█▶";
