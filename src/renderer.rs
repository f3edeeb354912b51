use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    CELL_COLUMNS, COLOR_BORDER, COLOR_FIELD_BG, COLOR_FOOD, COLOR_SNAKE_BODY, COLOR_SNAKE_HEAD,
    GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GridSize, PANEL_WIDTH,
};
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::overlay::{render_all_fixed, render_game_over, render_pause};
use crate::ui::panel::render_panel;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let bounds = state.bounds();
    let [field_area, panel_area] = Layout::horizontal([
        Constraint::Length(bounds.width * CELL_COLUMNS + 2),
        Constraint::Length(PANEL_WIDTH),
    ])
    .areas(frame.area());
    let [field_area] = Layout::vertical([Constraint::Length(bounds.height + 2)]).areas(field_area);

    let block = Block::bordered()
        .border_style(Style::new().fg(COLOR_BORDER))
        .style(Style::new().bg(COLOR_FIELD_BG));
    let inner = block.inner(field_area);
    frame.render_widget(block, field_area);

    render_food(frame, inner, state);
    render_snake(frame, inner, state);
    render_panel(frame, panel_area, state);

    match state.status {
        GameStatus::Paused => render_pause(frame, field_area),
        GameStatus::GameOver | GameStatus::BoardFull => {
            render_game_over(frame, field_area, state.score, state.death_reason);
        }
        GameStatus::AllFixed => render_all_fixed(frame, field_area),
        GameStatus::Playing => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.food.position()) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(COLOR_FOOD));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let head = state.snake.head();
    let head_style = Style::new()
        .fg(COLOR_SNAKE_HEAD)
        .add_modifier(Modifier::BOLD);
    let body_style = Style::new().fg(COLOR_SNAKE_BODY);

    let buffer = frame.buffer_mut();
    // Tail first so the head wins when cells overlap.
    let segments: Vec<Position> = state.snake.cells();
    for segment in segments.iter().rev() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(x, y, head_glyph(state.snake.direction()), head_style);
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, body_style);
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Maps a grid cell to the terminal cell of its left glyph column. Cells
/// outside the grid or the drawable area map to `None`.
fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use super::{logical_to_terminal, render};
    use crate::config::{DEFAULT_GRID, GridSize};
    use crate::defects::Defects;
    use crate::game::GameState;
    use crate::snake::Position;
    use crate::stage::Stage;

    #[test]
    fn cells_are_two_columns_wide() {
        let inner = Rect::new(1, 1, 48, 20);
        assert_eq!(
            logical_to_terminal(inner, DEFAULT_GRID, Position::new(0, 0)),
            Some((1, 1))
        );
        assert_eq!(
            logical_to_terminal(inner, DEFAULT_GRID, Position::new(23, 19)),
            Some((47, 20))
        );
    }

    #[test]
    fn cells_outside_the_grid_are_not_drawn() {
        let inner = Rect::new(1, 1, 48, 20);
        assert_eq!(
            logical_to_terminal(inner, DEFAULT_GRID, Position::new(5, 21)),
            None
        );
        assert_eq!(
            logical_to_terminal(inner, DEFAULT_GRID, Position::new(-1, 3)),
            None
        );
    }

    #[test]
    fn clipped_area_hides_cells_that_do_not_fit() {
        let bounds = GridSize {
            width: 10,
            height: 10,
        };
        let inner = Rect::new(0, 0, 5, 3);
        assert_eq!(logical_to_terminal(inner, bounds, Position::new(1, 1)), Some((2, 1)));
        assert_eq!(logical_to_terminal(inner, bounds, Position::new(2, 1)), None);
        assert_eq!(logical_to_terminal(inner, bounds, Position::new(0, 3)), None);
    }

    #[test]
    fn frame_shows_stage_and_snake_head() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        let state = GameState::new(DEFAULT_GRID, Stage::FIRST, Defects::seeded(), 7);

        terminal
            .draw(|frame| render(frame, &state))
            .expect("draw should succeed");

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("BUG QUEST"));
        assert!(text.contains("Stage: 1/7"));
        assert!(text.contains('▶'));
    }
}
