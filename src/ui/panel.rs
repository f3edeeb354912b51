use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::{COLOR_HIGHLIGHT, COLOR_PANEL_BG, COLOR_STAGE, COLOR_TEXT, COLOR_WIN};
use crate::game::GameState;

const CONTROLS: [&str; 5] = [
    "Arrows/WASD  move",
    "P            pause",
    "Space        retry",
    "R            reset progress",
    "Esc/Q        quit",
];

/// Draws the side panel: stage, live game values, the stage hint and the
/// control legend.
pub fn render_panel(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    let block = Block::default()
        .padding(Padding::horizontal(1))
        .style(Style::new().bg(COLOR_PANEL_BG).fg(COLOR_TEXT));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let stage = state.stage();
    let stage_color = if stage.is_complete() {
        COLOR_WIN
    } else {
        COLOR_STAGE
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "=== BUG QUEST ===",
            Style::new().fg(COLOR_HIGHLIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Stage: {stage}"),
            Style::new().fg(stage_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Score: {}", state.score)),
        Line::from(format!("Dir: {}", state.snake.direction())),
        Line::from(format!("Head: {}", state.snake.head())),
        Line::from(format!("Food: {}", state.food.position())),
        Line::from(format!("Length: {}", state.snake.len())),
        Line::from(format!("Growth: {}", state.snake.pending_growth())),
        Line::from(format!("Speed: {} tps", state.tick_rate)),
        Line::from(""),
    ];

    let hint_style = Style::new().fg(COLOR_STAGE);
    lines.extend(
        wrap_hint(stage.hint(), usize::from(inner.width))
            .into_iter()
            .map(|line| Line::from(Span::styled(line, hint_style))),
    );

    lines.push(Line::from(""));
    lines.extend(CONTROLS.iter().map(|control| Line::from(*control)));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Greedy word wrap by display width. Words wider than `width` get a line of
/// their own.
pub fn wrap_hint(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
