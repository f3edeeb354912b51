use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::{COLOR_GAME_OVER, COLOR_PANEL_BG, COLOR_TEXT, COLOR_WIN};
use crate::snake::Collision;

/// Draws the pause popup over the play field.
pub fn render_pause(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("P to resume"),
    ];
    render_popup(frame, area, " pause ", COLOR_TEXT, lines);
}

/// Draws the game-over popup with the score and cause of death.
pub fn render_game_over(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<Collision>,
) {
    let lines = vec![
        Line::from("GAME OVER").style(Style::new().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(match death_reason {
            Some(Collision::Wall) => "Cause: hit wall",
            Some(Collision::Body) => "Cause: hit yourself",
            None => "Board full",
        }),
        Line::from(""),
        Line::from("SPACE to retry"),
    ];
    render_popup(frame, area, " game over ", COLOR_GAME_OVER, lines);
}

/// Draws the completion popup shown once every stage is fixed.
pub fn render_all_fixed(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from("ALL BUGS FIXED!").style(Style::new().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("R = reset | Esc = exit"),
    ];
    render_popup(frame, area, " done ", COLOR_WIN, lines);
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &str, accent: Color, lines: Vec<Line<'_>>) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(accent).bg(COLOR_PANEL_BG))
            .block(Block::bordered().title(title)),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
