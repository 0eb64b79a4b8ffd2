//! User interface rendering.

mod chart;
mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use formatters::format_number;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout: header, chart, status bar, key map bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, chunks[0], app, &colors);
    chart::draw_chart(f, chunks[1], app, &colors);
    status_bar::draw_status(f, chunks[2], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[3], &colors);
}

fn draw_header(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            app.series.file_name(),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({} generations)", format_number(app.series.len())),
            Style::default().fg(colors.muted),
        ),
    ])];

    if let (Some(best), Some(best_gen), Some(final_score), Some(mean)) = (
        app.series.best_score(),
        app.series.best_generation(),
        app.series.final_score(),
        app.series.mean_score(),
    ) {
        lines.push(Line::from(vec![
            Span::styled("Best: ", Style::default().fg(colors.label)),
            Span::styled(
                format!("{} @ gen {}", best, best_gen),
                Style::default().fg(colors.value),
            ),
            Span::styled("   Final: ", Style::default().fg(colors.label)),
            Span::styled(final_score.to_string(), Style::default().fg(colors.value)),
            Span::styled("   Mean: ", Style::default().fg(colors.label)),
            Span::styled(format!("{:.2}", mean), Style::default().fg(colors.value)),
        ]));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(paragraph, area);
}
