//! Score chart rendering.

use super::formatters::format_axis_label;
use super::ThemeColors;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Axis title for the generation axis.
const X_AXIS_TITLE: &str = "nth generation";
/// Axis title for the score axis.
const Y_AXIS_TITLE: &str = "average score of best chromosome";

/// Draw the score-versus-generation line chart.
pub(super) fn draw_chart(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    if app.series.is_empty() {
        let para = Paragraph::new("No data to display")
            .style(Style::default().fg(colors.text).bg(colors.bg))
            .alignment(Alignment::Center);
        f.render_widget(para, area);
        return;
    }

    let points = app.series.points();

    // Y bounds with a 15% margin to avoid edge clipping. A flat series
    // still needs a nonzero span.
    let min_val = app.series.min_score().unwrap_or(0) as f64;
    let max_val = app.series.best_score().unwrap_or(0) as f64;
    let mut padding = (max_val - min_val).abs() * 0.15;
    if padding == 0.0 {
        padding = 1.0;
    }
    let (y_min, y_max) = (min_val - padding, max_val + padding);

    // X bounds cover the whole run; a single generation still needs a
    // nonzero span.
    let x_min = 0.0;
    let x_max = (app.series.len() as f64 - 1.0).max(1.0);

    // Downsample to roughly one point per column.
    let mut series: Vec<(f64, f64)> = points;
    if area.width > 4 {
        let bins = (area.width as usize).saturating_sub(8).max(1);
        if series.len() > bins {
            let step = (series.len() as f64) / (bins as f64);
            let mut simple = Vec::with_capacity(bins);
            let mut pos = 0.0;
            while (pos as usize) < series.len() {
                let idx = (pos as usize).min(series.len() - 1);
                simple.push(series[idx]);
                pos += step;
            }
            series = simple;
        }
    }

    let mut datasets = vec![Dataset::default()
        .name(app.series.file_name())
        .marker(ratatui::symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(colors.line))
        .data(&series)];

    // Cursor as a vertical line at the inspected generation.
    let cursor_line = vec![
        (app.cursor as f64, y_min),
        (app.cursor as f64, y_max),
    ];
    datasets.push(
        Dataset::default()
            .name("cursor")
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.cursor))
            .data(&cursor_line),
    );

    let x_labels = vec![
        format_axis_label(x_min),
        format_axis_label((x_min + x_max) / 2.0),
        format_axis_label(x_max),
    ];
    let x_axis = Axis::default()
        .title(X_AXIS_TITLE)
        .style(Style::default().fg(colors.text))
        .bounds([x_min, x_max])
        .labels(x_labels);

    let y_labels = vec![
        format_axis_label(y_min),
        format_axis_label((y_min + y_max) / 2.0),
        format_axis_label(y_max),
    ];
    let y_axis = Axis::default()
        .title(Y_AXIS_TITLE)
        .style(Style::default().fg(colors.text))
        .bounds([y_min, y_max])
        .labels(y_labels);

    // Cursor readout indexes the full-resolution series, not the
    // downsampled one.
    let readout = match app.cursor_score() {
        Some(score) => format!(" gen {}: {} ", app.cursor, score),
        None => String::new(),
    };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg))
                .title(readout)
                .title_style(Style::default().fg(colors.heading)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}
