//! Application state and logic.

use crate::data::ScoreSeries;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The loaded score series.
    pub series: ScoreSeries,
    /// Generation index under the plot cursor.
    pub cursor: usize,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance around a loaded series.
    pub fn new(series: ScoreSeries) -> Self {
        let status = if series.is_empty() {
            format!("{} is empty", series.file_name())
        } else {
            format!("{} generations loaded", series.len())
        };

        Self {
            series,
            cursor: 0,
            status,
            theme: Theme::GruvboxDark,
        }
    }

    /// Last valid cursor position, 0 for an empty series.
    fn last_generation(&self) -> usize {
        self.series.len().saturating_sub(1)
    }

    /// Move the cursor towards generation 0.
    pub fn cursor_left(&mut self, step: usize) {
        self.cursor = self.cursor.saturating_sub(step);
    }

    /// Move the cursor towards the last generation.
    pub fn cursor_right(&mut self, step: usize) {
        self.cursor = (self.cursor + step).min(self.last_generation());
    }

    /// Jump the cursor to generation 0.
    pub fn goto_first(&mut self) {
        self.cursor = 0;
    }

    /// Jump the cursor to the last generation.
    pub fn goto_last(&mut self) {
        self.cursor = self.last_generation();
    }

    /// Score under the cursor.
    pub fn cursor_score(&self) -> Option<i64> {
        self.series.get(self.cursor)
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }
}
