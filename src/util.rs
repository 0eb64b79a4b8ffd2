//! Utility functions for Evoplot.

use crate::data::ScoreSeries;
use crate::error::Result;
use arboard::Clipboard;

/// Copy a human-readable series summary to the clipboard.
pub fn copy_series_summary(series: &ScoreSeries) -> Result<()> {
    copy_to_clipboard(&series_summary(series))
}

/// Copy the raw score table to the clipboard, one `generation score` pair
/// per line.
pub fn copy_scores(series: &ScoreSeries) -> Result<()> {
    copy_to_clipboard(&scores_table(series))
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

fn series_summary(series: &ScoreSeries) -> String {
    let mut text = format!("Score log: {}\n", series.file_name());
    text.push_str(&format!("Generations: {}\n", series.len()));

    if let (Some(best), Some(best_gen)) = (series.best_score(), series.best_generation()) {
        text.push_str(&format!("Best score: {} (generation {})\n", best, best_gen));
    }
    if let Some(final_score) = series.final_score() {
        text.push_str(&format!("Final score: {}\n", final_score));
    }
    if let Some(mean) = series.mean_score() {
        text.push_str(&format!("Mean score: {:.2}\n", mean));
    }

    text
}

fn scores_table(series: &ScoreSeries) -> String {
    let mut text = String::new();
    for (generation, &score) in series.scores().iter().enumerate() {
        text.push_str(&format!("{} {}\n", generation, score));
    }
    text
}
