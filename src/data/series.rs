//! In-memory representation of a parsed score log.

use std::path::{Path, PathBuf};

/// An ordered series of per-generation scores.
///
/// Index i holds the score recorded for generation i; the series is built
/// once by the reader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSeries {
    path: PathBuf,
    scores: Vec<i64>,
}

impl ScoreSeries {
    /// Create a series from parsed scores.
    pub fn new(path: PathBuf, scores: Vec<i64>) -> Self {
        Self { path, scores }
    }

    /// Path of the score file this series was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name of the score file, for display.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Number of generations in the series.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the series holds no generations at all.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// All scores in generation order.
    pub fn scores(&self) -> &[i64] {
        &self.scores
    }

    /// Score of a single generation.
    pub fn get(&self, generation: usize) -> Option<i64> {
        self.scores.get(generation).copied()
    }

    /// Chart points `(generation, score)` in generation order.
    ///
    /// The x component is the index sequence 0..N-1, independent of the
    /// score values.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.scores
            .iter()
            .enumerate()
            .map(|(i, &score)| (i as f64, score as f64))
            .collect()
    }

    /// Lowest score in the series.
    pub fn min_score(&self) -> Option<i64> {
        self.scores.iter().copied().min()
    }

    /// Highest score in the series.
    pub fn best_score(&self) -> Option<i64> {
        self.scores.iter().copied().max()
    }

    /// First generation that reached the highest score.
    pub fn best_generation(&self) -> Option<usize> {
        let best = self.best_score()?;
        self.scores.iter().position(|&s| s == best)
    }

    /// Score of the last generation.
    pub fn final_score(&self) -> Option<i64> {
        self.scores.last().copied()
    }

    /// Mean score across all generations.
    pub fn mean_score(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        let sum: i64 = self.scores.iter().sum();
        Some(sum as f64 / self.scores.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(scores: &[i64]) -> ScoreSeries {
        ScoreSeries::new(PathBuf::from("output.txt"), scores.to_vec())
    }

    #[test]
    fn points_use_generation_index_for_x() {
        let s = series(&[10, 15, 9]);
        assert_eq!(s.points(), vec![(0.0, 10.0), (1.0, 15.0), (2.0, 9.0)]);
    }

    #[test]
    fn x_axis_is_independent_of_score_values() {
        let s = series(&[500, -3, 500, 0]);
        let xs: Vec<f64> = s.points().iter().map(|&(x, _)| x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn statistics() {
        let s = series(&[10, 15, 9, 15, 11]);
        assert_eq!(s.len(), 5);
        assert_eq!(s.min_score(), Some(9));
        assert_eq!(s.best_score(), Some(15));
        assert_eq!(s.best_generation(), Some(1));
        assert_eq!(s.final_score(), Some(11));
        assert_eq!(s.mean_score(), Some(12.0));
    }

    #[test]
    fn empty_series_has_no_statistics() {
        let s = series(&[]);
        assert!(s.is_empty());
        assert_eq!(s.best_score(), None);
        assert_eq!(s.best_generation(), None);
        assert_eq!(s.final_score(), None);
        assert_eq!(s.mean_score(), None);
        assert!(s.points().is_empty());
    }

    #[test]
    fn get_is_bounds_checked() {
        let s = series(&[7]);
        assert_eq!(s.get(0), Some(7));
        assert_eq!(s.get(1), None);
    }
}
