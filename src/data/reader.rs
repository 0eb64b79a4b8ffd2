//! Score log file reader.

use super::ScoreSeries;
use crate::error::{EvoplotError, Result};
use std::path::Path;

/// Score log reader.
///
/// A score log is a plain text file with one line per generation; the last
/// whitespace-separated field of each line is the average score of the best
/// chromosome, a signed base-10 integer. Leading fields (generation labels
/// and the like) are ignored.
#[derive(Debug)]
pub struct ScoreReader;

impl ScoreReader {
    /// Read a score log file into a series.
    ///
    /// The first unreadable or malformed line aborts the whole read; there
    /// is no skip-and-continue.
    pub fn read_file(path: &Path) -> Result<ScoreSeries> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| EvoplotError::file_open(path.to_path_buf(), e))?;

        let scores = Self::parse_scores(&contents)?;
        Ok(ScoreSeries::new(path.to_path_buf(), scores))
    }

    /// Parse every line of a score log.
    pub fn parse_scores(contents: &str) -> Result<Vec<i64>> {
        contents
            .lines()
            .enumerate()
            .map(|(idx, line)| Self::parse_line(idx + 1, line))
            .collect()
    }

    // Line numbers are 1-based in errors.
    fn parse_line(line_no: usize, line: &str) -> Result<i64> {
        let token = line
            .split_whitespace()
            .last()
            .ok_or_else(|| EvoplotError::missing_score(line_no))?;

        token
            .parse()
            .map_err(|e| EvoplotError::invalid_score(line_no, token, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_one_score_per_line() {
        let scores = ScoreReader::parse_scores("0 10\n1 15\n2 9\n").unwrap();
        assert_eq!(scores, vec![10, 15, 9]);
    }

    #[test]
    fn takes_the_last_field_of_each_line() {
        let contents = "generation 0: 128\ngeneration 1: 256\n";
        let scores = ScoreReader::parse_scores(contents).unwrap();
        assert_eq!(scores, vec![128, 256]);
    }

    #[test]
    fn parses_signed_scores() {
        let scores = ScoreReader::parse_scores("0 -5\n1 +7\n").unwrap();
        assert_eq!(scores, vec![-5, 7]);
    }

    #[test]
    fn last_line_without_trailing_newline() {
        let scores = ScoreReader::parse_scores("0 10\n1 15").unwrap();
        assert_eq!(scores, vec![10, 15]);
    }

    #[test]
    fn empty_input_gives_empty_series() {
        let scores = ScoreReader::parse_scores("").unwrap();
        assert!(scores.is_empty());
    }

    #[test]
    fn non_numeric_field_is_reported_with_line_number() {
        let err = ScoreReader::parse_scores("0 10\ngen abc\n").unwrap_err();
        match err {
            EvoplotError::InvalidScore { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_line_is_reported_with_line_number() {
        let err = ScoreReader::parse_scores("0 10\n\n2 9\n").unwrap_err();
        match err {
            EvoplotError::MissingScore { line } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_a_file_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.txt");
        let err = ScoreReader::read_file(&path).unwrap_err();
        assert!(matches!(err, EvoplotError::FileOpen { .. }));
    }

    #[test]
    fn rereading_an_unchanged_file_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "0 10").unwrap();
        writeln!(file, "1 15").unwrap();
        drop(file);

        let first = ScoreReader::read_file(&path).unwrap();
        let second = ScoreReader::read_file(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.scores(), &[10, 15]);
    }
}
