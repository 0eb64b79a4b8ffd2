//! Evoplot - A terminal-based line plot viewer for genetic algorithm score logs.
//!
//! Evoplot reads a plain text score log (one line per generation, the last
//! whitespace-separated field of each line the average score of the best
//! chromosome) and renders an interactive score-versus-generation line chart
//! in the terminal.
//!
//! # Features
//!
//! - Plain text score log parsing (last field per line)
//! - Braille line chart with labeled axes
//! - Cursor readout for inspecting individual generations
//! - Vim-style keyboard shortcuts
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```ignore
//! use evoplot::data::ScoreReader;
//! use std::path::Path;
//!
//! // Load a score log
//! let series = ScoreReader::read_file(Path::new("output.txt"))?;
//!
//! // Inspect the run
//! println!("{} generations, best score {:?}", series.len(), series.best_score());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod ui;
pub mod util;

pub use error::{EvoplotError, Result};
