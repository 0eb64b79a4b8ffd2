//! Evoplot - A terminal-based score plot viewer for genetic algorithm runs.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use evoplot::app::App;
use evoplot::data::ScoreReader;
use evoplot::{ui, util};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "evoplot")]
#[command(about = "A terminal-based score plot viewer for genetic algorithm runs", long_about = None)]
struct Args {
    /// Path to the score log; one line per generation, the last field of
    /// each line is the score
    #[arg(default_value = "output.txt")]
    file: PathBuf,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Evoplot");
    }

    // Read the score log before the terminal enters raw mode; any read or
    // parse failure aborts here and no plot is produced.
    let series = match ScoreReader::read_file(&args.file) {
        Ok(series) => series,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Loaded {} generations from {}",
        series.len(),
        args.file.display()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(series);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Evoplot exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc) => return Ok(()),

                    // Cursor movement
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                        app.cursor_left(1);
                    },
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                        app.cursor_right(1);
                    },
                    (KeyModifiers::CONTROL, KeyCode::Char('b')) => {
                        app.cursor_left(10);
                    },
                    (KeyModifiers::CONTROL, KeyCode::Char('f')) => {
                        app.cursor_right(10);
                    },

                    // Vim navigation
                    (KeyModifiers::NONE, KeyCode::Char('g')) => {
                        if pending_g {
                            app.goto_first();
                            pending_g = false;
                        } else {
                            pending_g = true;
                        }
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                        app.goto_last();
                    },

                    // Theme
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    },

                    // Clipboard
                    (KeyModifiers::NONE, KeyCode::Char('y')) => {
                        match util::copy_series_summary(&app.series) {
                            Ok(_) => app.status = "Summary copied!".to_string(),
                            Err(e) => app.status = format!("Copy failed: {}", e),
                        }
                    },
                    (KeyModifiers::NONE, KeyCode::Char('c')) => {
                        match util::copy_scores(&app.series) {
                            Ok(_) => app.status = "Scores copied!".to_string(),
                            Err(e) => app.status = format!("Copy failed: {}", e),
                        }
                    },

                    _ => {
                        pending_g = false;
                    },
                }
            }
        }
    }
}
