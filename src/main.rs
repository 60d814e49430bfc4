use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::{
    io::{stdout, Stdout},
    path::PathBuf,
    time::{Duration, Instant},
};

use falltris::constants::DEFAULT_FRAME_MS;
use falltris::game::Game;
use falltris::input::{handle_input, InputOutcome};
use falltris::storage::{HighScoreStore, JsonFileStore};
use falltris::ui::ui;

/// Falling-block puzzle game for the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the piece generator, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Where the high score is kept.
    #[arg(long, value_name = "FILE")]
    high_score_file: Option<PathBuf>,

    /// Frame and input poll interval in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_FRAME_MS)]
    frame_ms: u64,
}

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    let args = Args::parse();
    let mut warnings = Vec::new();

    let mut store = JsonFileStore::new(
        args.high_score_file.clone().unwrap_or_else(JsonFileStore::default_path),
    );
    let high_score = store.load().unwrap_or_else(|err| {
        warnings.push(format!("warning: {err:#}; starting from 0"));
        0
    });

    let mut game = match args.seed {
        Some(seed) => Game::with_seed(seed, high_score),
        None => Game::new(high_score),
    };

    // Setup terminal
    terminal::enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let frame = Duration::from_millis(args.frame_ms.max(1));
    let result = run(&mut terminal, &mut game, &mut store, frame, &mut warnings);

    // Cleanup runs even when the loop failed
    let cleanup = restore_terminal(&mut terminal);

    for warning in &warnings {
        eprintln!("{warning}");
    }
    result.and(cleanup)
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    let raw_mode = terminal::disable_raw_mode().context("disabling raw mode");
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("leaving alternate screen");
    let cursor = terminal.show_cursor().context("showing cursor");
    raw_mode.and(screen).and(cursor)
}

fn run(
    terminal: &mut Term,
    game: &mut Game,
    store: &mut impl HighScoreStore,
    frame: Duration,
    warnings: &mut Vec<String>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, game))?;

        if event::poll(frame)? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if handle_input(game, code, kind, Instant::now()) == InputOutcome::Quit {
                    return Ok(());
                }
            }
        }

        game.update(Instant::now());

        if let Some(score) = game.take_new_high_score() {
            if let Err(err) = store.save(score) {
                warnings.push(format!("warning: {err:#}"));
            }
        }
    }
}
