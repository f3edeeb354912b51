use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use snake_bug_quest::config::{DEFAULT_GRID, DEFAULT_SEED, FRAME_INTERVAL_MS};
use snake_bug_quest::defects::{Defect, Defects};
use snake_bug_quest::game::{GameState, GameStatus};
use snake_bug_quest::input::{GameInput, InputHandler};
use snake_bug_quest::progress;
use snake_bug_quest::renderer;
use snake_bug_quest::stage::Stage;
use snake_bug_quest::terminal_runtime::{TerminalSession, install_panic_hook};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Reset saved progress to stage 1 before starting.
    #[arg(long)]
    reset: bool,

    /// Seed for food placement.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Progress file location.
    #[arg(long = "progress-file", value_name = "PATH")]
    progress_file: Option<PathBuf>,

    /// Write tracing output to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Start with a seeded defect already corrected. Repeatable.
    #[arg(long = "fix", value_enum, value_name = "DEFECT")]
    fix: Vec<Defect>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    install_panic_hook();
    run(cli)
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(cli: Cli) -> io::Result<()> {
    let progress_path = cli.progress_file.unwrap_or_else(progress::progress_path);
    if cli.reset {
        if let Err(error) = progress::reset(&progress_path) {
            tracing::warn!(%error, "failed to reset progress");
        }
    }

    let stage = progress::load_stage(&progress_path);
    let defects = cli
        .fix
        .iter()
        .fold(Defects::seeded(), |defects, defect| defects.without(*defect));
    tracing::info!(
        stage = stage.number(),
        seed = cli.seed,
        active_defects = defects.active().count(),
        "starting"
    );

    let mut state = GameState::new(DEFAULT_GRID, stage, defects, cli.seed);
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut last_tick = Instant::now();

    loop {
        session.draw(|frame| renderer::render(frame, &state))?;

        if let Some(game_input) = input.poll_input(Duration::from_millis(FRAME_INTERVAL_MS))? {
            match game_input {
                GameInput::Quit => break,
                GameInput::ResetProgress => {
                    progress::save_or_warn(&progress_path, Stage::FIRST);
                    state.reset_progress();
                    last_tick = Instant::now();
                }
                GameInput::Restart
                    if matches!(state.status, GameStatus::GameOver | GameStatus::BoardFull) =>
                {
                    state.restart();
                    last_tick = Instant::now();
                }
                other => state.apply_input(other),
            }
        }

        if last_tick.elapsed() >= tick_interval(state.tick_rate) {
            if state.tick() {
                progress::save_or_warn(&progress_path, state.stage());
            }
            last_tick = Instant::now();
        }
    }

    tracing::info!(stage = state.stage().number(), score = state.score, "quit");
    Ok(())
}

fn tick_interval(tick_rate: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(tick_rate.max(1)))
}
