use std::io;
use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use arcade_snake::config::{FRAME_INTERVAL_MS, GRID};
use arcade_snake::game::{GameEvent, GameState, GameStatus};
use arcade_snake::input::{GameInput, poll_input};
use arcade_snake::renderer;
use arcade_snake::score::{load_high_score, save_high_score};
use arcade_snake::sound::SoundPlayer;
use arcade_snake::timing::TickTimer;

const FRAME_INTERVAL: Duration = Duration::from_millis(FRAME_INTERVAL_MS);

/// Classic arcade Snake for the terminal.
#[derive(Debug, Parser)]
struct Cli {
    /// Seed the session RNG for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable audio output.
    #[arg(long = "no-sound")]
    no_sound: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    install_panic_hook();

    let result = run(cli);
    cleanup_terminal()?;
    result
}

fn run(cli: Cli) -> io::Result<()> {
    let mut sound = SoundPlayer::new(!cli.no_sound);
    let saved_high_score = match load_high_score() {
        Ok(high_score) => high_score,
        Err(error) => {
            eprintln!("Failed to load high score: {error}");
            0
        }
    };

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(GRID, seed),
        None => GameState::new(GRID),
    };
    state.high_score = saved_high_score;

    let mut terminal = setup_terminal()?;
    let mut timer = TickTimer::new();
    let mut show_grid = false;
    let mut persisted_high_score = saved_high_score;
    let mut last_status = state.status;
    let mut last_frame = Instant::now();

    sound.start_ambience();

    loop {
        terminal.draw(|frame| renderer::draw(frame, &state, show_grid))?;

        if let Some(game_input) = poll_input(FRAME_INTERVAL)? {
            match game_input {
                GameInput::Quit => break,
                GameInput::ToggleGrid => show_grid = !show_grid,
                GameInput::VolumeUp => sound.volume_up(),
                GameInput::VolumeDown => sound.volume_down(),
                GameInput::Restart => {
                    let was_game_over = state.status == GameStatus::GameOver;
                    state.apply_input(GameInput::Restart);
                    if was_game_over {
                        // Time banked before the death must not replay
                        // into the fresh round as an instant move burst.
                        timer.reset();
                    }
                }
                other => state.apply_input(other),
            }
        }

        let elapsed = last_frame.elapsed();
        last_frame = Instant::now();
        if state.status == GameStatus::Running {
            timer.advance(elapsed);
            while timer.try_tick(state.current_speed()) {
                match state.tick() {
                    Some(GameEvent::AteFood) => sound.play_eat(),
                    Some(GameEvent::Died(_)) => {
                        sound.play_death();
                        break;
                    }
                    None => {}
                }
            }
        }

        if state.status != last_status {
            match (last_status, state.status) {
                (GameStatus::GameOver | GameStatus::Paused, GameStatus::Running) => {
                    sound.start_ambience();
                }
                (_, GameStatus::Paused) => sound.stop_ambience(),
                (_, GameStatus::GameOver) => {
                    sound.stop_ambience();
                    if state.high_score > persisted_high_score {
                        match save_high_score(state.high_score) {
                            Ok(()) => persisted_high_score = state.high_score,
                            Err(error) => eprintln!("Failed to save high score: {error}"),
                        }
                    }
                }
                _ => {}
            }
            last_status = state.status;
        }
    }

    // A quit mid-round still counts toward the record.
    let final_high_score = state.high_score.max(state.score);
    if final_high_score > persisted_high_score {
        if let Err(error) = save_high_score(final_high_score) {
            eprintln!("Failed to save high score: {error}");
        }
    }

    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
