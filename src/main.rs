//! Terminal runner (default binary).
//!
//! One frame every `TICK_MS`: wait for input until the frame boundary, run
//! gravity with the real elapsed time, replay the frame's input, render.
//! Quitting or topping out restores the terminal and prints the final score.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use block_puzzle::core::GameState;
use block_puzzle::input::InputQueue;
use block_puzzle::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use block_puzzle::types::{GameStatus, TICK_MS};
use block_puzzle::Config;

/// How long the final board stays on screen after a game over.
const GAME_OVER_HOLD: Duration = Duration::from_millis(1500);

fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config)?;
    log::info!("starting session with seed {}", config.seed);

    let mut game = GameState::new(config.seed);
    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut game));

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    log::info!(
        "session ended ({:?}), score {}, lines {}",
        game.status(),
        game.final_score(),
        game.lines()
    );
    println!("Game Over! Your score: {}", game.final_score());
    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    // stderr shares the terminal with the alternate screen, so logs only go
    // to a file.
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut frame = FrameBuffer::new(0, 0);
    let mut input = InputQueue::new();
    let frame_len = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let actions = input.collect_until(last_tick + frame_len)?;

        let elapsed_ms = take_elapsed_ms(&mut last_tick, Instant::now());
        game.advance(elapsed_ms, actions.iter().copied());

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        if (w, h) != (frame.width(), frame.height()) {
            term.invalidate();
        }
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut frame);
        term.present(&mut frame)?;

        match game.status() {
            GameStatus::Running => {}
            GameStatus::Quit => return Ok(()),
            GameStatus::GameOver => {
                std::thread::sleep(GAME_OVER_HOLD);
                return Ok(());
            }
        }
    }
}

/// Whole milliseconds since `last_tick`, moving `last_tick` forward by
/// exactly that much. The sub-millisecond remainder counts toward the next
/// frame.
fn take_elapsed_ms(last_tick: &mut Instant, now: Instant) -> u32 {
    let elapsed_ms = now
        .saturating_duration_since(*last_tick)
        .as_millis()
        .min(u32::MAX as u128) as u32;
    *last_tick += Duration::from_millis(elapsed_ms as u64);
    elapsed_ms
}
