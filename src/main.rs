//! Terminal runner (default binary).
//!
//! Keys tip a simulated accelerometer; the game only ever sees tilt samples.
//! Each loop iteration reads one sample, runs one tick and renders one frame.
//! Animation frames queued by the game are played back on this thread at
//! their requested hold times, with the game clock paused meanwhile.
//!
//! Environment:
//! - `TILT_TETRIS_CONFIG`: path to a JSON file overriding `GameConfig` fields
//! - `TILT_TETRIS_SEED`: piece sequence seed
//! - `RUST_LOG`: log filter (logs go to stderr, redirect it away from the tty)

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::info;

use tilt_tetris::core::{AnimationFrame, DisplaySurface, GameConfig, GameController, SensorSource};
use tilt_tetris::input::{should_quit, TiltSimulator};
use tilt_tetris::term::{GameView, Palette, PixelMatrix, TerminalRenderer};

const FRAME_MS: u64 = 10;
const CONFIG_ENV: &str = "TILT_TETRIS_CONFIG";
const SEED_ENV: &str = "TILT_TETRIS_SEED";

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config()?;
    let seed = load_seed()?;
    info!("starting {}x{} board, seed {}", config.width, config.height, seed);

    let mut term = TerminalRenderer::new(Palette::default());
    term.enter()?;

    let result = run(&mut term, config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn load_config() -> Result<GameConfig> {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return Ok(GameConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config: GameConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    config.validate().with_context(|| format!("validating {path}"))?;
    Ok(config)
}

fn load_seed() -> Result<u32> {
    if let Ok(raw) = std::env::var(SEED_ENV) {
        return raw
            .trim()
            .parse()
            .with_context(|| format!("{SEED_ENV} must be a u32, got {raw:?}"));
    }
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    Ok(nanos)
}

/// Wall clock that can be held still while animations play.
struct GameClock {
    start: Instant,
    paused: Duration,
}

impl GameClock {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            paused: Duration::ZERO,
        }
    }

    fn now_ms(&self) -> u64 {
        self.start.elapsed().saturating_sub(self.paused).as_millis() as u64
    }

    fn hold(&mut self, ms: u32) {
        let d = Duration::from_millis(ms as u64);
        thread::sleep(d);
        self.paused += d;
    }
}

fn run(term: &mut TerminalRenderer, config: GameConfig, mut seed: u32) -> Result<()> {
    let mut game = GameController::new(config, seed)?;
    let mut sensor = TiltSimulator::new();
    let mut matrix = PixelMatrix::for_board(config.width, config.height);
    let view = GameView::new(config.width, config.height, &matrix);
    let mut clock = GameClock::new();
    let mut last_frame = Instant::now();

    loop {
        let timeout = Duration::from_millis(FRAME_MS).saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if game.is_game_over() && matches!(key.code, KeyCode::Char('r' | 'R')) {
                            seed = seed.wrapping_add(1);
                            game = GameController::new(config, seed)?;
                            sensor = TiltSimulator::new();
                            clock = GameClock::new();
                            info!("restarted with seed {}", seed);
                            continue;
                        }
                        sensor.handle_key_press(key.code);
                    }
                    KeyEventKind::Release => sensor.handle_key_release(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed_ms = last_frame.elapsed().as_millis() as u32;
        last_frame = Instant::now();
        sensor.update(elapsed_ms);

        game.tick(clock.now_ms(), sensor.read_tilt());

        let frames = game.drain_frames();
        if frames.is_empty() {
            // The wiped panel stays up until restart or quit.
            if !game.is_game_over() {
                view.render(&game.snapshot(), &mut matrix);
                present(term, &mut matrix, &game)?;
            }
        } else {
            play_frames(term, &view, &mut matrix, &game, &frames, &mut clock)?;
            last_frame = Instant::now();
        }
    }
}

/// Line-clear flashes overlay the frame already on screen, which still shows
/// the rows before compaction; everything after `Compacted` sits on a fresh
/// render.
fn play_frames(
    term: &mut TerminalRenderer,
    view: &GameView,
    matrix: &mut PixelMatrix,
    game: &GameController,
    frames: &[AnimationFrame],
    clock: &mut GameClock,
) -> Result<()> {
    let snap = game.snapshot();
    let mut fresh = false;
    for frame in frames {
        match frame {
            AnimationFrame::Compacted { .. } => {
                view.render(&snap, matrix);
                fresh = true;
            }
            AnimationFrame::WipeRow { .. } if !fresh => {
                view.render(&snap, matrix);
                fresh = true;
                view.render_frame(frame, matrix);
            }
            _ => view.render_frame(frame, matrix),
        }
        present(term, matrix, game)?;
        clock.hold(frame.hold_ms());
    }
    Ok(())
}

fn present(term: &mut TerminalRenderer, matrix: &mut PixelMatrix, game: &GameController) -> Result<()> {
    match matrix.refresh() {
        Ok(()) => {}
        Err(never) => match never {},
    }
    let status = status_line(game);
    term.draw(matrix, &status)
}

fn status_line(game: &GameController) -> String {
    let mut status = format!(
        "lines {}  next {}  ",
        game.current_score(),
        game.next_piece_kind().as_str()
    );
    if game.is_game_over() {
        status.push_str("GAME OVER  r restart  q quit");
    } else {
        status.push_str("arrows/wasd tilt  space level  q quit");
    }
    status
}
