//! Terminal falling-block game (default binary).
//!
//! Owns the game loop: render, wait for input until the next gravity tick,
//! apply each key press once, then apply one gravity tick per deadline.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use falling_blocks::core::{Session, SimpleRng};
use falling_blocks::input::{handle_key_event, should_quit};
use falling_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use falling_blocks::types::TICK_MS;

/// Falling-block puzzle in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for piece selection (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Gravity interval in milliseconds
    #[arg(short, long, default_value_t = TICK_MS)]
    tick_ms: u32,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(short, long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, tick_ms = args.tick_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, Duration::from_millis(args.tick_ms.max(1) as u64));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, seed: u32, tick: Duration) -> Result<()> {
    let mut session = Session::new(SimpleRng::new(seed));
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_session_into(&session, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        tracing::info!(
                            pieces = session.pieces_locked(),
                            lines = session.lines_cleared(),
                            "quit"
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            session.gravity_tick();
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
