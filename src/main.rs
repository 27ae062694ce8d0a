//! Terminal runner (default binary).
//!
//! Renders the game with the framebuffer renderer, waits for input until the
//! next fall deadline, then advances the engine by one step. The deadline is
//! recomputed from the current level after every step.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameEvent, GameSnapshot, GameState, PieceSource, SimpleRng, ThreadSource};
use blockfall::input::{handle_key_event, is_restart_key, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::{EventLog, RunConfig};

type Game = GameState<Box<dyn PieceSource>>;

fn main() -> Result<()> {
    let config = RunConfig::from_env();

    let source: Box<dyn PieceSource> = match config.seed {
        Some(seed) => Box::new(SimpleRng::new(seed)),
        None => Box::new(ThreadSource::thread()),
    };
    let mut game: Game = GameState::with_source(source);

    let mut log = match config.event_log.as_deref() {
        Some(path) => Some(EventLog::open(path)?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, log.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(log) = log.as_mut() {
        if let Err(e) = log.flush() {
            eprintln!("[Blockfall] Failed to flush event log: {}", e);
        }
    }

    match &result {
        Ok(()) => println!(
            "[Blockfall] Final score {} (level {}, {} lines)",
            game.score(),
            game.level(),
            game.lines()
        ),
        Err(e) => eprintln!("[Blockfall] Error: {:#}", e),
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut Game,
    mut log: Option<&mut EventLog>,
) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next fall deadline.
        let deadline = last_tick + game.fall_interval();
        let timeout = deadline.saturating_duration_since(Instant::now());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_restart_key(key, game.is_game_over()) {
                        game.reset();
                        last_tick = Instant::now();
                    } else if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if Instant::now() >= deadline {
            last_tick = Instant::now();
            game.tick();
        }

        for event in game.drain_events() {
            if let Some(log) = log.as_deref_mut() {
                log.write_event(&event)?;
            }
            if let GameEvent::GameOver { .. } | GameEvent::Reset = event {
                if let Some(log) = log.as_deref_mut() {
                    log.flush()?;
                }
            }
        }
    }
}
