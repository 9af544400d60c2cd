//! Terminal platformer runner (default binary).
//!
//! Uses crossterm for input and a custom framebuffer-based renderer.
//! The simulation runs on a fixed 16 ms tick; rendering happens every
//! loop iteration and the renderer diffs away unchanged cells.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_platformer::core::GameState;
use tui_platformer::data::EngineData;
use tui_platformer::input::{should_quit, InputHandler};
use tui_platformer::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_platformer::types::TICK_MS;

/// Engine data directory used when no argument is given.
const DEFAULT_ENGINE_DIR: &str = "engine";

fn main() -> Result<()> {
    let engine_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ENGINE_DIR.to_string());
    let engine = EngineData::load(Path::new(&engine_dir));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, engine: EngineData) -> Result<()> {
    let mut game = GameState::with_overrides(engine.physics, engine.levels);
    let view = GameView::new(engine.loaded);
    let mut input = InputHandler::new();
    let mut fb = FrameBuffer::new(1, 1);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = input.handle_key_press(key.code) {
                            game.apply_action(action);
                        }
                    }
                    KeyEventKind::Release => {
                        input.handle_key_release(key.code);
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(input.state());
        }
    }
}
