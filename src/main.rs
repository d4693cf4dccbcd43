//! Terminal runner (default binary).
//!
//! Reads `GameConfig` and the event log path from the environment, then
//! loops: draw a frame, poll input until the frame deadline, feed elapsed
//! time to the session.
//! After game over the last frame stays on screen until the player quits.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blocktris::core::{GameConfig, GameSnapshot, Session, SimpleRng};
use blocktris::input::{action_for_key, should_quit};
use blocktris::term::{BoardView, FrameBuffer, SurfaceLayout, TerminalRenderer, Viewport};
use blocktris::event_log::{self, EventLog};
use blocktris::types::FRAME_MS;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let mut log = match event_log::path_from_env() {
        Some(path) => Some(EventLog::open(path)?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, log.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

fn run<W: std::io::Write>(
    term: &mut TerminalRenderer,
    config: GameConfig,
    mut log: Option<&mut EventLog<W>>,
) -> Result<()> {
    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut session = Session::new(config, SimpleRng::new(seed));

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let layout = SurfaceLayout::from_viewport(Viewport::new(w, h), session.grid().rows(), session.grid().cols());
    let view = BoardView::new(layout, session.config().palette);

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(w, h);

    let started = Instant::now();
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = action_for_key(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            session.tick(elapsed.as_millis() as u32);
        }

        let events = session.take_events();
        if let Some(log) = log.as_deref_mut() {
            log.record_all(started.elapsed().as_millis() as u64, &events)?;
        }
    }
}
