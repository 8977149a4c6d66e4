//! Input polling and redraw loop.
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use vimsweep_core::ScoreStore;

use crate::app::{App, Control};
use crate::input;
use crate::terminal::Tui;
use crate::ui;

/// How long to wait for input before redrawing the running clock.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Runs until the player quits. Ticks only redraw; they never touch the
/// session.
pub fn run<S: ScoreStore>(terminal: &mut Tui, app: &mut App<S>) -> Result<()> {
    terminal.draw(|frame| ui::render(frame, app))?;

    loop {
        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = input::handle_key(key, app.screen_kind());
                    if app.handle(action) == Control::Quit {
                        tracing::info!("Quit requested");
                        break;
                    }
                }
                Event::Resize(..) => {}
                _ => continue,
            }
        } else if !app.needs_tick() {
            continue;
        }

        terminal.draw(|frame| ui::render(frame, app))?;
    }

    Ok(())
}
