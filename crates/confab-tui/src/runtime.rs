//! Event loop: terminal events and the deferral tick, multiplexed with
//! `tokio::select!`. Every state transition runs to completion before the
//! next event is taken.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use futures::StreamExt;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

pub(crate) async fn run_app(terminal: &mut Tui, app: &mut App, tick_rate: Duration) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(tick_rate);

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                if app.pending_quit {
                                    app.quit();
                                } else {
                                    app.pending_quit = true;
                                }
                            } else {
                                app.pending_quit = false;
                                handle_key(app, key);
                            }
                        }
                        Event::Mouse(mouse) => match mouse.kind {
                            MouseEventKind::ScrollUp => app.scroll_up(3),
                            MouseEventKind::ScrollDown => app.scroll_down(3),
                            // clicks land outside the keyboard-driven
                            // affordances, so they close the action bar
                            MouseEventKind::Down(_) => app.core.clear_active(),
                            _ => {}
                        },
                        _ => {}
                    }
                }
            }
            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }
        }
    }

    Ok(())
}
