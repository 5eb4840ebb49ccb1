use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::desktop::Desktop;
use crate::drivers::InputDriver;
use crate::event_loop::{ControlFlow, EventLoop};

/// `q`, Ctrl-Q and Ctrl-C end the session.
pub fn quit_requested(event: &Event) -> bool {
    let Event::Key(key) = event else {
        return false;
    };
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() => true,
        KeyCode::Char('q') | KeyCode::Char('c') => {
            key.modifiers.contains(KeyModifiers::CONTROL)
        }
        _ => false,
    }
}

/// Drive `desktop` until the user quits: draw, then dispatch every pending
/// event, then draw again.
pub fn run_desktop<B, D, E>(
    terminal: &mut Terminal<B>,
    driver: D,
    desktop: &mut Desktop,
    poll_interval: Duration,
) -> Result<(), E>
where
    B: Backend,
    D: InputDriver,
    E: From<io::Error> + From<<B as Backend>::Error>,
{
    let mut event_loop = EventLoop::new(driver, poll_interval);
    event_loop.run(|event| {
        let Some(event) = event else {
            terminal.draw(|frame| {
                let area = frame.area();
                desktop.render(area, frame.buffer_mut());
            })?;
            return Ok(ControlFlow::Continue);
        };
        if quit_requested(&event) {
            tracing::info!("quit requested");
            return Ok(ControlFlow::Quit);
        }
        let handled = desktop.handle_event(&event);
        tracing::trace!(?event, handled, "event dispatched");
        Ok(ControlFlow::Continue)
    })
}
