use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::InputDriver;
use super::keyboard::KeyboardNormalizer;

/// Reads events from the process terminal through crossterm.
#[derive(Debug, Default)]
pub struct ConsoleInputDriver {
    normalizer: KeyboardNormalizer,
    pending: VecDeque<Event>,
}

impl ConsoleInputDriver {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_internal(&mut self) -> io::Result<Event> {
        loop {
            let event = crossterm::event::read()?;
            if let Some(normalized) = self.normalizer.normalize(event) {
                return Ok(normalized);
            }
        }
    }
}

impl InputDriver for ConsoleInputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        if !self.pending.is_empty() {
            return Ok(true);
        }
        let polled = poll_normalized(
            &self.normalizer,
            timeout,
            crossterm::event::poll,
            crossterm::event::read,
        )?;
        match polled {
            Some(event) => {
                self.pending.push_back(event);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn read(&mut self) -> io::Result<Event> {
        if let Some(event) = self.pending.pop_front() {
            return Ok(event);
        }
        self.read_internal()
    }
}

/// Wait for the next event that survives normalization.
///
/// A filtered-out release still wakes the poll, so it is swallowed here and
/// the wait resumes with whatever is left of `timeout`.
fn poll_normalized<P, R>(
    normalizer: &KeyboardNormalizer,
    timeout: Duration,
    mut poll: P,
    mut read: R,
) -> io::Result<Option<Event>>
where
    P: FnMut(Duration) -> io::Result<bool>,
    R: FnMut() -> io::Result<Event>,
{
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !poll(remaining)? {
            return Ok(None);
        }
        if let Some(event) = normalizer.normalize(read()?) {
            return Ok(Some(event));
        }
        if remaining.is_zero() {
            return Ok(None);
        }
    }
}

/// Owns the terminal for the lifetime of the desktop: raw mode, alternate
/// screen, mouse capture and focus reporting. Restores everything on drop.
pub struct ConsoleSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    entered: bool,
}

impl ConsoleSession {
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            entered: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    pub fn enter(&mut self) -> io::Result<()> {
        if self.entered {
            return Ok(());
        }
        terminal::enable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        self.entered = true;
        Ok(())
    }

    pub fn exit(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        terminal::disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()?;
        self.entered = false;
        Ok(())
    }
}

impl Drop for ConsoleSession {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
