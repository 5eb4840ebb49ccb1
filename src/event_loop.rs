use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// The single place that polls the input driver.
///
/// Each turn the handler is called once with `None` (time to draw), then with
/// every queued event. Bursts such as mouse drags are drained in one pass so
/// drawing does not fall behind the pointer.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    /// Wait up to the poll interval, then collect everything that is ready.
    pub fn drain(&mut self) -> io::Result<Vec<Event>> {
        let mut batch = Vec::new();
        if !self.driver.poll(self.poll_interval)? {
            return Ok(batch);
        }
        loop {
            batch.push(self.driver.read()?);
            if !self.driver.poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(batch)
    }

    pub fn run<F, E>(&mut self, mut handler: F) -> Result<(), E>
    where
        F: FnMut(Option<Event>) -> Result<ControlFlow, E>,
        E: From<io::Error>,
    {
        loop {
            if let ControlFlow::Quit = handler(None)? {
                return Ok(());
            }
            for event in self.drain()? {
                if let ControlFlow::Quit = handler(Some(event))? {
                    return Ok(());
                }
            }
        }
    }
}
