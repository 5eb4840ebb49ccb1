pub mod console;
pub mod keyboard;

use std::io;
use std::time::Duration;

use crossterm::event::Event;

/// Source of terminal events. The console driver reads crossterm; tests feed a
/// scripted queue.
pub trait InputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }
}
