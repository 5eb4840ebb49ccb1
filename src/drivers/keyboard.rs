use crossterm::event::{Event, KeyEventKind};

/// Filters raw crossterm events down to what the desktop acts on.
///
/// Terminals that report key releases (and Windows consoles, which also
/// report repeats) would otherwise toggle bindings twice per keystroke.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyboardNormalizer;

impl KeyboardNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, event: Event) -> Option<Event> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Press => None,
            other => Some(other),
        }
    }
}
