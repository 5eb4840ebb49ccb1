pub mod decorator;
pub mod interaction;

mod window_manager;

use ratatui::prelude::Rect;
use thiserror::Error;

pub use interaction::{HeaderDrag, Interaction, PointerController, ResizeDrag};
pub use window_manager::WindowManager;

/// Top-left corner of a window. Signed so a caller can hand in unclamped
/// pointer arithmetic; the drag controller clamps before committing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Position) -> Position {
        Position::new(self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Signed window origin with unsigned size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowRect {
    pub position: Position,
    pub size: Size,
}

impl WindowRect {
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            position: Position::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn right(&self) -> i32 {
        self.position.x + self.size.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.position.y + self.size.height as i32
    }

    /// Portion of the rect that lands on a non-negative surface, as a
    /// ratatui `Rect`. Negative origins are cut off rather than wrapped.
    pub fn to_rect(&self) -> Rect {
        let x = self.position.x.clamp(0, u16::MAX as i32);
        let y = self.position.y.clamp(0, u16::MAX as i32);
        let width = (self.right() - x).clamp(0, u16::MAX as i32);
        let height = (self.bottom() - y).clamp(0, u16::MAX as i32);
        Rect {
            x: x as u16,
            y: y as u16,
            width: width as u16,
            height: height as u16,
        }
    }
}

/// Returned for any operation addressed to an id the registry was not seeded
/// with, and for content keys outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown window `{id}`")]
pub struct UnknownWindowError {
    pub id: String,
}

impl UnknownWindowError {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// One managed window. Fields are read-only outside this module; every change
/// goes through [`WindowManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowEntity<R> {
    id: R,
    content_ref: String,
    open: bool,
    minimized: bool,
    maximized: bool,
    z_index: u32,
    position: Position,
    size: Size,
    seed_order: usize,
}

impl<R: Copy> WindowEntity<R> {
    fn from_seed(seed: WindowSeed<R>, seed_order: usize) -> Self {
        Self {
            id: seed.id,
            content_ref: seed.content_ref,
            open: false,
            minimized: false,
            maximized: false,
            z_index: 0,
            position: seed.rect.position,
            size: seed.rect.size,
            seed_order,
        }
    }

    pub fn id(&self) -> R {
        self.id
    }

    /// Opaque key handed to the content renderer.
    pub fn content_ref(&self) -> &str {
        &self.content_ref
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Open and not minimized: painted on the desktop and focusable.
    pub fn is_visible(&self) -> bool {
        self.open && !self.minimized
    }

    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn rect(&self) -> WindowRect {
        WindowRect {
            position: self.position,
            size: self.size,
        }
    }

}

/// Initial declaration of a window: identity, content key and the geometry it
/// first opens with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSeed<R> {
    pub id: R,
    pub content_ref: String,
    pub rect: WindowRect,
}

impl<R> WindowSeed<R> {
    pub fn new(id: R, content_ref: impl Into<String>, rect: WindowRect) -> Self {
        Self {
            id,
            content_ref: content_ref.into(),
            rect,
        }
    }
}
