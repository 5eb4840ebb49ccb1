//! Viewport classification.
//!
//! The window manager never inspects the host surface on its own. Instead the
//! host hands it a [`ViewportPolicy`] describing the current viewport, and
//! hands it a new one whenever the surface changes size.

use crate::constants::{
    BROWSER_BREAKPOINT, BROWSER_INSET, BROWSER_MIN_HEIGHT, BROWSER_MIN_WIDTH,
    BROWSER_TASKBAR_HEIGHT, TERMINAL_BREAKPOINT, TERMINAL_INSET, TERMINAL_MIN_HEIGHT,
    TERMINAL_MIN_WIDTH, TERMINAL_TASKBAR_HEIGHT,
};
use crate::window::{Position, Size, WindowRect};

/// Static thresholds used to turn raw viewport dimensions into a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportConfig {
    /// Widths at or below this value are constrained.
    pub breakpoint: u16,
    pub taskbar_height: u16,
    /// Margin kept around windows forced full-screen in constrained mode.
    pub inset: u16,
    pub min_width: u16,
    pub min_height: u16,
}

impl ViewportConfig {
    /// Pixel thresholds for a browser-sized surface.
    pub const BROWSER: Self = Self {
        breakpoint: BROWSER_BREAKPOINT,
        taskbar_height: BROWSER_TASKBAR_HEIGHT,
        inset: BROWSER_INSET,
        min_width: BROWSER_MIN_WIDTH,
        min_height: BROWSER_MIN_HEIGHT,
    };

    /// Cell thresholds for a terminal surface.
    pub const TERMINAL: Self = Self {
        breakpoint: TERMINAL_BREAKPOINT,
        taskbar_height: TERMINAL_TASKBAR_HEIGHT,
        inset: TERMINAL_INSET,
        min_width: TERMINAL_MIN_WIDTH,
        min_height: TERMINAL_MIN_HEIGHT,
    };

    pub fn with_breakpoint(mut self, breakpoint: u16) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn with_taskbar_height(mut self, taskbar_height: u16) -> Self {
        self.taskbar_height = taskbar_height;
        self
    }

    pub fn classify(&self, width: u16, height: u16) -> ViewportPolicy {
        ViewportPolicy {
            constrained: width <= self.breakpoint,
            width,
            height,
            taskbar_height: self.taskbar_height,
            inset: self.inset,
            min_width: self.min_width,
            min_height: self.min_height,
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::TERMINAL
    }
}

/// Snapshot of the viewport the windows live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportPolicy {
    /// Windows are forced full-screen and cannot be dragged or resized.
    pub constrained: bool,
    pub width: u16,
    pub height: u16,
    pub taskbar_height: u16,
    pub inset: u16,
    pub min_width: u16,
    pub min_height: u16,
}

impl ViewportPolicy {
    /// Height available to windows once the taskbar strip is reserved.
    pub fn desktop_height(&self) -> u16 {
        self.height.saturating_sub(self.taskbar_height)
    }

    /// The area above the taskbar. Maximized windows fill exactly this.
    pub fn desktop_bounds(&self) -> WindowRect {
        WindowRect {
            position: Position::new(0, 0),
            size: Size::new(self.width, self.desktop_height()),
        }
    }

    /// Geometry assigned to every window opened on a constrained viewport.
    pub fn constrained_rect(&self) -> WindowRect {
        let inset = self.inset;
        let size = Size::new(
            self.width.saturating_sub(inset.saturating_mul(2)),
            self.desktop_height().saturating_sub(inset.saturating_mul(2)),
        );
        WindowRect {
            position: Position::new(inset as i32, inset as i32),
            size: self.clamp_size(size),
        }
    }

    /// Clamp a size to `[min, viewport]` on each axis. The floor wins when the
    /// viewport itself is smaller than the minimum.
    pub fn clamp_size(&self, size: Size) -> Size {
        let max_w = self.width.max(self.min_width);
        let max_h = self.desktop_height().max(self.min_height);
        Size::new(
            size.width.clamp(self.min_width, max_w),
            size.height.clamp(self.min_height, max_h),
        )
    }

    /// Keep a window of `size` fully inside the desktop area.
    pub fn clamp_position(&self, position: Position, size: Size) -> Position {
        let max_x = (self.width as i32 - size.width as i32).max(0);
        let max_y = (self.desktop_height() as i32 - size.height as i32).max(0);
        Position::new(position.x.clamp(0, max_x), position.y.clamp(0, max_y))
    }
}
