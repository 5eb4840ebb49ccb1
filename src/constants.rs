//! Shared crate-wide constants.

/// Starting value of the stacking counter. The first window opened in a
/// session receives `INITIAL_Z_INDEX + 1`.
pub const INITIAL_Z_INDEX: u32 = 10;

/// Maximum gap between two header clicks on the same window for them to count
/// as a double-click (toggle maximize/restore).
pub const DOUBLE_CLICK_MS: u64 = 500;

/// Viewport widths at or below this many pixels are treated as a constrained
/// (mobile) viewport.
pub const BROWSER_BREAKPOINT: u16 = 768;

/// Height of the browser taskbar strip, in pixels.
pub const BROWSER_TASKBAR_HEIGHT: u16 = 48;

/// Inset from the viewport edges used for windows forced full-screen on a
/// constrained browser viewport.
pub const BROWSER_INSET: u16 = 20;

pub const BROWSER_MIN_WIDTH: u16 = 300;
pub const BROWSER_MIN_HEIGHT: u16 = 200;

/// Terminals narrower than this many columns are treated as constrained.
pub const TERMINAL_BREAKPOINT: u16 = 60;

/// The terminal taskbar occupies a single row at the bottom of the screen.
pub const TERMINAL_TASKBAR_HEIGHT: u16 = 1;

pub const TERMINAL_INSET: u16 = 0;

/// Smallest window that still fits a title and the three header buttons.
pub const TERMINAL_MIN_WIDTH: u16 = 20;
pub const TERMINAL_MIN_HEIGHT: u16 = 5;

/// Width of the launcher icon column, in terminal columns.
pub const LAUNCHER_WIDTH: u16 = 16;
