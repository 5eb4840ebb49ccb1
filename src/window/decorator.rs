use ratatui::buffer::Buffer;
use ratatui::prelude::Rect;
use ratatui::widgets::{Clear, Widget};

use super::{Position, WindowRect};
use crate::layout::floating::ResizeCorner;
use crate::theme;

/// Part of a window's chrome under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Minimize,
    Maximize,
    Close,
    /// Header bar outside the buttons: drag or double-click.
    Drag,
    Resize(ResizeCorner),
    /// Anywhere else inside the window.
    Body,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChromeState {
    pub focused: bool,
    pub maximized: bool,
    /// Corner handles are live. False while maximized or constrained.
    pub resizable: bool,
}

pub trait WindowDecorator: std::fmt::Debug {
    fn hit_test(&self, rect: WindowRect, point: Position, state: ChromeState)
    -> Option<HeaderAction>;

    /// Area left for content once the chrome is drawn.
    fn content_area(&self, rect: Rect) -> Rect;

    fn render_window(&self, buf: &mut Buffer, rect: Rect, title: &str, state: ChromeState);
}

/// One header row with the title on the left and minimize, maximize and
/// close buttons on the right; single-line border on the other three sides.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultDecorator;

// offsets from the right edge
const CLOSE_OFFSET: i32 = 2;
const MAXIMIZE_OFFSET: i32 = 4;
const MINIMIZE_OFFSET: i32 = 6;

impl WindowDecorator for DefaultDecorator {
    fn hit_test(
        &self,
        rect: WindowRect,
        point: Position,
        state: ChromeState,
    ) -> Option<HeaderAction> {
        let width = rect.size.width as i32;
        let height = rect.size.height as i32;
        let lx = point.x - rect.position.x;
        let ly = point.y - rect.position.y;
        if width == 0 || height == 0 || lx < 0 || ly < 0 || lx >= width || ly >= height {
            return None;
        }
        let last_x = width - 1;
        let last_y = height - 1;
        if state.resizable {
            let corner = match (lx, ly) {
                (0, 0) => Some(ResizeCorner::TopLeft),
                (x, 0) if x == last_x => Some(ResizeCorner::TopRight),
                (0, y) if y == last_y => Some(ResizeCorner::BottomLeft),
                (x, y) if x == last_x && y == last_y => Some(ResizeCorner::BottomRight),
                _ => None,
            };
            if let Some(corner) = corner {
                return Some(HeaderAction::Resize(corner));
            }
        }
        if ly != 0 {
            return Some(HeaderAction::Body);
        }
        let from_right = width - lx;
        let action = match from_right {
            CLOSE_OFFSET => HeaderAction::Close,
            MAXIMIZE_OFFSET => HeaderAction::Maximize,
            MINIMIZE_OFFSET if width > MINIMIZE_OFFSET => HeaderAction::Minimize,
            _ => HeaderAction::Drag,
        };
        Some(action)
    }

    fn content_area(&self, rect: Rect) -> Rect {
        Rect {
            x: rect.x.saturating_add(1),
            y: rect.y.saturating_add(1),
            width: rect.width.saturating_sub(2),
            height: rect.height.saturating_sub(2),
        }
    }

    fn render_window(&self, buf: &mut Buffer, rect: Rect, title: &str, state: ChromeState) {
        let area = rect.intersection(buf.area);
        if area.width < 2 || area.height < 2 {
            return;
        }
        Clear.render(area, buf);

        let (header_style, border_style) = if state.focused {
            (theme::header_focused(), theme::border_focused())
        } else {
            (theme::header_unfocused(), theme::border_unfocused())
        };

        let left = area.x;
        let right = area.x + area.width - 1;
        let top = area.y;
        let bottom = area.y + area.height - 1;

        for x in left..=right {
            if let Some(cell) = buf.cell_mut((x, top)) {
                cell.set_symbol(" ");
                cell.set_style(header_style);
            }
        }
        let buttons_width = MINIMIZE_OFFSET as u16;
        let title_width = area.width.saturating_sub(buttons_width + 2) as usize;
        if title_width > 0 {
            buf.set_stringn(left + 1, top, title, title_width, header_style);
        }
        if area.width > buttons_width {
            let restore_glyph = if state.maximized { "❐" } else { "□" };
            for (offset, glyph) in [
                (MINIMIZE_OFFSET, "_"),
                (MAXIMIZE_OFFSET, restore_glyph),
                (CLOSE_OFFSET, "×"),
            ] {
                let x = area.x + area.width - offset as u16;
                if let Some(cell) = buf.cell_mut((x, top)) {
                    cell.set_symbol(glyph);
                    cell.set_style(header_style);
                }
            }
        }

        for y in top.saturating_add(1)..bottom {
            for x in [left, right] {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol("│");
                    cell.set_style(border_style);
                }
            }
        }
        for x in left..=right {
            let symbol = if x == left {
                "└"
            } else if x == right {
                if state.resizable { "┛" } else { "┘" }
            } else {
                "─"
            };
            if let Some(cell) = buf.cell_mut((x, bottom)) {
                cell.set_symbol(symbol);
                cell.set_style(border_style);
            }
        }
    }
}
