use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::layout::{RegionMap, rect_contains};
use crate::theme;

/// What a taskbar click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarHit<R: Copy + Eq> {
    Window(R),
    Locale,
}

/// One button on the taskbar.
#[derive(Debug, Clone)]
pub struct TaskbarEntry<R> {
    pub id: R,
    pub label: String,
    pub active: bool,
    pub minimized: bool,
}

/// Strip along the bottom of the screen: one button per open window, the
/// active one highlighted, then the locale switch and the clock on the right.
#[derive(Debug)]
pub struct Taskbar<R: Copy + Eq> {
    area: Rect,
    hits: RegionMap<TaskbarHit<R>>,
}

impl<R: Copy + Eq> Default for Taskbar<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Copy + Eq> Taskbar<R> {
    pub fn new() -> Self {
        Self {
            area: Rect::default(),
            hits: RegionMap::default(),
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.area, column, row)
    }

    /// Resolve a click recorded against the last rendered frame.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<TaskbarHit<R>> {
        if !self.contains(column, row) {
            return None;
        }
        self.hits.hit_test(column, row)
    }

    pub fn render(
        &mut self,
        buf: &mut Buffer,
        area: Rect,
        entries: &[TaskbarEntry<R>],
        locale_code: &str,
        clock: &str,
    ) {
        self.area = area;
        self.hits.clear();
        let area = area.intersection(buf.area);
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, theme::taskbar_bg());

        let row = area.y;
        let right = area.x + area.width;
        let locale_label = format!("[{}]", locale_code.to_ascii_uppercase());
        let locale_width = locale_label.chars().count() as u16;
        let clock_width = clock.chars().count() as u16;
        // the clock gives way before the locale switch does
        let clock_x = right.saturating_sub(clock_width + 1);
        let show_clock = clock_width > 0 && clock_x > area.x + locale_width + 1;
        let locale_right = if show_clock { clock_x - 1 } else { right - 1 };
        let locale_x = locale_right.saturating_sub(locale_width);
        let mut x = area.x.saturating_add(1);

        for entry in entries {
            let label = format!(" {} ", entry.label);
            let width = label.chars().count() as u16;
            if x.saturating_add(width) > locale_x {
                break;
            }
            let style = if entry.active {
                theme::taskbar_button_active()
            } else if entry.minimized {
                theme::taskbar_button_minimized()
            } else {
                theme::taskbar_button()
            };
            buf.set_string(x, row, &label, style);
            self.hits.set(
                TaskbarHit::Window(entry.id),
                Rect::new(x, row, width, area.height),
            );
            x = x.saturating_add(width + 1);
        }

        if locale_x > area.x {
            buf.set_string(locale_x, row, &locale_label, theme::taskbar_locale());
            self.hits.set(
                TaskbarHit::Locale,
                Rect::new(locale_x, row, locale_width, area.height),
            );
        }
        if show_clock {
            buf.set_string(clock_x, row, clock, theme::taskbar_clock());
        }
    }
}
