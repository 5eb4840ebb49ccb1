use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::layout::RegionMap;
use crate::theme;

/// One desktop icon.
#[derive(Debug, Clone)]
pub struct LauncherIcon<R> {
    pub id: R,
    pub glyph: &'static str,
    pub label: String,
    pub open: bool,
}

/// Column of desktop icons on the left edge. Clicking an icon opens (or
/// re-focuses) its window.
#[derive(Debug)]
pub struct Launcher<R: Copy + Eq> {
    hits: RegionMap<R>,
}

impl<R: Copy + Eq> Default for Launcher<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Copy + Eq> Launcher<R> {
    pub fn new() -> Self {
        Self {
            hits: RegionMap::default(),
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<R> {
        self.hits.hit_test(column, row)
    }

    pub fn render(&mut self, buf: &mut Buffer, area: Rect, icons: &[LauncherIcon<R>]) {
        self.hits.clear();
        let area = area.intersection(buf.area);
        if area.width == 0 || area.height == 0 {
            return;
        }
        // one blank row between icons
        for (idx, icon) in icons.iter().enumerate() {
            let row = area.y as usize + idx * 2;
            if row >= (area.y + area.height) as usize {
                break;
            }
            let row = row as u16;
            let style = if icon.open {
                theme::launcher_icon_open()
            } else {
                theme::launcher_icon()
            };
            let text = format!(" {} {}", icon.glyph, icon.label);
            buf.set_stringn(area.x, row, &text, area.width as usize, style);
            self.hits.set(icon.id, Rect::new(area.x, row, area.width, 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(id: char, label: &str) -> LauncherIcon<char> {
        LauncherIcon {
            id,
            glyph: "#",
            label: label.to_string(),
            open: false,
        }
    }

    #[test]
    fn icons_stack_with_gaps() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 10));
        let mut launcher = Launcher::new();
        launcher.render(
            &mut buf,
            Rect::new(0, 0, 16, 9),
            &[icon('a', "About"), icon('b', "Blog")],
        );
        assert_eq!(launcher.hit_test(3, 0), Some('a'));
        assert_eq!(launcher.hit_test(3, 1), None);
        assert_eq!(launcher.hit_test(3, 2), Some('b'));
        assert_eq!(launcher.hit_test(20, 0), None);
        assert_eq!(buf[(3u16, 0u16)].symbol(), "A");
    }

    #[test]
    fn icons_past_the_bottom_are_skipped() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 16, 3));
        let mut launcher = Launcher::new();
        launcher.render(
            &mut buf,
            Rect::new(0, 0, 16, 3),
            &[icon('a', "A"), icon('b', "B"), icon('c', "C")],
        );
        assert_eq!(launcher.hit_test(1, 2), Some('b'));
        assert_eq!(launcher.hit_test(1, 4), None);
    }
}
