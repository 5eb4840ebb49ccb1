use std::cell::RefCell;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use folio_wm::content::{ContentId, ContentRenderer, Locale};
use folio_wm::desktop::Desktop;
use folio_wm::viewport::ViewportConfig;
use folio_wm::window::{Position, Size};

const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 30,
};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn press(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

fn drag(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

fn release(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .and_then(|d| d.and_hms_opt(12, 30, 0))
        .unwrap()
}

fn draw(desktop: &mut Desktop) -> Buffer {
    let mut buf = Buffer::empty(SCREEN);
    desktop.render_at(SCREEN, &mut buf, noon());
    buf
}

fn row_text(buf: &Buffer, row: u16, from: u16, len: u16) -> String {
    (from..from + len)
        .map(|x| buf[(x, row)].symbol().to_string())
        .collect()
}

#[test]
fn window_chrome_and_taskbar_are_drawn() {
    let mut desktop = Desktop::new(ViewportConfig::TERMINAL, 100, 30, Locale::En);
    desktop.open(ContentId::Projects).unwrap();
    let buf = draw(&mut desktop);
    // Projects is seeded at (19, 1), 44 wide
    assert_eq!(row_text(&buf, 1, 20, 10), "# Projects");
    assert_eq!(buf[(61u16, 1u16)].symbol(), "×");
    assert_eq!(row_text(&buf, 29, 2, 8), "Projects");
    assert_eq!(row_text(&buf, 29, 82, 4), "[EN]");
    assert_eq!(row_text(&buf, 29, 87, 12), "Oct 18 12:30");
}

#[test]
fn clock_follows_the_locale() {
    let mut desktop = Desktop::new(ViewportConfig::TERMINAL, 100, 30, Locale::Es);
    let buf = draw(&mut desktop);
    assert_eq!(row_text(&buf, 29, 87, 12), "18 oct 12:30");

    let later = noon() + chrono::TimeDelta::minutes(45);
    let mut buf = Buffer::empty(SCREEN);
    desktop.render_at(SCREEN, &mut buf, later);
    assert_eq!(row_text(&buf, 29, 87, 12), "18 oct 13:15");
}

#[derive(Default)]
struct RecordingRenderer {
    calls: Rc<RefCell<Vec<(String, Locale, Rect)>>>,
}

impl ContentRenderer for RecordingRenderer {
    fn render(&mut self, content_ref: &str, locale: Locale, area: Rect, buf: &mut Buffer) {
        self.calls
            .borrow_mut()
            .push((content_ref.to_string(), locale, area));
        buf.set_string(area.x, area.y, "body", Style::default());
    }
}

#[test]
fn custom_renderer_fills_window_bodies() {
    let renderer = RecordingRenderer::default();
    let calls = Rc::clone(&renderer.calls);
    let mut desktop = Desktop::new(ViewportConfig::TERMINAL, 100, 30, Locale::En)
        .with_renderer(Box::new(renderer));
    desktop.open(ContentId::Projects).unwrap();
    let buf = draw(&mut desktop);

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    let (content_ref, locale, area) = &calls[0];
    assert_eq!(content_ref, "projects");
    assert_eq!(*locale, Locale::En);
    assert_eq!(row_text(&buf, area.y, area.x, 4), "body");
}

#[test]
fn header_buttons_drive_the_lifecycle() {
    let mut desktop = Desktop::new(ViewportConfig::TERMINAL, 100, 30, Locale::En);
    desktop.open(ContentId::Projects).unwrap();
    draw(&mut desktop);

    assert!(desktop.handle_event(&press(57, 1)));
    let projects = desktop.windows().window(ContentId::Projects).unwrap();
    assert!(projects.is_minimized());
    assert_eq!(desktop.windows().active_window(), None);

    // minimized windows keep their taskbar button
    let buf = draw(&mut desktop);
    assert_eq!(row_text(&buf, 29, 2, 8), "Projects");
    assert!(desktop.handle_event(&press(3, 29)));
    assert!(!desktop.windows().window(ContentId::Projects).unwrap().is_minimized());
    assert_eq!(desktop.windows().active_window(), Some(ContentId::Projects));

    draw(&mut desktop);
    assert!(desktop.handle_event(&press(59, 1)));
    assert!(desktop.windows().window(ContentId::Projects).unwrap().is_maximized());

    // maximized: the close button moves to the right edge of the screen
    let buf = draw(&mut desktop);
    assert_eq!(buf[(98u16, 0u16)].symbol(), "×");
    assert!(desktop.handle_event(&press(98, 0)));
    assert!(!desktop.windows().window(ContentId::Projects).unwrap().is_open());
    assert_eq!(desktop.windows().active_window(), None);
}

#[test]
fn header_drag_moves_and_corner_drag_resizes() {
    let mut desktop = Desktop::new(ViewportConfig::TERMINAL, 100, 30, Locale::En);
    desktop.open(ContentId::AboutMe).unwrap();
    draw(&mut desktop);

    // AboutMe is seeded at (16, 0), 44x12
    desktop.handle_event(&press(30, 0));
    desktop.handle_event(&drag(40, 5));
    desktop.handle_event(&release(40, 5));
    let about = desktop.windows().window(ContentId::AboutMe).unwrap();
    assert_eq!(about.position(), Position::new(26, 5));

    desktop.handle_event(&press(26 + 43, 5 + 11));
    desktop.handle_event(&drag(26 + 48, 5 + 13));
    desktop.handle_event(&release(26 + 48, 5 + 13));
    let about = desktop.windows().window(ContentId::AboutMe).unwrap();
    assert_eq!(about.position(), Position::new(26, 5));
    assert_eq!(about.size(), Size::new(49, 14));
    assert!(desktop.pointer().is_idle());
}

#[test]
fn clicking_a_lower_window_raises_it() {
    let mut desktop = Desktop::new(ViewportConfig::TERMINAL, 100, 30, Locale::En);
    desktop.open(ContentId::AboutMe).unwrap();
    desktop.open(ContentId::Projects).unwrap();
    draw(&mut desktop);
    // (17, 5) is inside AboutMe only
    assert!(desktop.handle_event(&press(17, 5)));
    assert_eq!(desktop.windows().active_window(), Some(ContentId::AboutMe));
    let top = desktop.windows().visible_windows().last().map(|w| w.id());
    assert_eq!(top, Some(ContentId::AboutMe));
}

#[test]
fn taskbar_switches_locale() {
    let mut desktop = Desktop::new(ViewportConfig::TERMINAL, 100, 30, Locale::En);
    draw(&mut desktop);
    assert!(desktop.handle_event(&press(83, 29)));
    assert_eq!(desktop.locale(), Locale::Es);
    desktop.open(ContentId::Projects).unwrap();
    let buf = draw(&mut desktop);
    assert_eq!(row_text(&buf, 1, 20, 11), "# Proyectos");
    assert_eq!(row_text(&buf, 29, 82, 4), "[ES]");
}

#[test]
fn narrow_terminal_forces_full_screen() {
    let mut desktop = Desktop::new(ViewportConfig::TERMINAL, 50, 20, Locale::Es);
    assert!(desktop.windows().policy().constrained);
    desktop.open(ContentId::Contact).unwrap();
    let area = Rect::new(0, 0, 50, 20);
    let mut buf = Buffer::empty(area);
    desktop.render_at(area, &mut buf, noon());
    let title: String = (1..11u16).map(|x| buf[(x, 0u16)].symbol().to_string()).collect();
    assert_eq!(title, "+ Contacto");

    // header presses focus but never start a drag
    desktop.handle_event(&press(20, 0));
    assert!(desktop.pointer().is_idle());
    desktop.handle_event(&drag(30, 5));
    let contact = desktop.windows().window(ContentId::Contact).unwrap();
    assert_eq!(contact.position(), Position::new(0, 0));
    assert!(contact.is_maximized());
}

#[test]
fn shrinking_the_terminal_pulls_windows_inside() {
    let mut desktop = Desktop::new(ViewportConfig::TERMINAL, 100, 30, Locale::En);
    desktop.open(ContentId::Videos).unwrap();
    desktop.handle_event(&Event::Resize(70, 16));
    let videos = desktop.windows().window(ContentId::Videos).unwrap();
    let rect = videos.rect();
    assert!(rect.right() <= 70);
    assert!(rect.bottom() <= 15);
}
