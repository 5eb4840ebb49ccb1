//! The terminal desktop.
//!
//! [`Desktop`] owns the window registry for the portfolio surfaces and wires
//! it to the screen: it routes crossterm mouse events to window chrome, the
//! taskbar and the launcher, and paints everything into a ratatui buffer.

use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::constants::{DOUBLE_CLICK_MS, LAUNCHER_WIDTH};
use crate::content::{
    ContentId, ContentRenderer, Locale, PlaceholderContent, portfolio_manager, terminal_seeds,
};
use crate::launcher::{Launcher, LauncherIcon};
use crate::taskbar::{Taskbar, TaskbarEntry, TaskbarHit};
use crate::viewport::ViewportConfig;
use crate::window::decorator::{ChromeState, DefaultDecorator, HeaderAction, WindowDecorator};
use crate::window::{PointerController, Position, UnknownWindowError, WindowManager};

const SEED_WIDTH: u16 = 44;
const SEED_HEIGHT: u16 = 12;

pub struct Desktop {
    windows: WindowManager<ContentId>,
    pointer: PointerController<ContentId>,
    taskbar: Taskbar<ContentId>,
    launcher: Launcher<ContentId>,
    decorator: Box<dyn WindowDecorator>,
    renderer: Box<dyn ContentRenderer>,
    config: ViewportConfig,
    locale: Locale,
    last_header_click: Option<(ContentId, Instant)>,
}

impl std::fmt::Debug for Desktop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Desktop")
            .field("active", &self.windows.active_window())
            .field("policy", &self.windows.policy())
            .field("pointer", &self.pointer.state())
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl Desktop {
    pub fn new(config: ViewportConfig, width: u16, height: u16, locale: Locale) -> Self {
        let policy = config.classify(width, height);
        let seeds = terminal_seeds(LAUNCHER_WIDTH as i32, SEED_WIDTH, SEED_HEIGHT);
        Self {
            windows: portfolio_manager(policy, seeds),
            pointer: PointerController::new(),
            taskbar: Taskbar::new(),
            launcher: Launcher::new(),
            decorator: Box::new(DefaultDecorator),
            renderer: Box::new(PlaceholderContent),
            config,
            locale,
            last_header_click: None,
        }
    }

    pub fn with_renderer(mut self, renderer: Box<dyn ContentRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn windows(&self) -> &WindowManager<ContentId> {
        &self.windows
    }

    pub fn pointer(&self) -> &PointerController<ContentId> {
        &self.pointer
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
        tracing::debug!(locale = self.locale.code(), "locale switched");
    }

    pub fn open(&mut self, id: ContentId) -> Result<(), UnknownWindowError> {
        self.windows.open_window(id)
    }

    /// Re-classify the viewport after the terminal changed size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.windows.set_policy(self.config.classify(width, height));
    }

    pub fn handle_event(&mut self, event: &Event) -> bool {
        self.handle_event_at(event, Instant::now())
    }

    /// Same as [`Desktop::handle_event`] with an explicit clock, so
    /// double-click timing can be driven from tests.
    pub fn handle_event_at(&mut self, event: &Event, now: Instant) -> bool {
        let result = match event {
            Event::Mouse(mouse) => self.handle_mouse(*mouse, now),
            Event::Resize(width, height) => {
                self.resize(*width, *height);
                Ok(true)
            }
            Event::FocusLost => Ok(self.pointer.pointer_cancel()),
            Event::Key(key)
                if key.kind == KeyEventKind::Press && key.code == KeyCode::Char('l') =>
            {
                self.toggle_locale();
                Ok(true)
            }
            _ => Ok(false),
        };
        match result {
            Ok(handled) => handled,
            Err(err) => {
                tracing::warn!(%err, "desktop event rejected");
                false
            }
        }
    }

    fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        now: Instant,
    ) -> Result<bool, UnknownWindowError> {
        let pointer = Position::new(mouse.column as i32, mouse.row as i32);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_press(mouse.column, mouse.row, pointer, now)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.pointer.pointer_move(&mut self.windows, pointer)
            }
            MouseEventKind::Up(MouseButton::Left) => Ok(self.pointer.pointer_up()),
            _ => Ok(false),
        }
    }

    fn handle_press(
        &mut self,
        column: u16,
        row: u16,
        pointer: Position,
        now: Instant,
    ) -> Result<bool, UnknownWindowError> {
        if self.taskbar.contains(column, row) {
            return match self.taskbar.hit_test(column, row) {
                Some(TaskbarHit::Window(id)) => {
                    self.windows.open_window(id)?;
                    Ok(true)
                }
                Some(TaskbarHit::Locale) => {
                    self.toggle_locale();
                    Ok(true)
                }
                None => Ok(false),
            };
        }

        if let Some(id) = self.windows.window_at(pointer)
            && let Some(rect) = self.windows.effective_rect(id)
        {
            let state = self.chrome_state(id);
            let action = self.decorator.hit_test(rect, pointer, state);
            match action {
                Some(HeaderAction::Close) => self.windows.close_window(id)?,
                Some(HeaderAction::Minimize) => self.windows.minimize_window(id)?,
                Some(HeaderAction::Maximize) => self.windows.toggle_maximize(id)?,
                Some(HeaderAction::Drag) => {
                    if self.is_double_click(id, now) {
                        self.last_header_click = None;
                        self.pointer.pointer_up();
                        self.windows.toggle_maximize(id)?;
                    } else {
                        self.last_header_click = Some((id, now));
                        self.pointer.begin_drag(&mut self.windows, id, pointer)?;
                    }
                }
                Some(HeaderAction::Resize(corner)) => {
                    self.pointer
                        .begin_resize(&mut self.windows, id, corner, pointer)?;
                }
                Some(HeaderAction::Body) | None => self.windows.set_active_window(id)?,
            }
            return Ok(true);
        }

        if let Some(id) = self.launcher.hit_test(column, row) {
            self.windows.open_window(id)?;
            return Ok(true);
        }
        Ok(false)
    }

    fn is_double_click(&self, id: ContentId, now: Instant) -> bool {
        self.last_header_click.is_some_and(|(last, at)| {
            last == id
                && now.saturating_duration_since(at) <= Duration::from_millis(DOUBLE_CLICK_MS)
        })
    }

    fn chrome_state(&self, id: ContentId) -> ChromeState {
        let maximized = self.windows.window(id).is_some_and(|w| w.is_maximized());
        ChromeState {
            focused: self.windows.active_window() == Some(id),
            maximized,
            resizable: !maximized && !self.windows.policy().constrained,
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        self.render_at(area, buf, chrono::Local::now().naive_local());
    }

    /// Paint the desktop with the taskbar clock showing `now`.
    pub fn render_at(&mut self, area: Rect, buf: &mut Buffer, now: NaiveDateTime) {
        let policy = self.windows.policy();
        if policy.width != area.width || policy.height != area.height {
            self.resize(area.width, area.height);
        }
        let policy = self.windows.policy();
        let desktop_height = policy.desktop_height().min(area.height);
        let desktop = Rect::new(area.x, area.y, area.width, desktop_height);
        let taskbar_area = Rect::new(
            area.x,
            area.y + desktop_height,
            area.width,
            area.height - desktop_height,
        );

        let icons: Vec<LauncherIcon<ContentId>> = self
            .windows
            .windows()
            .map(|w| LauncherIcon {
                id: w.id(),
                glyph: w.id().glyph(),
                label: w.id().title(self.locale).to_string(),
                open: w.is_open(),
            })
            .collect();
        let launcher_area = Rect::new(
            desktop.x,
            desktop.y,
            LAUNCHER_WIDTH.min(desktop.width),
            desktop.height,
        );
        self.launcher.render(buf, launcher_area, &icons);

        let painted: Vec<ContentId> = self
            .windows
            .visible_windows()
            .iter()
            .map(|w| w.id())
            .collect();
        for id in painted {
            let Some(rect) = self.windows.effective_rect(id) else {
                continue;
            };
            let Some(window) = self.windows.window(id) else {
                continue;
            };
            let rect = rect.to_rect().intersection(desktop);
            if rect.width == 0 || rect.height == 0 {
                continue;
            }
            let title = format!("{} {}", id.glyph(), id.title(self.locale));
            let state = self.chrome_state(id);
            self.decorator.render_window(buf, rect, &title, state);
            let inner = self.decorator.content_area(rect);
            self.renderer
                .render(window.content_ref(), self.locale, inner, buf);
        }

        let entries: Vec<TaskbarEntry<ContentId>> = self
            .windows
            .taskbar_windows()
            .iter()
            .map(|w| TaskbarEntry {
                id: w.id(),
                label: w.id().title(self.locale).to_string(),
                active: self.windows.active_window() == Some(w.id()),
                minimized: w.is_minimized(),
            })
            .collect();
        let clock = self.locale.clock_label(now);
        self.taskbar
            .render(buf, taskbar_area, &entries, self.locale.code(), &clock);
    }
}
