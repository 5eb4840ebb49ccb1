//! The portfolio's content surfaces.
//!
//! Windows are keyed by [`ContentId`]. Each id maps to a stable string key
//! (used as the window's content reference and on the command line), a
//! localized title and a launcher glyph. Panel bodies themselves are drawn by
//! a [`ContentRenderer`] supplied by the host.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime};
use ratatui::buffer::Buffer;
use ratatui::prelude::Rect;
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::viewport::ViewportPolicy;
use crate::window::{UnknownWindowError, WindowManager, WindowRect, WindowSeed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentId {
    AboutMe,
    Projects,
    Experiences,
    Languages,
    Studies,
    Games,
    Contact,
    Videos,
}

impl ContentId {
    pub const ALL: [ContentId; 8] = [
        ContentId::AboutMe,
        ContentId::Projects,
        ContentId::Experiences,
        ContentId::Languages,
        ContentId::Studies,
        ContentId::Games,
        ContentId::Contact,
        ContentId::Videos,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ContentId::AboutMe => "aboutMe",
            ContentId::Projects => "projects",
            ContentId::Experiences => "experiences",
            ContentId::Languages => "languages",
            ContentId::Studies => "studies",
            ContentId::Games => "games",
            ContentId::Contact => "contact",
            ContentId::Videos => "videos",
        }
    }

    pub fn title(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ContentId::AboutMe, Locale::Es) => "Sobre Mí",
            (ContentId::AboutMe, Locale::En) => "About Me",
            (ContentId::Projects, Locale::Es) => "Proyectos",
            (ContentId::Projects, Locale::En) => "Projects",
            (ContentId::Experiences, Locale::Es) => "Experiencias",
            (ContentId::Experiences, Locale::En) => "Experiences",
            (ContentId::Languages, Locale::Es) => "Idiomas",
            (ContentId::Languages, Locale::En) => "Languages",
            (ContentId::Studies, Locale::Es) => "Estudios",
            (ContentId::Studies, Locale::En) => "Studies",
            (ContentId::Games, Locale::Es) => "Juegos",
            (ContentId::Games, Locale::En) => "Games",
            (ContentId::Contact, Locale::Es) => "Contacto",
            (ContentId::Contact, Locale::En) => "Contact",
            (ContentId::Videos, Locale::Es) => "Vídeos",
            (ContentId::Videos, Locale::En) => "Videos",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ContentId::AboutMe => "@",
            ContentId::Projects => "#",
            ContentId::Experiences => "$",
            ContentId::Languages => "%",
            ContentId::Studies => "&",
            ContentId::Games => "*",
            ContentId::Contact => "+",
            ContentId::Videos => ">",
        }
    }

    /// Opening geometry on a browser-sized viewport, in pixels.
    pub fn browser_rect(self) -> WindowRect {
        match self {
            ContentId::AboutMe => WindowRect::new(20, 20, 600, 400),
            ContentId::Projects => WindowRect::new(40, 40, 700, 500),
            ContentId::Experiences => WindowRect::new(60, 60, 650, 450),
            ContentId::Languages => WindowRect::new(80, 80, 500, 400),
            ContentId::Studies => WindowRect::new(100, 100, 600, 450),
            ContentId::Games => WindowRect::new(120, 120, 800, 600),
            ContentId::Contact => WindowRect::new(140, 140, 500, 400),
            ContentId::Videos => WindowRect::new(160, 160, 720, 480),
        }
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ContentId {
    type Err = UnknownWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| UnknownWindowError::new(s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub fn toggled(self) -> Self {
        match self {
            Locale::Es => Locale::En,
            Locale::En => Locale::Es,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    fn short_month(self, month0: u32) -> &'static str {
        const ES: [&str; 12] = [
            "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
        ];
        const EN: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        let names = match self {
            Locale::Es => &ES,
            Locale::En => &EN,
        };
        names[month0 as usize % 12]
    }

    /// Taskbar clock: short date plus 24-hour time, e.g. `18 oct 14:05` or
    /// `Oct 18 14:05`.
    pub fn clock_label(self, now: NaiveDateTime) -> String {
        let month = self.short_month(now.month0());
        let time = now.format("%H:%M");
        match self {
            Locale::Es => format!("{} {month} {time}", now.day()),
            Locale::En => format!("{month} {} {time}", now.day()),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            other => Err(format!("unsupported locale `{other}` (expected es or en)")),
        }
    }
}

/// Seeds for every portfolio window using the browser pixel layout.
pub fn browser_seeds() -> Vec<WindowSeed<ContentId>> {
    ContentId::ALL
        .into_iter()
        .map(|id| WindowSeed::new(id, id.key(), id.browser_rect()))
        .collect()
}

/// Seeds for a terminal: windows cascade down and right from the top-left
/// corner of the desktop, next to the launcher column.
pub fn terminal_seeds(origin_x: i32, width: u16, height: u16) -> Vec<WindowSeed<ContentId>> {
    ContentId::ALL
        .into_iter()
        .enumerate()
        .map(|(idx, id)| {
            let step = idx as i32;
            let rect = WindowRect::new(origin_x + step * 3, step, width, height);
            WindowSeed::new(id, id.key(), rect)
        })
        .collect()
}

/// A manager seeded with every portfolio window.
pub fn portfolio_manager(
    policy: ViewportPolicy,
    seeds: Vec<WindowSeed<ContentId>>,
) -> WindowManager<ContentId> {
    WindowManager::new(policy, seeds)
}

/// Draws the body of a window. The desktop only knows the content reference
/// and hands it over together with the area inside the window chrome.
pub trait ContentRenderer {
    fn render(&mut self, content_ref: &str, locale: Locale, area: Rect, buf: &mut Buffer);
}

/// Renders a short localized blurb per surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderContent;

impl PlaceholderContent {
    fn blurb(id: ContentId, locale: Locale) -> &'static str {
        match (id, locale) {
            (ContentId::AboutMe, Locale::Es) => "Desarrollador de software. Bienvenido a mi escritorio.",
            (ContentId::AboutMe, Locale::En) => "Software developer. Welcome to my desktop.",
            (ContentId::Projects, Locale::Es) => "Proyectos personales y profesionales.",
            (ContentId::Projects, Locale::En) => "Personal and professional projects.",
            (ContentId::Experiences, Locale::Es) => "Trayectoria profesional.",
            (ContentId::Experiences, Locale::En) => "Professional background.",
            (ContentId::Languages, Locale::Es) => "Idiomas hablados.",
            (ContentId::Languages, Locale::En) => "Spoken languages.",
            (ContentId::Studies, Locale::Es) => "Formación académica.",
            (ContentId::Studies, Locale::En) => "Education.",
            (ContentId::Games, Locale::Es) => "Snake, Memoria y Solitario.",
            (ContentId::Games, Locale::En) => "Snake, Memory and Solitaire.",
            (ContentId::Contact, Locale::Es) => "Escríbeme un mensaje.",
            (ContentId::Contact, Locale::En) => "Send me a message.",
            (ContentId::Videos, Locale::Es) => "Demostraciones en vídeo de proyectos.",
            (ContentId::Videos, Locale::En) => "Project video demos.",
        }
    }
}

impl ContentRenderer for PlaceholderContent {
    fn render(&mut self, content_ref: &str, locale: Locale, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let text = match content_ref.parse::<ContentId>() {
            Ok(id) => Text::from(Self::blurb(id, locale)),
            Err(err) => Text::from(err.to_string()),
        };
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
