use ratatui::style::{Color, Modifier, Style};

// Centralized desktop colors. Named after the surface they paint so the
// chrome, taskbar and launcher stay consistent.

// Window header
pub fn header_focused() -> Style {
    Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}
pub fn header_unfocused() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

// Window border
pub fn border_focused() -> Style {
    Style::default().fg(Color::Blue)
}
pub fn border_unfocused() -> Style {
    Style::default().fg(Color::DarkGray)
}

// Taskbar
pub fn taskbar_bg() -> Style {
    Style::default().bg(Color::Black).fg(Color::Gray)
}
pub fn taskbar_button() -> Style {
    taskbar_bg().bg(Color::DarkGray).fg(Color::White)
}
pub fn taskbar_button_active() -> Style {
    header_focused()
}
pub fn taskbar_button_minimized() -> Style {
    taskbar_bg().add_modifier(Modifier::DIM)
}
pub fn taskbar_locale() -> Style {
    taskbar_bg().fg(Color::Cyan)
}

pub fn taskbar_clock() -> Style {
    taskbar_bg().fg(Color::Gray)
}

// Launcher
pub fn launcher_icon() -> Style {
    Style::default().fg(Color::White)
}
pub fn launcher_icon_open() -> Style {
    Style::default().fg(Color::Yellow)
}
