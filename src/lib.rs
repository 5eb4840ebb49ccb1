//! A desktop-style window manager for portfolio panels.
//!
//! The core is [`window::WindowManager`], an owned registry of windows with
//! open, minimize, maximize and focus state plus z-ordering, driven by a
//! [`viewport::ViewportPolicy`]. It is generic over the window id and has no
//! notion of pixels or cells beyond the numbers the policy carries, so the
//! same registry serves a browser-sized layout and the terminal desktop in
//! [`desktop`].

pub mod constants;
pub mod content;
pub mod desktop;
pub mod drivers;
pub mod event_loop;
pub mod launcher;
pub mod layout;
pub mod runner;
pub mod taskbar;
pub mod theme;
pub mod tracing_sub;
pub mod viewport;
pub mod window;
