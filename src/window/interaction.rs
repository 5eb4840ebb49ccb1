//! Pointer-driven move and resize.
//!
//! [`PointerController`] turns a stream of pointer-down, pointer-move and
//! pointer-up events into position and size updates on a [`WindowManager`].
//! It tracks at most one interaction; the latest pointer-down replaces
//! whatever was in progress.

use std::fmt;

use super::{Position, UnknownWindowError, WindowManager, WindowRect};
use crate::layout::floating::{ResizeCorner, apply_corner_resize, drag_position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderDrag<R> {
    pub id: R,
    /// Pointer position relative to the window origin at pointer-down.
    pub grab_offset: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeDrag<R> {
    pub id: R,
    pub corner: ResizeCorner,
    pub start_pointer: Position,
    pub start_rect: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction<R> {
    Idle,
    Dragging(HeaderDrag<R>),
    Resizing(ResizeDrag<R>),
}

impl<R: Copy> Interaction<R> {
    pub fn window(&self) -> Option<R> {
        match self {
            Interaction::Idle => None,
            Interaction::Dragging(drag) => Some(drag.id),
            Interaction::Resizing(resize) => Some(resize.id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PointerController<R> {
    state: Interaction<R>,
}

impl<R> Default for PointerController<R> {
    fn default() -> Self {
        Self {
            state: Interaction::Idle,
        }
    }
}

impl<R> PointerController<R>
where
    R: Copy + Eq + Ord + fmt::Debug + fmt::Display,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Interaction<R> {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, Interaction::Idle)
    }

    /// Pointer-down on a window header. Focuses the window and, unless it is
    /// maximized or the viewport is constrained, starts moving it.
    ///
    /// Returns whether a drag started. A header press on a window that is
    /// already being resized is ignored.
    pub fn begin_drag(
        &mut self,
        wm: &mut WindowManager<R>,
        id: R,
        pointer: Position,
    ) -> Result<bool, UnknownWindowError> {
        let window = wm
            .window(id)
            .ok_or_else(|| UnknownWindowError::new(id.to_string()))?;
        if matches!(self.state, Interaction::Resizing(resize) if resize.id == id) {
            return Ok(false);
        }
        let visible = window.is_visible();
        let movable = visible && !window.is_maximized() && !wm.policy().constrained;
        let grab_offset = pointer.offset_from(window.position());
        wm.set_active_window(id)?;
        if !movable {
            self.state = Interaction::Idle;
            return Ok(false);
        }
        tracing::debug!(window_id = %id, "drag started");
        self.state = Interaction::Dragging(HeaderDrag { id, grab_offset });
        Ok(true)
    }

    /// Pointer-down on a corner handle. Replaces any drag in progress.
    pub fn begin_resize(
        &mut self,
        wm: &mut WindowManager<R>,
        id: R,
        corner: ResizeCorner,
        pointer: Position,
    ) -> Result<bool, UnknownWindowError> {
        let window = wm
            .window(id)
            .ok_or_else(|| UnknownWindowError::new(id.to_string()))?;
        let resizable =
            window.is_visible() && !window.is_maximized() && !wm.policy().constrained;
        let start_rect = window.rect();
        wm.set_active_window(id)?;
        if !resizable {
            self.state = Interaction::Idle;
            return Ok(false);
        }
        tracing::debug!(window_id = %id, ?corner, "resize started");
        self.state = Interaction::Resizing(ResizeDrag {
            id,
            corner,
            start_pointer: pointer,
            start_rect,
        });
        Ok(true)
    }

    /// Apply one pointer-move. Returns whether geometry was committed.
    ///
    /// If the target window stopped being movable mid-gesture (closed,
    /// minimized or maximized from elsewhere) the interaction is dropped.
    pub fn pointer_move(
        &mut self,
        wm: &mut WindowManager<R>,
        pointer: Position,
    ) -> Result<bool, UnknownWindowError> {
        let Some(id) = self.state.window() else {
            return Ok(false);
        };
        let still_floating = wm
            .window(id)
            .is_some_and(|w| w.is_visible() && !w.is_maximized());
        if !still_floating {
            self.state = Interaction::Idle;
            return Ok(false);
        }
        let policy = wm.policy();
        match self.state {
            Interaction::Idle => Ok(false),
            Interaction::Dragging(drag) => {
                let size = wm
                    .window(drag.id)
                    .map(|w| w.size())
                    .ok_or_else(|| UnknownWindowError::new(drag.id.to_string()))?;
                let next = drag_position(pointer, drag.grab_offset, size, &policy);
                wm.update_window_position(drag.id, next)?;
                Ok(true)
            }
            Interaction::Resizing(resize) => {
                let next = apply_corner_resize(
                    resize.start_rect,
                    resize.corner,
                    resize.start_pointer,
                    pointer,
                    &policy,
                );
                wm.update_window_position(resize.id, next.position)?;
                wm.update_window_size(resize.id, next.size)?;
                Ok(true)
            }
        }
    }

    /// Pointer released. The last committed geometry stands.
    pub fn pointer_up(&mut self) -> bool {
        let ended = self.state.window();
        self.state = Interaction::Idle;
        if let Some(id) = ended {
            tracing::debug!(window_id = %id, "pointer interaction ended");
        }
        ended.is_some()
    }

    /// Pointer lost (focus left the surface). Same as a release.
    pub fn pointer_cancel(&mut self) -> bool {
        self.pointer_up()
    }
}
