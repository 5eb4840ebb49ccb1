use crate::viewport::ViewportPolicy;
use crate::window::{Position, Size, WindowRect};

/// The four resize handles every floating window carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeCorner {
    /// Moves the left edge.
    pub fn is_west(self) -> bool {
        matches!(self, ResizeCorner::TopLeft | ResizeCorner::BottomLeft)
    }

    /// Moves the top edge.
    pub fn is_north(self) -> bool {
        matches!(self, ResizeCorner::TopLeft | ResizeCorner::TopRight)
    }
}

/// New origin for a window being dragged by its header, kept fully inside the
/// desktop area.
pub fn drag_position(
    pointer: Position,
    grab_offset: Position,
    size: Size,
    policy: &ViewportPolicy,
) -> Position {
    let target = pointer.offset_from(grab_offset);
    policy.clamp_position(target, size)
}

/// Geometry after dragging `corner` from `start_pointer` to `pointer`.
///
/// The edge opposite the dragged corner never moves. Each axis is floored at
/// the policy minimum and capped so the window does not cross the viewport
/// edge on the side being dragged; the floor wins when both cannot hold.
pub fn apply_corner_resize(
    start: WindowRect,
    corner: ResizeCorner,
    start_pointer: Position,
    pointer: Position,
    policy: &ViewportPolicy,
) -> WindowRect {
    let dx = pointer.x - start_pointer.x;
    let dy = pointer.y - start_pointer.y;
    let (x, width) = resize_axis(
        start.position.x,
        start.size.width,
        dx,
        corner.is_west(),
        policy.min_width,
        policy.width,
    );
    let (y, height) = resize_axis(
        start.position.y,
        start.size.height,
        dy,
        corner.is_north(),
        policy.min_height,
        policy.desktop_height(),
    );
    WindowRect::new(x, y, width, height)
}

fn resize_axis(
    origin: i32,
    length: u16,
    delta: i32,
    moves_origin: bool,
    min: u16,
    limit: u16,
) -> (i32, u16) {
    let length = length as i32;
    let min = min as i32;
    if moves_origin {
        let far_edge = origin + length;
        // the origin may not cross 0, so the far edge bounds the length
        let max = far_edge.max(min);
        let next = (length - delta).clamp(min, max);
        (far_edge - next, next.min(u16::MAX as i32) as u16)
    } else {
        let max = (limit as i32 - origin).max(min);
        let next = (length + delta).clamp(min, max);
        (origin, next.min(u16::MAX as i32) as u16)
    }
}
