use std::collections::BTreeMap;
use std::fmt;

use super::{Position, Size, UnknownWindowError, WindowEntity, WindowRect, WindowSeed};
use crate::constants::INITIAL_Z_INDEX;
use crate::viewport::ViewportPolicy;

/// Registry of every window the desktop knows about.
///
/// The set of windows is fixed when the manager is built: `open` and `close`
/// only toggle flags, nothing is ever inserted or dropped afterwards. Every
/// operation runs to completion on `&mut self`, so callers on a single event
/// loop never observe a half-applied change.
#[derive(Debug, Clone)]
pub struct WindowManager<R: Copy + Eq + Ord> {
    windows: BTreeMap<R, WindowEntity<R>>,
    // seed order, used for taskbar/launcher listings
    order: Vec<R>,
    active: Option<R>,
    highest_z: u32,
    policy: ViewportPolicy,
}

impl<R> WindowManager<R>
where
    R: Copy + Eq + Ord + fmt::Debug + fmt::Display,
{
    pub fn new(policy: ViewportPolicy, seeds: impl IntoIterator<Item = WindowSeed<R>>) -> Self {
        let mut windows = BTreeMap::new();
        let mut order = Vec::new();
        for mut seed in seeds {
            if windows.contains_key(&seed.id) {
                tracing::warn!(window_id = %seed.id, "ignoring duplicate window seed");
                continue;
            }
            seed.rect.size = policy.clamp_size(seed.rect.size);
            order.push(seed.id);
            let entity = WindowEntity::from_seed(seed, order.len() - 1);
            windows.insert(entity.id, entity);
        }
        Self {
            windows,
            order,
            active: None,
            highest_z: INITIAL_Z_INDEX,
            policy,
        }
    }

    fn entity(&self, id: R) -> Result<&WindowEntity<R>, UnknownWindowError> {
        self.windows
            .get(&id)
            .ok_or_else(|| UnknownWindowError::new(id.to_string()))
    }

    fn entity_mut(&mut self, id: R) -> Result<&mut WindowEntity<R>, UnknownWindowError> {
        self.windows
            .get_mut(&id)
            .ok_or_else(|| UnknownWindowError::new(id.to_string()))
    }

    fn next_z(&mut self) -> u32 {
        self.highest_z = self.highest_z.saturating_add(1);
        self.highest_z
    }

    /// Hand focus to the topmost remaining visible window when `hidden` was the
    /// active one. Runs against the state after the caller flipped its flags.
    fn reassign_focus_from(&mut self, hidden: R) {
        if self.active != Some(hidden) {
            return;
        }
        self.active = self
            .windows
            .values()
            .filter(|w| w.id != hidden && w.is_visible())
            .max_by_key(|w| w.z_index)
            .map(|w| w.id);
        tracing::debug!(from = %hidden, to = ?self.active, "focus reassigned");
    }

    pub fn policy(&self) -> ViewportPolicy {
        self.policy
    }

    /// Swap in a new viewport. Stored sizes are re-clamped to the new ceiling
    /// and windows are pulled back inside the desktop. Entering constrained
    /// mode forces every open window full-screen.
    pub fn set_policy(&mut self, policy: ViewportPolicy) {
        if policy == self.policy {
            return;
        }
        tracing::debug!(
            width = policy.width,
            height = policy.height,
            constrained = policy.constrained,
            "viewport changed"
        );
        self.policy = policy;
        for window in self.windows.values_mut() {
            window.size = policy.clamp_size(window.size);
            window.position = policy.clamp_position(window.position, window.size);
            if policy.constrained && window.open {
                window.maximized = true;
            }
        }
    }

    pub fn window(&self, id: R) -> Option<&WindowEntity<R>> {
        self.windows.get(&id)
    }

    /// Every window in seed order, open or not.
    pub fn windows(&self) -> impl Iterator<Item = &WindowEntity<R>> + '_ {
        self.order.iter().filter_map(|id| self.windows.get(id))
    }

    pub fn ids(&self) -> &[R] {
        &self.order
    }

    pub fn active_window(&self) -> Option<R> {
        self.active
    }

    pub fn highest_z_index(&self) -> u32 {
        self.highest_z
    }

    /// Open, non-minimized windows, bottom to top.
    pub fn visible_windows(&self) -> Vec<&WindowEntity<R>> {
        let mut visible: Vec<&WindowEntity<R>> =
            self.windows.values().filter(|w| w.is_visible()).collect();
        visible.sort_by_key(|w| (w.z_index, w.seed_order));
        visible
    }

    /// Open windows (minimized included) in seed order; one taskbar button each.
    pub fn taskbar_windows(&self) -> Vec<&WindowEntity<R>> {
        self.windows().filter(|w| w.open).collect()
    }

    /// Where the window should be drawn. Maximized windows ignore their stored
    /// geometry and fill the desktop above the taskbar.
    pub fn effective_rect(&self, id: R) -> Option<WindowRect> {
        let window = self.windows.get(&id)?;
        if window.maximized {
            Some(self.policy.desktop_bounds())
        } else {
            Some(window.rect())
        }
    }

    /// Topmost visible window whose drawn area contains `point`.
    pub fn window_at(&self, point: Position) -> Option<R> {
        self.visible_windows()
            .into_iter()
            .rev()
            .find(|w| {
                self.effective_rect(w.id).is_some_and(|rect| {
                    point.x >= rect.position.x
                        && point.x < rect.right()
                        && point.y >= rect.position.y
                        && point.y < rect.bottom()
                })
            })
            .map(|w| w.id)
    }

    pub fn open_window(&mut self, id: R) -> Result<(), UnknownWindowError> {
        self.entity(id)?;
        let z = self.next_z();
        let policy = self.policy;
        let window = self.entity_mut(id)?;
        window.z_index = z;
        window.open = true;
        window.minimized = false;
        if policy.constrained {
            let rect = policy.constrained_rect();
            window.maximized = true;
            window.position = rect.position;
            window.size = rect.size;
        }
        self.active = Some(id);
        tracing::debug!(window_id = %id, z_index = z, "opened window");
        Ok(())
    }

    pub fn close_window(&mut self, id: R) -> Result<(), UnknownWindowError> {
        let window = self.entity_mut(id)?;
        window.open = false;
        window.minimized = false;
        window.maximized = false;
        tracing::debug!(window_id = %id, "closing window");
        self.reassign_focus_from(id);
        Ok(())
    }

    pub fn minimize_window(&mut self, id: R) -> Result<(), UnknownWindowError> {
        let window = self.entity_mut(id)?;
        if !window.open || window.minimized {
            return Ok(());
        }
        window.minimized = true;
        tracing::debug!(window_id = %id, "minimized window");
        self.reassign_focus_from(id);
        Ok(())
    }

    pub fn maximize_window(&mut self, id: R) -> Result<(), UnknownWindowError> {
        let window = self.entity_mut(id)?;
        if !window.open {
            return Ok(());
        }
        window.maximized = true;
        window.minimized = false;
        tracing::debug!(window_id = %id, "maximized window");
        self.set_active_window(id)
    }

    /// Leave the maximized (or minimized) state. On a constrained viewport the
    /// window stays full-screen; it is only un-minimized and refocused.
    pub fn restore_window(&mut self, id: R) -> Result<(), UnknownWindowError> {
        let constrained = self.policy.constrained;
        let window = self.entity_mut(id)?;
        if !window.open {
            return Ok(());
        }
        if !constrained {
            window.maximized = false;
        }
        window.minimized = false;
        tracing::debug!(window_id = %id, "restored window");
        self.set_active_window(id)
    }

    /// Header double-click and the maximize button both land here.
    pub fn toggle_maximize(&mut self, id: R) -> Result<(), UnknownWindowError> {
        if self.entity(id)?.maximized {
            self.restore_window(id)
        } else {
            self.maximize_window(id)
        }
    }

    /// Raise a visible window and make it the active one. Hidden windows
    /// cannot take focus; the call is ignored for them.
    pub fn set_active_window(&mut self, id: R) -> Result<(), UnknownWindowError> {
        if !self.entity(id)?.is_visible() {
            return Ok(());
        }
        let z = self.next_z();
        self.entity_mut(id)?.z_index = z;
        self.active = Some(id);
        Ok(())
    }

    /// Store a new origin. The caller clamps; this only refuses while the
    /// window is maximized or the viewport is constrained.
    pub fn update_window_position(
        &mut self,
        id: R,
        position: Position,
    ) -> Result<(), UnknownWindowError> {
        let constrained = self.policy.constrained;
        let window = self.entity_mut(id)?;
        if window.maximized || constrained {
            return Ok(());
        }
        window.position = position;
        tracing::trace!(window_id = %id, x = position.x, y = position.y, "moved window");
        Ok(())
    }

    /// Store a new size, clamped to the minimum floor and the viewport
    /// ceiling. Same refusal rules as [`Self::update_window_position`].
    pub fn update_window_size(&mut self, id: R, size: Size) -> Result<(), UnknownWindowError> {
        let policy = self.policy;
        let window = self.entity_mut(id)?;
        if window.maximized || policy.constrained {
            return Ok(());
        }
        window.size = policy.clamp_size(size);
        tracing::trace!(
            window_id = %id,
            width = window.size.width,
            height = window.size.height,
            "resized window"
        );
        Ok(())
    }
}
