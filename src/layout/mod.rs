pub mod floating;

use ratatui::prelude::Rect;

/// Clickable regions recorded while drawing a frame, checked in insertion
/// order on the next pointer event.
#[derive(Debug, Clone)]
pub struct RegionMap<T: Copy + Eq> {
    regions: Vec<(T, Rect)>,
}

impl<T: Copy + Eq> Default for RegionMap<T> {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
        }
    }
}

impl<T: Copy + Eq> RegionMap<T> {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn set(&mut self, id: T, rect: Rect) {
        if let Some(entry) = self.regions.iter_mut().find(|(existing, _)| *existing == id) {
            entry.1 = rect;
        } else {
            self.regions.push((id, rect));
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<T> {
        self.regions
            .iter()
            .find(|(_, rect)| rect_contains(*rect, column, row))
            .map(|(id, _)| *id)
    }
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let max_x = rect.x.saturating_add(rect.width);
    let max_y = rect.y.saturating_add(rect.height);
    column >= rect.x && column < max_x && row >= rect.y && row < max_y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_map_set_and_hit_test() {
        let mut map = RegionMap::default();
        let a = Rect::new(0, 0, 5, 1);
        let b = Rect::new(6, 0, 5, 1);
        map.set(1u8, a);
        map.set(2u8, b);
        assert_eq!(map.hit_test(2, 0), Some(1u8));
        assert_eq!(map.hit_test(7, 0), Some(2u8));
        assert_eq!(map.hit_test(100, 100), None);
        map.clear();
        assert_eq!(map.hit_test(2, 0), None);
    }

    #[test]
    fn region_map_set_replaces_existing() {
        let mut map = RegionMap::default();
        map.set('a', Rect::new(0, 0, 1, 1));
        map.set('a', Rect::new(4, 4, 1, 1));
        assert_eq!(map.hit_test(0, 0), None);
        assert_eq!(map.hit_test(4, 4), Some('a'));
    }

    #[test]
    fn rect_contains_edge_cases() {
        let r = Rect::new(0, 0, 0, 5);
        assert!(!rect_contains(r, 0, 0));
        let r2 = Rect::new(1, 1, 3, 3);
        assert!(rect_contains(r2, 1, 1));
        assert!(!rect_contains(r2, 4, 1));
    }
}
