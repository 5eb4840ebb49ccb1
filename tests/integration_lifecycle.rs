use folio_wm::content::{ContentId, browser_seeds, portfolio_manager};
use folio_wm::layout::floating::drag_position;
use folio_wm::viewport::{ViewportConfig, ViewportPolicy};
use folio_wm::window::{
    PointerController, Position, Size, UnknownWindowError, WindowEntity, WindowManager,
};

fn desktop_policy() -> ViewportPolicy {
    ViewportConfig::BROWSER
        .with_taskbar_height(56)
        .classify(1920, 1080)
}

fn manager() -> WindowManager<ContentId> {
    portfolio_manager(desktop_policy(), browser_seeds())
}

fn assert_focus_invariant(wm: &WindowManager<ContentId>) {
    if let Some(id) = wm.active_window() {
        let w = wm.window(id).unwrap();
        assert!(w.is_open() && !w.is_minimized(), "{id} is active but hidden");
    }
}

#[test]
fn first_open_takes_counter_to_eleven() {
    let mut wm = manager();
    assert_eq!(wm.active_window(), None);
    assert_eq!(wm.highest_z_index(), 10);
    wm.open_window(ContentId::Projects).unwrap();
    let projects = wm.window(ContentId::Projects).unwrap();
    assert!(projects.is_open());
    assert_eq!(projects.z_index(), 11);
    assert_eq!(wm.active_window(), Some(ContentId::Projects));
}

#[test]
fn later_open_stacks_above() {
    let mut wm = manager();
    wm.open_window(ContentId::Projects).unwrap();
    wm.open_window(ContentId::Contact).unwrap();
    let projects = wm.window(ContentId::Projects).unwrap().z_index();
    let contact = wm.window(ContentId::Contact).unwrap().z_index();
    assert!(contact > projects);
    assert_eq!(wm.active_window(), Some(ContentId::Contact));
}

#[test]
fn refocus_restacks() {
    let mut wm = manager();
    wm.open_window(ContentId::Projects).unwrap();
    wm.open_window(ContentId::Contact).unwrap();
    wm.set_active_window(ContentId::Projects).unwrap();
    wm.set_active_window(ContentId::Projects).unwrap();
    let projects = wm.window(ContentId::Projects).unwrap().z_index();
    let contact = wm.window(ContentId::Contact).unwrap().z_index();
    assert!(projects > contact);
    assert_eq!(projects, wm.highest_z_index());
    assert_eq!(wm.active_window(), Some(ContentId::Projects));
}

#[test]
fn minimizing_only_window_clears_focus() {
    let mut wm = manager();
    wm.open_window(ContentId::Projects).unwrap();
    wm.minimize_window(ContentId::Projects).unwrap();
    let projects = wm.window(ContentId::Projects).unwrap();
    assert_eq!(wm.active_window(), None);
    assert!(projects.is_minimized());
    assert!(projects.is_open());
}

#[test]
fn minimize_hands_focus_to_next_highest() {
    let mut wm = manager();
    wm.open_window(ContentId::AboutMe).unwrap();
    wm.open_window(ContentId::Games).unwrap();
    wm.open_window(ContentId::Contact).unwrap();
    wm.minimize_window(ContentId::Games).unwrap();
    wm.minimize_window(ContentId::Contact).unwrap();
    assert_eq!(wm.active_window(), Some(ContentId::AboutMe));
}

#[test]
fn maximize_restore_round_trip() {
    let mut wm = manager();
    wm.open_window(ContentId::Projects).unwrap();
    let before = wm.window(ContentId::Projects).unwrap().rect();
    assert_eq!(before.position, Position::new(40, 40));
    assert_eq!(before.size, Size::new(700, 500));
    wm.maximize_window(ContentId::Projects).unwrap();
    assert_eq!(
        wm.effective_rect(ContentId::Projects),
        Some(desktop_policy().desktop_bounds())
    );
    wm.restore_window(ContentId::Projects).unwrap();
    let after = wm.window(ContentId::Projects).unwrap();
    assert!(!after.is_maximized());
    assert_eq!(after.rect(), before);
}

#[test]
fn minimize_then_reopen_preserves_geometry() {
    let mut wm = manager();
    wm.open_window(ContentId::Studies).unwrap();
    wm.update_window_position(ContentId::Studies, Position::new(333, 222))
        .unwrap();
    wm.update_window_size(ContentId::Studies, Size::new(640, 480))
        .unwrap();
    let before = wm.window(ContentId::Studies).unwrap().rect();
    wm.minimize_window(ContentId::Studies).unwrap();
    wm.open_window(ContentId::Studies).unwrap();
    assert_eq!(wm.window(ContentId::Studies).unwrap().rect(), before);
    wm.minimize_window(ContentId::Studies).unwrap();
    wm.restore_window(ContentId::Studies).unwrap();
    assert_eq!(wm.window(ContentId::Studies).unwrap().rect(), before);
}

#[test]
fn close_resets_flags() {
    let mut wm = manager();
    wm.open_window(ContentId::Games).unwrap();
    wm.maximize_window(ContentId::Games).unwrap();
    wm.minimize_window(ContentId::Games).unwrap();
    wm.close_window(ContentId::Games).unwrap();
    let games = wm.window(ContentId::Games).unwrap();
    assert!(!games.is_open());
    assert!(!games.is_minimized());
    assert!(!games.is_maximized());
}

#[test]
fn geometry_is_frozen_while_maximized() {
    let mut wm = manager();
    wm.open_window(ContentId::Contact).unwrap();
    let before = wm.window(ContentId::Contact).unwrap().rect();
    wm.maximize_window(ContentId::Contact).unwrap();
    wm.update_window_position(ContentId::Contact, Position::new(1, 1))
        .unwrap();
    wm.update_window_size(ContentId::Contact, Size::new(900, 900))
        .unwrap();
    assert_eq!(wm.window(ContentId::Contact).unwrap().rect(), before);
}

#[test]
fn drag_by_delta_without_clamping() {
    let mut wm = manager();
    wm.open_window(ContentId::Studies).unwrap();
    wm.update_window_position(ContentId::Studies, Position::new(100, 100))
        .unwrap();
    let mut pointer = PointerController::new();
    assert!(
        pointer
            .begin_drag(&mut wm, ContentId::Studies, Position::new(130, 110))
            .unwrap()
    );
    pointer
        .pointer_move(&mut wm, Position::new(180, 90))
        .unwrap();
    pointer.pointer_up();
    assert_eq!(
        wm.window(ContentId::Studies).unwrap().position(),
        Position::new(150, 80)
    );
}

#[test]
fn drag_is_clamped_to_desktop() {
    let policy = desktop_policy();
    let size = Size::new(600, 450);
    let grab = Position::new(10, 10);
    assert_eq!(
        drag_position(Position::new(-50, -50), grab, size, &policy),
        Position::new(0, 0)
    );
    assert_eq!(
        drag_position(Position::new(5000, 5000), grab, size, &policy),
        Position::new(1920 - 600, 1080 - 56 - 450)
    );
}

type Snapshot = (u32, Option<ContentId>, Vec<WindowEntity<ContentId>>);

fn snapshot(wm: &WindowManager<ContentId>) -> Snapshot {
    (
        wm.highest_z_index(),
        wm.active_window(),
        wm.windows().cloned().collect(),
    )
}

#[test]
fn unseeded_ids_are_rejected_without_side_effects() {
    // every surface except videos
    let seeds = browser_seeds()
        .into_iter()
        .filter(|seed| seed.id != ContentId::Videos);
    let mut wm = WindowManager::new(desktop_policy(), seeds);
    wm.open_window(ContentId::Projects).unwrap();
    wm.open_window(ContentId::Games).unwrap();
    wm.minimize_window(ContentId::Games).unwrap();
    let before = snapshot(&wm);

    let missing = ContentId::Videos;
    let expected = Err(UnknownWindowError::new("videos"));
    assert_eq!(wm.open_window(missing), expected);
    assert_eq!(wm.close_window(missing), expected);
    assert_eq!(wm.minimize_window(missing), expected);
    assert_eq!(wm.maximize_window(missing), expected);
    assert_eq!(wm.restore_window(missing), expected);
    assert_eq!(wm.toggle_maximize(missing), expected);
    assert_eq!(wm.set_active_window(missing), expected);
    assert_eq!(
        wm.update_window_position(missing, Position::new(5, 5)),
        expected
    );
    assert_eq!(wm.update_window_size(missing, Size::new(400, 300)), expected);

    assert_eq!(snapshot(&wm), before);
    assert!(wm.window(missing).is_none());
    assert_eq!(wm.effective_rect(missing), None);
}

// Small deterministic generator so the sequence is stable across runs.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[(self.next() as usize) % items.len()]
    }
}

#[test]
fn invariants_hold_across_random_operations() {
    let mut wm = manager();
    let mut rng = Lcg(0x5eed);
    let policy = desktop_policy();
    for step in 0..2000 {
        let id = rng.pick(&ContentId::ALL);
        let z_before = wm.highest_z_index();
        let visible_before = wm.window(id).unwrap().is_visible();
        let open_before = wm.window(id).unwrap().is_open();
        match rng.next() % 9 {
            0 | 1 => {
                wm.open_window(id).unwrap();
                assert!(wm.highest_z_index() > z_before);
                assert_eq!(wm.window(id).unwrap().z_index(), wm.highest_z_index());
            }
            2 => wm.close_window(id).unwrap(),
            3 => wm.minimize_window(id).unwrap(),
            4 => {
                wm.maximize_window(id).unwrap();
                if open_before {
                    assert!(wm.highest_z_index() > z_before);
                    assert_eq!(wm.window(id).unwrap().z_index(), wm.highest_z_index());
                }
            }
            5 => wm.restore_window(id).unwrap(),
            6 => {
                wm.set_active_window(id).unwrap();
                if visible_before {
                    assert!(wm.highest_z_index() > z_before);
                    assert_eq!(wm.active_window(), Some(id));
                }
            }
            7 => {
                let size = Size::new((rng.next() % 2500) as u16, (rng.next() % 1500) as u16);
                wm.update_window_size(id, size).unwrap();
            }
            _ => {
                let x = (rng.next() % 2000) as i32 - 100;
                let y = (rng.next() % 1200) as i32 - 100;
                wm.update_window_position(id, Position::new(x, y)).unwrap();
            }
        }
        assert_focus_invariant(&wm);
        for w in wm.windows() {
            assert!(
                w.size().width >= policy.min_width && w.size().height >= policy.min_height,
                "step {step}: {} shrank below the floor",
                w.id()
            );
        }
    }
}
