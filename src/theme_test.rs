use super::*;
use crate::prefs::MemoryStore;

#[test]
fn initial_theme_comes_from_store() {
    let ctl = ThemeController::new(MemoryStore::with_raw("dark"));
    assert_eq!(ctl.current(), Theme::Dark);
}

#[test]
fn initial_theme_defaults_light() {
    let ctl = ThemeController::new(MemoryStore::new());
    assert_eq!(ctl.current(), Theme::Light);
    assert_eq!(ctl.store().writes, 0);
}

#[test]
fn toggle_flips_and_persists() {
    let mut ctl = ThemeController::new(MemoryStore::new());
    assert_eq!(ctl.toggle(), Theme::Dark);
    assert_eq!(ctl.store().raw(), Some("dark"));
    assert_eq!(ctl.toggle(), Theme::Light);
    assert_eq!(ctl.store().raw(), Some("light"));
}

#[test]
fn toggle_parity_over_sequences() {
    for n in 0..12 {
        let mut ctl = ThemeController::new(MemoryStore::new());
        for _ in 0..n {
            ctl.toggle();
            assert_eq!(ctl.store().get(), ctl.current());
        }
        let expected = if n % 2 == 0 { Theme::Light } else { Theme::Dark };
        assert_eq!(ctl.current(), expected, "after {n} toggles");
        assert_eq!(ctl.store().writes, n);
    }
}

#[test]
fn toggle_recovers_from_invalid_stored_value() {
    let mut ctl = ThemeController::new(MemoryStore::with_raw("neon"));
    assert_eq!(ctl.current(), Theme::Light);
    ctl.toggle();
    assert_eq!(ctl.store().raw(), Some("dark"));
}

#[test]
fn shared_controller_keeps_triggers_in_sync() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let ctl = Rc::new(RefCell::new(ThemeController::new(MemoryStore::new())));
    let desktop = Rc::clone(&ctl);
    let mobile = Rc::clone(&ctl);

    desktop.borrow_mut().toggle();
    assert_eq!(mobile.borrow().current(), Theme::Dark);
    mobile.borrow_mut().toggle();
    assert_eq!(desktop.borrow().current(), Theme::Light);
}

#[test]
fn spin_transforms() {
    assert_eq!(SPIN_TRANSFORM, "rotate(360deg)");
    assert_eq!(REST_TRANSFORM, "rotate(0deg)");
}
