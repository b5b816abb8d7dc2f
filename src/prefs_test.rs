use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_string_forms() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn theme_class_names() {
    assert_eq!(Theme::Light.class_name(), "light-theme");
    assert_eq!(Theme::Dark.class_name(), "dark-theme");
    assert!(Theme::ALL_CLASSES.contains(&Theme::Light.class_name()));
    assert!(Theme::ALL_CLASSES.contains(&Theme::Dark.class_name()));
}

#[test]
fn theme_flipped_is_involution() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped().flipped(), Theme::Dark);
}

#[test]
fn theme_parses_known_values() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
}

#[test]
fn theme_rejects_unknown_values() {
    assert_eq!("Dark".parse::<Theme>(), Err(UnknownTheme("Dark".into())));
    assert!("".parse::<Theme>().is_err());
}

// =============================================================
// theme_from_stored
// =============================================================

#[test]
fn stored_absent_defaults_light() {
    assert_eq!(theme_from_stored(None), Theme::Light);
}

#[test]
fn stored_invalid_defaults_light() {
    assert_eq!(theme_from_stored(Some("purple")), Theme::Light);
}

#[test]
fn stored_dark_is_dark() {
    assert_eq!(theme_from_stored(Some("dark")), Theme::Dark);
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_starts_empty_and_light() {
    let store = MemoryStore::new();
    assert_eq!(store.raw(), None);
    assert_eq!(store.get(), Theme::Light);
}

#[test]
fn memory_store_set_then_get() {
    let mut store = MemoryStore::new();
    store.set(Theme::Dark);
    assert_eq!(store.get(), Theme::Dark);
    assert_eq!(store.raw(), Some("dark"));
    assert_eq!(store.writes, 1);
}

#[test]
fn memory_store_invalid_raw_reads_light() {
    let store = MemoryStore::with_raw("sepia");
    assert_eq!(store.get(), Theme::Light);
}

#[test]
fn boxed_store_delegates() {
    let mut store: Box<dyn PreferenceStore> = Box::new(MemoryStore::with_raw("dark"));
    assert_eq!(store.get(), Theme::Dark);
    store.set(Theme::Light);
    assert_eq!(store.get(), Theme::Light);
}

// =============================================================
// Storage failures
// =============================================================

/// Stands in for disabled storage: reads fail, writes go nowhere.
struct UnavailableStore {
    attempted_writes: usize,
}

impl PreferenceStore for UnavailableStore {
    fn get(&self) -> Theme {
        theme_from_read::<&str>(Err("SecurityError: storage disabled"))
    }

    fn set(&mut self, _theme: Theme) {
        self.attempted_writes += 1;
    }
}

#[test]
fn failed_read_is_light() {
    assert_eq!(theme_from_read::<String>(Err("QuotaExceededError".into())), Theme::Light);
}

#[test]
fn successful_read_resolves_value() {
    assert_eq!(theme_from_read::<String>(Ok(Some("dark".into()))), Theme::Dark);
    assert_eq!(theme_from_read::<String>(Ok(None)), Theme::Light);
    assert_eq!(theme_from_read::<String>(Ok(Some("mauve".into()))), Theme::Light);
}

#[test]
fn controller_keeps_state_when_writes_are_dropped() {
    use crate::theme::ThemeController;

    let mut ctl = ThemeController::new(UnavailableStore { attempted_writes: 0 });
    assert_eq!(ctl.current(), Theme::Light);
    assert_eq!(ctl.toggle(), Theme::Dark);
    assert_eq!(ctl.current(), Theme::Dark);
    assert_eq!(ctl.store().get(), Theme::Light);
    assert_eq!(ctl.store().attempted_writes, 1);
    assert_eq!(ctl.toggle(), Theme::Light);
}
