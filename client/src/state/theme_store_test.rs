use super::*;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory host. Shared handles let tests inspect state the store owns.
#[derive(Clone, Default)]
struct FakeHost {
    storage: Rc<RefCell<HashMap<String, String>>>,
    storage_disabled: Rc<Cell<bool>>,
    prefers_dark: Rc<Cell<Option<bool>>>,
    listeners: Rc<Cell<usize>>,
    watch_fails: Rc<Cell<bool>>,
    applied: Rc<RefCell<Vec<ResolvedTheme>>>,
}

impl FakeHost {
    fn with_stored(value: &str) -> Self {
        let host = Self::default();
        host.storage
            .borrow_mut()
            .insert(THEME_STORAGE_KEY.to_owned(), value.to_owned());
        host
    }

    fn stored(&self) -> Option<String> {
        self.storage.borrow().get(THEME_STORAGE_KEY).cloned()
    }

    fn last_applied(&self) -> Option<ResolvedTheme> {
        self.applied.borrow().last().copied()
    }
}

struct FakeWatch {
    listeners: Rc<Cell<usize>>,
}

impl Drop for FakeWatch {
    fn drop(&mut self) {
        self.listeners.set(self.listeners.get() - 1);
    }
}

impl ThemeHost for FakeHost {
    type Watch = FakeWatch;

    fn load_preference(&self, key: &str) -> Result<Option<String>, ThemeHostError> {
        if self.storage_disabled.get() {
            return Err(ThemeHostError::StorageUnavailable);
        }
        Ok(self.storage.borrow().get(key).cloned())
    }

    fn save_preference(&self, key: &str, value: &str) -> Result<(), ThemeHostError> {
        if self.storage_disabled.get() {
            return Err(ThemeHostError::StorageUnavailable);
        }
        self.storage.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark.get()
    }

    fn watch_prefers_dark(&self, _on_change: Rc<dyn Fn(bool)>) -> Result<Self::Watch, ThemeHostError> {
        if self.watch_fails.get() {
            return Err(ThemeHostError::MediaQueryUnavailable);
        }
        self.listeners.set(self.listeners.get() + 1);
        Ok(FakeWatch { listeners: Rc::clone(&self.listeners) })
    }

    fn apply(&self, theme: ResolvedTheme) {
        self.applied.borrow_mut().push(theme);
    }
}

fn init(host: &FakeHost) -> ThemeStore<FakeHost> {
    let mut store = ThemeStore::new(host.clone());
    store.init(|_| {});
    store
}

// =============================================================
// Init
// =============================================================

#[test]
fn new_store_is_pending_and_applies_nothing() {
    let host = FakeHost::default();
    let store = ThemeStore::new(host.clone());
    assert!(!store.state().ready);
    assert!(host.applied.borrow().is_empty());
    assert_eq!(host.stored(), None);
}

#[test]
fn first_run_defaults_to_light_and_persists_it() {
    let host = FakeHost::default();
    host.prefers_dark.set(Some(true));
    let store = init(&host);

    let state = store.state();
    assert!(state.ready);
    assert_eq!(state.preference, ThemePreference::Light);
    assert_eq!(state.resolved, ResolvedTheme::Light);
    assert_eq!(host.stored().as_deref(), Some("light"));
    assert_eq!(host.last_applied(), Some(ResolvedTheme::Light));
}

#[test]
fn invalid_stored_value_falls_back_and_is_overwritten() {
    let host = FakeHost::with_stored("blue");
    let store = init(&host);

    assert_eq!(store.state().preference, ThemePreference::Light);
    assert_eq!(host.stored().as_deref(), Some("light"));
}

#[test]
fn set_then_reload_reads_back_each_preference() {
    for pref in ThemePreference::ALL {
        let host = FakeHost::default();
        let mut store = init(&host);
        store.set(pref);
        store.teardown();

        let reloaded = init(&host);
        assert_eq!(reloaded.state().preference, pref);
        assert_eq!(host.stored().as_deref(), Some(pref.as_str()));
    }
}

#[test]
fn init_is_idempotent() {
    let host = FakeHost::with_stored("dark");
    let mut store = init(&host);
    host.storage
        .borrow_mut()
        .insert(THEME_STORAGE_KEY.to_owned(), "light".to_owned());

    let state = store.init(|_| {});
    assert_eq!(state.preference, ThemePreference::Dark);
    assert_eq!(host.applied.borrow().len(), 1);
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn system_preference_follows_os_signal() {
    let host = FakeHost::with_stored("system");
    host.prefers_dark.set(Some(true));
    assert_eq!(init(&host).state().resolved, ResolvedTheme::Dark);

    let host = FakeHost::with_stored("system");
    host.prefers_dark.set(Some(false));
    assert_eq!(init(&host).state().resolved, ResolvedTheme::Light);
}

#[test]
fn system_preference_without_signal_is_light() {
    let host = FakeHost::with_stored("system");
    host.prefers_dark.set(None);
    assert_eq!(init(&host).state().resolved, ResolvedTheme::Light);
}

#[test]
fn dark_preference_ignores_os_signal() {
    let host = FakeHost::with_stored("dark");
    host.prefers_dark.set(Some(false));
    let store = init(&host);
    assert_eq!(store.state().resolved, ResolvedTheme::Dark);
    assert_eq!(host.last_applied(), Some(ResolvedTheme::Dark));
}

// =============================================================
// Subscription lifecycle
// =============================================================

#[test]
fn listener_registered_only_in_system_mode() {
    let host = FakeHost::default();
    let mut store = init(&host);
    assert!(!store.is_watching());
    assert_eq!(host.listeners.get(), 0);

    store.set(ThemePreference::System);
    assert!(store.is_watching());
    assert_eq!(host.listeners.get(), 1);

    store.set(ThemePreference::System);
    assert_eq!(host.listeners.get(), 1);

    store.set(ThemePreference::Dark);
    assert!(!store.is_watching());
    assert_eq!(host.listeners.get(), 0);
}

#[test]
fn teardown_releases_listener() {
    let host = FakeHost::with_stored("system");
    let mut store = init(&host);
    assert_eq!(host.listeners.get(), 1);

    store.teardown();
    assert_eq!(host.listeners.get(), 0);
}

#[test]
fn dropping_store_releases_listener() {
    let host = FakeHost::with_stored("system");
    let store = init(&host);
    assert_eq!(host.listeners.get(), 1);

    drop(store);
    assert_eq!(host.listeners.get(), 0);
}

#[test]
fn system_change_reapplies_theme() {
    let host = FakeHost::with_stored("system");
    host.prefers_dark.set(Some(false));
    let mut store = init(&host);

    let state = store.handle_system_change(true);
    assert_eq!(state.resolved, ResolvedTheme::Dark);
    assert_eq!(host.last_applied(), Some(ResolvedTheme::Dark));

    let state = store.handle_system_change(false);
    assert_eq!(state.resolved, ResolvedTheme::Light);
}

#[test]
fn system_change_ignored_outside_system_mode() {
    let host = FakeHost::with_stored("light");
    let mut store = init(&host);
    let applied_before = host.applied.borrow().len();

    let state = store.handle_system_change(true);
    assert_eq!(state.resolved, ResolvedTheme::Light);
    assert_eq!(host.applied.borrow().len(), applied_before);
}

#[test]
fn listener_receives_the_init_callback() {
    let host = FakeHost::with_stored("light");
    let seen = Rc::new(Cell::new(None::<bool>));
    let seen_cb = Rc::clone(&seen);
    let mut store = ThemeStore::new(host.clone());
    store.init(move |dark| seen_cb.set(Some(dark)));

    let on_change = store.on_system_change.clone().expect("listener stored on init");
    on_change(true);
    assert_eq!(seen.get(), Some(true));
}

#[test]
fn watch_failure_still_resolves() {
    let host = FakeHost::with_stored("system");
    host.watch_fails.set(true);
    host.prefers_dark.set(Some(true));
    let store = init(&host);

    assert!(!store.is_watching());
    assert_eq!(store.state().resolved, ResolvedTheme::Dark);
}

// =============================================================
// Persistence failures and hydration guard
// =============================================================

#[test]
fn storage_unavailable_keeps_in_memory_preference() {
    let host = FakeHost::default();
    host.storage_disabled.set(true);
    let mut store = init(&host);
    assert_eq!(store.state().preference, ThemePreference::Light);

    let state = store.set(ThemePreference::Dark);
    assert_eq!(state.preference, ThemePreference::Dark);
    assert_eq!(state.resolved, ResolvedTheme::Dark);
    assert_eq!(host.stored(), None);

    let reloaded = init(&host);
    assert_eq!(reloaded.state().preference, ThemePreference::Light);
}

#[test]
fn set_before_init_persists_without_applying() {
    let host = FakeHost::default();
    let mut store = ThemeStore::new(host.clone());

    let state = store.set(ThemePreference::Dark);
    assert!(!state.ready);
    assert!(host.applied.borrow().is_empty());
    assert_eq!(host.stored().as_deref(), Some("dark"));

    let state = store.init(|_| {});
    assert_eq!(state.preference, ThemePreference::Dark);
    assert_eq!(host.last_applied(), Some(ResolvedTheme::Dark));
}
