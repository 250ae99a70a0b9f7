//! Persisted theme store.
//!
//! The store is the single writer of `ThemeState`. It reads the persisted
//! preference once on `init`, resolves it (consulting the OS signal only for
//! `System`), applies the result to the document through its host, and
//! holds the OS listener only while the preference is `System`.
//!
//! TRADE-OFFS
//! ==========
//! Host failures (storage disabled, no `matchMedia`) are logged and absorbed.
//! A failed save keeps the in-memory preference for the rest of the session.

#[cfg(test)]
#[path = "theme_store_test.rs"]
mod theme_store_test;

use std::rc::Rc;

use crate::state::theme::{ResolvedTheme, THEME_STORAGE_KEY, ThemePreference, ThemeState, resolve};

/// Failures reported by a `ThemeHost`. None of them reach the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeHostError {
    #[error("persistent storage is unavailable")]
    StorageUnavailable,
    #[error("storage access failed: {0}")]
    Storage(String),
    #[error("color-scheme media query is unavailable")]
    MediaQueryUnavailable,
    #[error("failed to register color-scheme listener: {0}")]
    Listener(String),
}

/// Environment the store runs against: persistence, the OS color-scheme
/// signal, and the document styling hook.
pub trait ThemeHost {
    /// Registration guard; dropping it deregisters the listener.
    type Watch;

    fn load_preference(&self, key: &str) -> Result<Option<String>, ThemeHostError>;

    fn save_preference(&self, key: &str, value: &str) -> Result<(), ThemeHostError>;

    /// `None` when the signal cannot be queried.
    fn prefers_dark(&self) -> Option<bool>;

    fn watch_prefers_dark(&self, on_change: Rc<dyn Fn(bool)>) -> Result<Self::Watch, ThemeHostError>;

    fn apply(&self, theme: ResolvedTheme);
}

pub struct ThemeStore<H: ThemeHost> {
    host: H,
    state: ThemeState,
    watch: Option<H::Watch>,
    on_system_change: Option<Rc<dyn Fn(bool)>>,
}

impl<H: ThemeHost> ThemeStore<H> {
    /// Create an uninitialized store. Nothing is read or applied until `init`.
    pub fn new(host: H) -> Self {
        Self { host, state: ThemeState::pending(), watch: None, on_system_change: None }
    }

    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state
    }

    /// Whether an OS color-scheme listener is currently registered.
    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.watch.is_some()
    }

    /// Read the persisted preference and apply it.
    ///
    /// An absent or unrecognized value falls back to `Light` and is
    /// overwritten. `on_system_change` receives OS signal changes while the
    /// preference is `System`; the owner feeds them back through
    /// `handle_system_change`. Calling `init` again is a no-op.
    pub fn init(&mut self, on_system_change: impl Fn(bool) + 'static) -> ThemeState {
        if self.state.ready {
            return self.state;
        }

        let preference = match self.load() {
            Some(preference) => preference,
            None => {
                let fallback = ThemePreference::default();
                self.persist(fallback);
                fallback
            }
        };

        log::debug!("theme store initialized with preference {preference}");
        self.on_system_change = Some(Rc::new(on_system_change));
        self.state.ready = true;
        self.transition(preference)
    }

    /// Persist and apply a new preference.
    ///
    /// Before `init` the preference is persisted and recorded but nothing is
    /// applied to the document.
    pub fn set(&mut self, preference: ThemePreference) -> ThemeState {
        self.persist(preference);
        self.transition(preference)
    }

    /// React to an OS color-scheme change.
    ///
    /// Events arriving while the preference is not `System` are stale and
    /// ignored.
    pub fn handle_system_change(&mut self, prefers_dark: bool) -> ThemeState {
        if !self.state.ready || self.state.preference != ThemePreference::System {
            return self.state;
        }
        self.apply(ResolvedTheme::from_prefers_dark(prefers_dark))
    }

    /// Release the OS listener. The last applied theme stays on the document.
    pub fn teardown(&mut self) {
        self.watch = None;
        self.on_system_change = None;
    }

    fn load(&self) -> Option<ThemePreference> {
        match self.host.load_preference(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse::<ThemePreference>() {
                Ok(preference) => Some(preference),
                Err(e) => {
                    log::warn!("discarding stored theme: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("theme preference not loaded: {e}");
                None
            }
        }
    }

    fn persist(&self, preference: ThemePreference) {
        if let Err(e) = self.host.save_preference(THEME_STORAGE_KEY, preference.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
    }

    fn transition(&mut self, preference: ThemePreference) -> ThemeState {
        self.state.preference = preference;
        if !self.state.ready {
            return self.state;
        }

        if preference == ThemePreference::System {
            self.ensure_watch();
        } else {
            self.watch = None;
        }

        self.apply(resolve(preference, self.host.prefers_dark()))
    }

    fn ensure_watch(&mut self) {
        if self.watch.is_some() {
            return;
        }
        let Some(on_change) = self.on_system_change.clone() else {
            return;
        };
        match self.host.watch_prefers_dark(on_change) {
            Ok(watch) => self.watch = Some(watch),
            Err(e) => log::warn!("system theme changes will not be followed: {e}"),
        }
    }

    fn apply(&mut self, resolved: ResolvedTheme) -> ThemeState {
        self.state.resolved = resolved;
        self.host.apply(resolved);
        self.state
    }
}
