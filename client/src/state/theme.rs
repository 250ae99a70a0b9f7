//! Theme preference and resolution types shared by the store and its consumers.
//!
//! DESIGN
//! ======
//! `ThemeState` is plain `Copy` data so it can live in an `RwSignal` and be
//! read from any component. The browser-facing store (`theme_store`) is the
//! only writer; components go through `ThemeHandle`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

/// `localStorage` key holding the persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// User-selected theme mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    /// First-run default. The OS signal is only consulted for `System`.
    #[default]
    Light,
    Dark,
    System,
}

impl ThemePreference {
    /// Menu order for the theme switch.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// Persisted literal.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{2600}",
            Self::Dark => "\u{263E}",
            Self::System => "\u{1F5A5}",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored value that is not one of the three preference literals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid theme preference: {0:?}")]
pub struct InvalidThemePreference(pub String);

impl FromStr for ThemePreference {
    type Err = InvalidThemePreference;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(InvalidThemePreference(other.to_owned())),
        }
    }
}

/// Concrete theme applied to the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Class name placed on the `<html>` element.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// Resolve a preference against the OS dark-mode signal.
///
/// An unavailable signal (`None`) counts as "not dark".
#[must_use]
pub fn resolve(preference: ThemePreference, prefers_dark: Option<bool>) -> ResolvedTheme {
    match preference {
        ThemePreference::Light => ResolvedTheme::Light,
        ThemePreference::Dark => ResolvedTheme::Dark,
        ThemePreference::System => ResolvedTheme::from_prefers_dark(prefers_dark.unwrap_or(false)),
    }
}

/// What consumers should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeDisplay {
    /// The persisted preference has not been read yet.
    Pending,
    Resolved(ResolvedTheme),
}

/// Snapshot of the theme store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub ready: bool,
    pub preference: ThemePreference,
    pub resolved: ResolvedTheme,
}

impl ThemeState {
    /// State before the persisted preference has been read.
    #[must_use]
    pub fn pending() -> Self {
        Self { ready: false, preference: ThemePreference::default(), resolved: ResolvedTheme::default() }
    }

    #[must_use]
    pub fn display(&self) -> ThemeDisplay {
        if self.ready { ThemeDisplay::Resolved(self.resolved) } else { ThemeDisplay::Pending }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::pending()
    }
}

/// Narrow read/set interface provided through Leptos context.
///
/// `set` only records the request; the store owner in `app` drains it,
/// persists, and publishes the new `ThemeState`.
#[derive(Clone, Copy, Debug)]
pub struct ThemeHandle {
    state: RwSignal<ThemeState>,
    requested: RwSignal<Option<ThemePreference>>,
}

impl ThemeHandle {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(ThemeState::pending()), requested: RwSignal::new(None) }
    }

    /// Current snapshot (tracked).
    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state.get()
    }

    #[must_use]
    pub fn display(&self) -> ThemeDisplay {
        self.state.get().display()
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.state.get().preference
    }

    /// Request a new preference.
    pub fn set(&self, preference: ThemePreference) {
        self.requested.set(Some(preference));
    }

    /// Take the pending request, if any (tracked, so an effect re-runs on `set`).
    pub(crate) fn take_request(&self) -> Option<ThemePreference> {
        let request = self.requested.get()?;
        self.requested.update_untracked(|request| *request = None);
        Some(request)
    }

    pub(crate) fn publish(&self, state: ThemeState) {
        if self.state.get_untracked() != state {
            self.state.set(state);
        }
    }
}

impl Default for ThemeHandle {
    fn default() -> Self {
        Self::new()
    }
}
