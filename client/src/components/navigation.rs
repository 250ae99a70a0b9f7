//! Fixed top navigation bar with route-aware active highlighting.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` above the route outlet. The current path comes from
//! the router; links are plain anchors so the router intercepts them as
//! client-side transitions.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::theme_switch::ThemeSwitch;

/// One link in the navigation list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
}

impl NavEntry {
    /// Exact path match. No prefix matching, so `/` is only active on `/`.
    #[must_use]
    pub fn is_active(&self, current: &str) -> bool {
        self.path == current
    }
}

/// Site order. Back/next links on each page follow the same sequence.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { path: "/", label: "Home" },
    NavEntry { path: "/overview", label: "Overview" },
    NavEntry { path: "/preprocessing", label: "Preprocessing" },
    NavEntry { path: "/analysis", label: "Analysis" },
    NavEntry { path: "/modeling", label: "Modeling" },
    NavEntry { path: "/results", label: "Results" },
    NavEntry { path: "/concepts", label: "Concepts" },
    NavEntry { path: "/downloads", label: "Downloads" },
    NavEntry { path: "/about", label: "About" },
];

/// Index of the entry matching `current`, if any.
#[must_use]
pub fn active_index(entries: &[NavEntry], current: &str) -> Option<usize> {
    entries.iter().position(|entry| entry.is_active(current))
}

/// Neighbours of `path` in site order: `(previous, next)`.
#[must_use]
pub fn neighbours(path: &str) -> (Option<&'static NavEntry>, Option<&'static NavEntry>) {
    let Some(index) = active_index(NAV_ENTRIES, path) else {
        return (None, None);
    };
    let previous = index.checked_sub(1).and_then(|i| NAV_ENTRIES.get(i));
    (previous, NAV_ENTRIES.get(index + 1))
}

/// Top navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();
    let menu_open = RwSignal::new(false);

    let render_links = move |class: &'static str, close_on_click: bool| {
        NAV_ENTRIES
            .iter()
            .map(|entry| {
                let entry = *entry;
                let is_active = move || location.pathname.with(|path| entry.is_active(path));
                view! {
                    <a
                        href=entry.path
                        class=class
                        class:nav__link--active=is_active
                        aria-current=move || is_active().then_some("page")
                        on:click=move |_| {
                            if close_on_click {
                                menu_open.set(false);
                            }
                        }
                    >
                        {entry.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <a href="/" class="nav__brand">
                    "\u{1F3E0} ML Project"
                </a>

                <div class="nav__links">{render_links("nav__link", false)}</div>

                <div class="nav__actions">
                    <ThemeSwitch />
                    <button
                        class="nav__menu-toggle"
                        title="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav__mobile">{render_links("nav__link nav__link--mobile", true)}</div>
            </Show>
        </nav>
    }
}
