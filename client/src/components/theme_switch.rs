//! Theme selection menu.
//!
//! Pure consumer of `ThemeHandle`; the only local state is whether the menu is
//! open. Until the stored preference has been read the trigger renders as a
//! disabled placeholder so the server markup never commits to a theme.

use leptos::prelude::*;

use crate::state::theme::{ThemeDisplay, ThemeHandle, ThemePreference};

#[component]
pub fn ThemeSwitch() -> impl IntoView {
    let theme = expect_context::<ThemeHandle>();
    let open = RwSignal::new(false);

    let pending = move || theme.display() == ThemeDisplay::Pending;
    let trigger_icon = move || match theme.display() {
        ThemeDisplay::Pending => "\u{25CC}",
        ThemeDisplay::Resolved(_) => theme.preference().icon(),
    };

    let render_options = move || {
        ThemePreference::ALL
            .into_iter()
            .map(|preference| {
                let is_current = move || theme.preference() == preference;
                view! {
                    <button
                        class="theme-switch__option"
                        class:theme-switch__option--active=is_current
                        role="menuitemradio"
                        aria-checked=move || is_current().to_string()
                        on:click=move |_| {
                            theme.set(preference);
                            open.set(false);
                        }
                    >
                        <span class="theme-switch__icon">{preference.icon()}</span>
                        <span class="theme-switch__label">{preference.label()}</span>
                        <span class="theme-switch__check">{move || if is_current() { "\u{2713}" } else { "" }}</span>
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="theme-switch" class:theme-switch--pending=pending>
            <button
                class="theme-switch__trigger"
                title="Toggle theme"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                disabled=pending
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {trigger_icon}
            </button>
            <Show when=move || open.get() && !pending()>
                <div class="theme-switch__menu" role="menu">
                    {render_options()}
                </div>
            </Show>
        </div>
    }
}
