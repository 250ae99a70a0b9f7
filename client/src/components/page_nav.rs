//! Back/next links at the bottom of each content page.

use leptos::prelude::*;

use crate::components::navigation::neighbours;

#[component]
pub fn PageNav(
    /// Path of the page rendering the links.
    current: &'static str,
) -> impl IntoView {
    let (previous, next) = neighbours(current);

    view! {
        <div class="page-nav">
            {previous.map(|entry| {
                view! {
                    <a href=entry.path class="btn btn--outline page-nav__link">
                        "\u{2190} Back to "
                        {entry.label}
                    </a>
                }
            })}
            <span class="page-nav__spacer"></span>
            {next.map(|entry| {
                view! {
                    <a href=entry.path class="btn btn--primary page-nav__link">
                        "Next: "
                        {entry.label}
                        " \u{2192}"
                    </a>
                }
            })}
        </div>
    }
}
