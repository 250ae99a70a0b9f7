//! Fallback for unmatched routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page page--not-found">
            <h1 class="page__title">"Page not found"</h1>
            <p class="page__lead">"There is no page at this address."</p>
            <a href="/" class="btn btn--primary">"Back to Home"</a>
        </section>
    }
}
