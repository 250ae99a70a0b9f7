//! Horizontal bar that fills to its value the first time it is seen.

#[cfg(test)]
#[path = "progress_bar_test.rs"]
mod progress_bar_test;

use leptos::prelude::*;

/// Clamp a percentage into `0..=100`. Non-finite input is empty.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 }
}

#[component]
pub fn ProgressBar(
    /// Fill percentage.
    value: f64,
    /// Colour modifier, e.g. `blue` -> `progress__fill--blue`.
    #[prop(optional)]
    accent: Option<&'static str>,
    /// Transition delay in seconds.
    #[prop(optional)]
    delay_s: f64,
) -> impl IntoView {
    let target = clamp_percent(value);
    let filled = RwSignal::new(false);
    let track_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    crate::util::visibility::reveal_once(move || track_ref.get().map(web_sys::Element::from), move || filled.set(true));

    let fill_class = format!("progress__fill progress__fill--{}", accent.unwrap_or("blue"));
    let style = move || {
        let width = if filled.get() { target } else { 0.0 };
        format!("width: {width}%; transition-delay: {delay_s}s;")
    };

    view! {
        <div class="progress" node_ref=track_ref>
            <div class=fill_class style=style></div>
        </div>
    }
}
