//! Feature selection: RFE-selected features, VIF-dropped features.

use leptos::prelude::*;

use crate::components::page_nav::PageNav;
use crate::components::progress_bar::ProgressBar;
use crate::content::{DROPPED_FEATURES, RFE_STEPS, SELECTED_FEATURES, VifBand};

#[component]
pub fn ModelingPage() -> impl IntoView {
    let selected = SELECTED_FEATURES
        .iter()
        .enumerate()
        .map(|(i, feature)| {
            #[allow(clippy::cast_precision_loss)]
            let delay_s = i as f64 * 0.1;
            view! {
                <div class="feature">
                    <div class="feature__head">
                        <span class="feature__name">"\u{2713} " {feature.name}</span>
                        <span class="badge badge--outline">{format!("{:.2}", feature.importance)}</span>
                    </div>
                    <ProgressBar value=feature.importance * 100.0 accent="green" delay_s=delay_s />
                </div>
            }
        })
        .collect::<Vec<_>>();

    let dropped = DROPPED_FEATURES
        .iter()
        .map(|feature| {
            let band = VifBand::from_vif(feature.vif);
            view! {
                <div class="feature feature--dropped">
                    <span class="feature__name feature__name--struck">"\u{2715} " {feature.name}</span>
                    <div class="feature__meta">
                        <span class=band.css_class() title=band.label()>{format!("VIF: {}", feature.vif)}</span>
                        <p class="feature__reason">{feature.reason}</p>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let rfe_steps = RFE_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| {
            view! {
                <li class="steps__item">
                    <span class="steps__number">{i + 1}</span>
                    <span>{*step}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let bands = [(VifBand::Good, "VIF < 5"), (VifBand::Moderate, "VIF 5-10"), (VifBand::High, "VIF > 10")]
        .into_iter()
        .map(|(band, range)| {
            view! {
                <div class="vif-band">
                    <span>{range}</span>
                    <span class=band.css_class()>{band.label()}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="page__title">"Feature Selection & Model Building"</h1>
                <p class="page__lead">"Using RFE and VIF analysis to select the most important features"</p>
            </header>

            <div class="grid grid--2">
                <div class="card">
                    <h3 class="card__title">"Selected Features"</h3>
                    <p class="card__subtitle">"Features chosen by RFE with high importance scores"</p>
                    {selected}
                </div>
                <div class="card">
                    <h3 class="card__title">"Dropped Features"</h3>
                    <p class="card__subtitle">"Features removed due to multicollinearity or low importance"</p>
                    {dropped}
                </div>
            </div>

            <div class="grid grid--2">
                <div class="card">
                    <h3 class="card__title">"RFE Process"</h3>
                    <ol class="steps">{rfe_steps}</ol>
                </div>
                <div class="card">
                    <h3 class="card__title">"VIF Analysis"</h3>
                    <h4 class="text-purple">"What is VIF?"</h4>
                    <p>"Variance Inflation Factor measures multicollinearity between features."</p>
                    <h4 class="text-purple">"VIF Thresholds"</h4>
                    {bands}
                </div>
            </div>

            <div class="callout">
                <h3 class="callout__title">"Final Model Features"</h3>
                <p>
                    "After RFE and VIF analysis, we selected 6 key features that provide the best balance of predictive power and model interpretability."
                </p>
                <ul class="badge-list">
                    {SELECTED_FEATURES.iter().map(|f| view! { <li class="badge">{f.name}</li> }).collect::<Vec<_>>()}
                </ul>
            </div>

            <PageNav current="/modeling" />
        </section>
    }
}
